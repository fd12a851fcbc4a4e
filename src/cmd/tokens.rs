use std::fs;
use std::path::PathBuf;

use tokval::tree::{FloatToken, IntToken, Token, tokens_from_json};

/// Dump the token stream a JSON file flattens to, one token per line.
pub fn run(path: PathBuf) -> tokval::tree::Result<()> {
	let text = fs::read_to_string(&path)?;
	let doc: serde_json::Value = serde_json::from_str(&text)?;

	for token in tokens_from_json(&doc) {
		println!("{}", render_token(&token));
	}

	Ok(())
}

fn render_token(token: &Token) -> String {
	match token {
		Token::ObjectStart => "object-start".to_owned(),
		Token::ObjectEnd => "object-end".to_owned(),
		Token::ArrayStart => "array-start".to_owned(),
		Token::ArrayEnd => "array-end".to_owned(),
		Token::Key(name) => format!("key \"{name}\""),
		Token::String(text) => format!("string \"{text}\""),
		Token::Int(IntToken::I32(v)) => format!("int32 {v}"),
		Token::Int(IntToken::I64(v)) => format!("int64 {v}"),
		Token::Int(IntToken::Big(v)) => format!("bigint {v}"),
		Token::Float(FloatToken::F32(v)) => format!("float32 {v}"),
		Token::Float(FloatToken::F64(v)) => format!("float64 {v}"),
		Token::Float(FloatToken::Big(v)) => format!("decimal {v}"),
		Token::Bool(v) => format!("bool {v}"),
		Token::Null => "null".to_owned(),
		Token::Embedded(bytes) => format!("embedded[{}]", bytes.len()),
	}
}
