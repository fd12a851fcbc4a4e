//! serde_json interop boundary.
//!
//! The tokenizer itself lives outside this crate; this module adapts an
//! already-parsed [`serde_json::Value`] into a token stream for the reader
//! and renders a materialized tree back to JSON for display.

use num_bigint::BigInt;

use crate::tree::buffer::TokenBuffer;
use crate::tree::token::{FloatToken, IntToken, Token};
use crate::tree::value::Value;

/// Flatten a parsed JSON document into a positioned token source.
pub fn source_from_json(doc: &serde_json::Value) -> TokenBuffer {
	TokenBuffer::new(tokens_from_json(doc))
}

/// Flatten a parsed JSON document into its token stream.
pub fn tokens_from_json(doc: &serde_json::Value) -> Vec<Token> {
	let mut out = Vec::new();
	push_value(&mut out, doc);
	out
}

fn push_value(out: &mut Vec<Token>, doc: &serde_json::Value) {
	match doc {
		serde_json::Value::Null => out.push(Token::Null),
		serde_json::Value::Bool(value) => out.push(Token::Bool(*value)),
		serde_json::Value::Number(number) => out.push(number_token(number)),
		serde_json::Value::String(text) => out.push(Token::String(text.clone())),
		serde_json::Value::Array(items) => {
			out.push(Token::ArrayStart);
			for item in items {
				push_value(out, item);
			}
			out.push(Token::ArrayEnd);
		}
		serde_json::Value::Object(map) => {
			out.push(Token::ObjectStart);
			for (key, value) in map {
				out.push(Token::Key(key.clone()));
				push_value(out, value);
			}
			out.push(Token::ObjectEnd);
		}
	}
}

fn number_token(number: &serde_json::Number) -> Token {
	if let Some(value) = number.as_i64() {
		return match i32::try_from(value) {
			Ok(small) => Token::Int(IntToken::I32(small)),
			Err(_) => Token::Int(IntToken::I64(value)),
		};
	}
	if let Some(value) = number.as_u64() {
		// Only reachable above i64::MAX.
		return Token::Int(IntToken::Big(BigInt::from(value)));
	}
	// A number that is not integral always has an f64 rendering; as_f64
	// returns None only under serde_json's arbitrary_precision feature,
	// which this crate does not enable.
	Token::Float(FloatToken::F64(number.as_f64().unwrap_or(f64::NAN)))
}

/// Render a materialized tree as JSON for display.
///
/// Big integers and decimals fall outside JSON's native number range and
/// render as strings; byte payloads render as number arrays.
pub fn value_to_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Null => serde_json::Value::Null,
		Value::Bool(v) => serde_json::Value::Bool(*v),
		Value::I32(v) => serde_json::Value::from(*v),
		Value::I64(v) => serde_json::Value::from(*v),
		Value::BigInt(v) => serde_json::Value::String(v.to_string()),
		Value::F32(v) => serde_json::Value::from(f64::from(*v)),
		Value::F64(v) => serde_json::Value::from(*v),
		Value::Decimal(v) => serde_json::Value::String(v.to_string()),
		Value::String(v) => serde_json::Value::String(v.clone()),
		Value::Bytes(bytes) => serde_json::Value::Array(bytes.iter().map(|byte| serde_json::Value::from(*byte)).collect()),
		Value::Sequence(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
		Value::Array(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
		Value::Map(map) => {
			let mut out = serde_json::Map::with_capacity(map.len());
			for (key, item) in map {
				out.insert(key.clone(), value_to_json(item));
			}
			serde_json::Value::Object(out)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tree::reader::TreeReader;

	#[test]
	fn u64_beyond_i64_classifies_as_big() {
		let doc: serde_json::Value = serde_json::from_str("18446744073709551615").unwrap();
		let tokens = tokens_from_json(&doc);
		assert_eq!(tokens, vec![Token::Int(IntToken::Big(BigInt::from(u64::MAX)))]);
	}

	#[test]
	fn non_integral_numbers_classify_as_f64() {
		let doc: serde_json::Value = serde_json::from_str("[2.5, -0.25, 1e3]").unwrap();
		let tokens = tokens_from_json(&doc);
		assert_eq!(
			tokens,
			vec![
				Token::ArrayStart,
				Token::Float(FloatToken::F64(2.5)),
				Token::Float(FloatToken::F64(-0.25)),
				Token::Float(FloatToken::F64(1000.0)),
				Token::ArrayEnd,
			]
		);
	}

	#[test]
	fn flattens_and_reads_back_to_same_document() {
		let doc: serde_json::Value =
			serde_json::from_str(r#"{"a":[1,2.5,"x"],"b":{"c":true},"d":null}"#).unwrap();

		let mut source = source_from_json(&doc);
		let value = TreeReader::new().bind(&mut source).read_value().unwrap();

		assert_eq!(value_to_json(&value), doc);
	}

	#[test]
	fn big_numbers_render_as_strings() {
		let big = Value::BigInt(BigInt::from(u64::MAX));
		assert_eq!(value_to_json(&big), serde_json::Value::String("18446744073709551615".to_owned()));

		let decimal = Value::Decimal(rust_decimal::Decimal::new(314, 2));
		assert_eq!(value_to_json(&decimal), serde_json::Value::String("3.14".to_owned()));
	}
}
