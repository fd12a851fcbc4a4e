use crate::tree::Result;
use crate::tree::token::{Token, TokenKind, TokenSource};

/// In-memory token source over a pre-built token vector.
///
/// Construction positions the buffer at the first token, ready for an entry
/// operation. Advancing never fails.
#[derive(Debug, Clone)]
pub struct TokenBuffer {
	tokens: Vec<Token>,
	pos: usize,
	name: Option<String>,
}

impl TokenBuffer {
	/// Build a source positioned at the first token of `tokens`.
	pub fn new(tokens: Vec<Token>) -> Self {
		Self {
			tokens,
			pos: 0,
			name: None,
		}
	}
}

impl TokenSource for TokenBuffer {
	fn current(&self) -> Option<&Token> {
		self.tokens.get(self.pos)
	}

	fn next_token(&mut self) -> Result<Option<TokenKind>> {
		self.pos = self.pos.saturating_add(1);
		Ok(self.current().map(Token::kind))
	}

	fn next_value(&mut self) -> Result<Option<TokenKind>> {
		self.pos = self.pos.saturating_add(1);
		if let Some(Token::Key(name)) = self.tokens.get(self.pos) {
			self.name = Some(name.clone());
			self.pos += 1;
		}
		Ok(self.current().map(Token::kind))
	}

	fn current_name(&self) -> Option<&str> {
		self.name.as_deref()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tree::token::IntToken;

	#[test]
	fn positioned_at_first_token_on_construction() {
		let buffer = TokenBuffer::new(vec![Token::Null]);
		assert!(matches!(buffer.current(), Some(Token::Null)));
		assert_eq!(buffer.current_name(), None);
	}

	#[test]
	fn next_value_skips_key_and_records_name() {
		let mut buffer = TokenBuffer::new(vec![
			Token::ObjectStart,
			Token::Key("a".to_owned()),
			Token::Int(IntToken::I32(1)),
			Token::ObjectEnd,
		]);

		assert_eq!(buffer.next_value().unwrap(), Some(TokenKind::Int));
		assert_eq!(buffer.current_name(), Some("a"));
		assert_eq!(buffer.next_value().unwrap(), Some(TokenKind::ObjectEnd));
		assert_eq!(buffer.next_value().unwrap(), None);
	}

	#[test]
	fn next_token_steps_without_key_handling() {
		let mut buffer = TokenBuffer::new(vec![
			Token::ArrayStart,
			Token::Bool(true),
			Token::ArrayEnd,
		]);

		assert_eq!(buffer.next_token().unwrap(), Some(TokenKind::Bool));
		assert_eq!(buffer.next_token().unwrap(), Some(TokenKind::ArrayEnd));
		assert_eq!(buffer.next_token().unwrap(), None);
		assert_eq!(buffer.next_token().unwrap(), None);
	}
}
