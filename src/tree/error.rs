use thiserror::Error;

use crate::tree::token::TokenKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ReadError>;

/// Errors produced while materializing a token stream into a value tree.
#[derive(Debug, Error)]
pub enum ReadError {
	/// Filesystem or stream IO failure surfaced by a token source.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON text could not be parsed at the interop boundary.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Typed entry operation invoked on the wrong start token.
	#[error("type mismatch: expected {expected:?}, got {actual:?}")]
	TypeMismatch {
		/// Start token the entry operation requires.
		expected: TokenKind,
		/// Token actually positioned at, if any remained.
		actual: Option<TokenKind>,
	},
	/// Token that cannot begin a value where a value is required.
	#[error("unexpected value token: {actual:?}")]
	UnexpectedToken {
		/// Offending token kind.
		actual: TokenKind,
	},
	/// Input ended where a token was required.
	#[error("unexpected end of token stream")]
	UnexpectedEnd,
	/// Source reported an object entry without a field name.
	#[error("missing field name for object entry")]
	MissingFieldName,
	/// Container nesting exceeded the configured ceiling.
	#[error("nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Duplicate object key rejected by configuration.
	#[error("duplicate object key: {key}")]
	DuplicateKey {
		/// Key that was seen more than once.
		key: String,
	},
	/// Numeric payload could not be represented as a decimal.
	#[error("invalid number for decimal coercion: {text}")]
	InvalidNumber {
		/// Display rendering of the offending payload.
		text: String,
	},
}
