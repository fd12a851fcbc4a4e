use num_bigint::BigInt;
use rust_decimal::Decimal;

use crate::tree::Result;

/// Integral token payload, classified by magnitude at the source.
#[derive(Debug, Clone, PartialEq)]
pub enum IntToken {
	/// Fits in 32 bits.
	I32(i32),
	/// Fits in 64 bits.
	I64(i64),
	/// Beyond 64 bits.
	Big(BigInt),
}

/// Floating token payload, classified by precision at the source.
#[derive(Debug, Clone, PartialEq)]
pub enum FloatToken {
	/// Representable in single precision.
	F32(f32),
	/// Representable in double precision.
	F64(f64),
	/// Already materialized as a decimal by the source.
	Big(Decimal),
}

/// One primitive parse event, carrying its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
	/// Start of a keyed object region.
	ObjectStart,
	/// End of a keyed object region.
	ObjectEnd,
	/// Start of an array region.
	ArrayStart,
	/// End of an array region.
	ArrayEnd,
	/// Object field name.
	Key(String),
	/// Text scalar.
	String(String),
	/// Integral scalar.
	Int(IntToken),
	/// Floating scalar.
	Float(FloatToken),
	/// Boolean scalar.
	Bool(bool),
	/// Explicit null.
	Null,
	/// Out-of-band payload already materialized by the source.
	Embedded(Vec<u8>),
}

impl Token {
	/// Fieldless kind of this token, used for dispatch and error payloads.
	pub fn kind(&self) -> TokenKind {
		match self {
			Token::ObjectStart => TokenKind::ObjectStart,
			Token::ObjectEnd => TokenKind::ObjectEnd,
			Token::ArrayStart => TokenKind::ArrayStart,
			Token::ArrayEnd => TokenKind::ArrayEnd,
			Token::Key(_) => TokenKind::Key,
			Token::String(_) => TokenKind::String,
			Token::Int(_) => TokenKind::Int,
			Token::Float(_) => TokenKind::Float,
			Token::Bool(_) => TokenKind::Bool,
			Token::Null => TokenKind::Null,
			Token::Embedded(_) => TokenKind::Embedded,
		}
	}
}

/// Fieldless mirror of [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
	/// Start of a keyed object region.
	ObjectStart,
	/// End of a keyed object region.
	ObjectEnd,
	/// Start of an array region.
	ArrayStart,
	/// End of an array region.
	ArrayEnd,
	/// Object field name.
	Key,
	/// Text scalar.
	String,
	/// Integral scalar.
	Int,
	/// Floating scalar.
	Float,
	/// Boolean scalar.
	Bool,
	/// Explicit null.
	Null,
	/// Out-of-band payload.
	Embedded,
}

/// Positioned, forward-only stream of tokens feeding the reader.
///
/// The reader only inspects the current token and advances; sources never
/// need to seek backward. Source failures propagate unmodified through the
/// crate [`Result`].
pub trait TokenSource {
	/// Token the source is currently positioned at, if any.
	fn current(&self) -> Option<&Token>;

	/// Advance one token; returns the new current kind.
	fn next_token(&mut self) -> Result<Option<TokenKind>>;

	/// Advance to the next field/value pair: skips over one [`Token::Key`],
	/// recording its text for [`TokenSource::current_name`].
	fn next_value(&mut self) -> Result<Option<TokenKind>>;

	/// Field name recorded by the most recent `next_value` key skip.
	fn current_name(&self) -> Option<&str>;
}
