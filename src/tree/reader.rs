use std::sync::Arc;

use rust_decimal::Decimal;

use crate::tree::builder::{DefaultKeyedBuilder, DefaultSequenceBuilder, KeyedBuilder, SequenceBuilder};
use crate::tree::features::Features;
use crate::tree::hooks::{DefaultHooks, ValueHooks};
use crate::tree::token::{FloatToken, IntToken, Token, TokenKind, TokenSource};
use crate::tree::value::{Value, ValueMap};
use crate::tree::{ReadError, Result};

/// Default container nesting ceiling.
const DEFAULT_MAX_DEPTH: u32 = 128;

/// Immutable blueprint for read operations.
///
/// A blueprint is configured once and shared freely; it never reads tokens
/// itself. [`TreeReader::bind`] derives the per-operation reader that does.
/// Replacement methods return the receiver unchanged when the argument is
/// identical, so reconfiguring with the same settings is free.
#[derive(Clone)]
pub struct TreeReader {
	features: Features,
	max_depth: u32,
	sequence: Arc<dyn SequenceBuilder>,
	keyed: Arc<dyn KeyedBuilder>,
	hooks: Arc<dyn ValueHooks>,
}

impl Default for TreeReader {
	fn default() -> Self {
		Self::new()
	}
}

impl TreeReader {
	/// Blueprint with default strategies, default hooks, and no features.
	pub fn new() -> Self {
		Self {
			features: Features::empty(),
			max_depth: DEFAULT_MAX_DEPTH,
			sequence: Arc::new(DefaultSequenceBuilder),
			keyed: Arc::new(DefaultKeyedBuilder::default()),
			hooks: Arc::new(DefaultHooks),
		}
	}

	/// Replace the feature set.
	pub fn with_features(self, features: Features) -> Self {
		if self.features == features {
			return self;
		}
		Self { features, ..self }
	}

	/// Replace the container nesting ceiling.
	pub fn with_max_depth(self, max_depth: u32) -> Self {
		if self.max_depth == max_depth {
			return self;
		}
		Self { max_depth, ..self }
	}

	/// Replace the sequence construction strategy.
	pub fn with_sequence_builder(self, sequence: Arc<dyn SequenceBuilder>) -> Self {
		if Arc::ptr_eq(&self.sequence, &sequence) {
			return self;
		}
		Self { sequence, ..self }
	}

	/// Replace the keyed construction strategy.
	pub fn with_keyed_builder(self, keyed: Arc<dyn KeyedBuilder>) -> Self {
		if Arc::ptr_eq(&self.keyed, &keyed) {
			return self;
		}
		Self { keyed, ..self }
	}

	/// Replace the conversion hooks.
	pub fn with_hooks(self, hooks: Arc<dyn ValueHooks>) -> Self {
		if Arc::ptr_eq(&self.hooks, &hooks) {
			return self;
		}
		Self { hooks, ..self }
	}

	/// Feature set this blueprint was configured with.
	pub fn features(&self) -> Features {
		self.features
	}

	/// Derive the per-operation reader for one read over `source`.
	///
	/// Builder instances are derived fresh, so concurrent operations bound
	/// from the same blueprint never share accumulation state.
	pub fn bind<'s, S: TokenSource>(&self, source: &'s mut S) -> BoundReader<'s, S> {
		BoundReader {
			features: self.features,
			max_depth: self.max_depth,
			sequence: self.sequence.for_operation(self.features),
			keyed: self.keyed.for_operation(self.features),
			hooks: Arc::clone(&self.hooks),
			source,
		}
	}
}

/// Per-operation reader bound to one token source.
///
/// Entry operations consume the reader: one bound instance performs exactly
/// one read and is then discarded. The source must be freshly positioned at
/// the appropriate starting token before the call.
pub struct BoundReader<'s, S: TokenSource> {
	features: Features,
	max_depth: u32,
	sequence: Box<dyn SequenceBuilder>,
	keyed: Box<dyn KeyedBuilder>,
	hooks: Arc<dyn ValueHooks>,
	source: &'s mut S,
}

impl<'s, S: TokenSource> BoundReader<'s, S> {
	/// Read whatever value the source is positioned at.
	///
	/// Structural tokens (end-of-object, end-of-array, field names) are not
	/// legal value starts anywhere, the root included.
	pub fn read_value(mut self) -> Result<Value> {
		if matches!(self.source.current(), Some(Token::Null)) {
			return Ok(self.hooks.null_for_root_value());
		}
		self.read_any(0)
	}

	/// Read a keyed collection; the source must be at object-start.
	///
	/// A bare root null yields the map-specific null default, not an error
	/// and not an empty collection.
	pub fn read_map(mut self) -> Result<Option<ValueMap>> {
		match self.source.current().map(Token::kind) {
			Some(TokenKind::ObjectStart) => self.read_object_body(0).map(Some),
			Some(TokenKind::Null) => Ok(self.hooks.null_for_root_map()),
			actual => Err(ReadError::TypeMismatch {
				expected: TokenKind::ObjectStart,
				actual,
			}),
		}
	}

	/// Read a sequence; the source must be at array-start.
	pub fn read_sequence(mut self) -> Result<Option<Vec<Value>>> {
		match self.source.current().map(Token::kind) {
			Some(TokenKind::ArrayStart) => self.read_array_body(0).map(Some),
			Some(TokenKind::Null) => Ok(self.hooks.null_for_root_sequence()),
			actual => Err(ReadError::TypeMismatch {
				expected: TokenKind::ArrayStart,
				actual,
			}),
		}
	}

	/// Read a fixed-size array; the source must be at array-start.
	pub fn read_array(mut self) -> Result<Option<Box<[Value]>>> {
		match self.source.current().map(Token::kind) {
			Some(TokenKind::ArrayStart) => Ok(Some(self.read_array_body(0)?.into_boxed_slice())),
			Some(TokenKind::Null) => Ok(self.hooks.null_for_root_array()),
			actual => Err(ReadError::TypeMismatch {
				expected: TokenKind::ArrayStart,
				actual,
			}),
		}
	}

	fn read_any(&mut self, depth: u32) -> Result<Value> {
		let token = self.source.current().cloned().ok_or(ReadError::UnexpectedEnd)?;
		match token {
			Token::ObjectStart => Ok(Value::Map(self.read_object_body(depth)?)),
			Token::ArrayStart => Ok(Value::Sequence(self.read_array_body(depth)?)),
			Token::String(text) => Ok(self.hooks.on_string(text)),
			Token::Int(number) => Ok(int_value(number)),
			Token::Float(number) => self.float_value(number),
			Token::Bool(value) => Ok(self.hooks.on_bool(value)),
			Token::Null => Ok(self.hooks.on_null()),
			Token::Embedded(payload) => Ok(self.hooks.on_embedded(payload)),
			other @ (Token::ObjectEnd | Token::ArrayEnd | Token::Key(_)) => Err(ReadError::UnexpectedToken {
				actual: other.kind(),
			}),
		}
	}

	fn read_object_body(&mut self, depth: u32) -> Result<ValueMap> {
		let depth = self.enter(depth)?;

		// Empty and single-entry objects never touch the accumulator.
		if self.next_entry()? {
			return Ok(self.keyed.empty());
		}
		let key = self.read_key()?;
		let value = self.read_any(depth)?;
		if self.next_entry()? {
			return Ok(self.keyed.singleton(key, value));
		}

		let mut acc = self.keyed.start();
		acc.put(key, value)?;
		loop {
			let key = self.read_key()?;
			let value = self.read_any(depth)?;
			acc.put(key, value)?;
			if self.next_entry()? {
				return Ok(acc.finish());
			}
		}
	}

	fn read_array_body(&mut self, depth: u32) -> Result<Vec<Value>> {
		let depth = self.enter(depth)?;

		if self.next_element()? {
			return Ok(self.sequence.empty());
		}
		let first = self.read_any(depth)?;
		if self.next_element()? {
			return Ok(self.sequence.singleton(first));
		}

		let mut acc = self.sequence.start();
		acc.push(first);
		loop {
			let item = self.read_any(depth)?;
			acc.push(item);
			if self.next_element()? {
				return Ok(acc.finish());
			}
		}
	}

	/// Advance to the next field/value pair; true when the object closed.
	fn next_entry(&mut self) -> Result<bool> {
		match self.source.next_value()? {
			Some(TokenKind::ObjectEnd) => Ok(true),
			Some(_) => Ok(false),
			None => Err(ReadError::UnexpectedEnd),
		}
	}

	/// Advance to the next element; true when the array closed.
	fn next_element(&mut self) -> Result<bool> {
		match self.source.next_token()? {
			Some(TokenKind::ArrayEnd) => Ok(true),
			Some(_) => Ok(false),
			None => Err(ReadError::UnexpectedEnd),
		}
	}

	fn read_key(&mut self) -> Result<String> {
		let raw = self.source.current_name().ok_or(ReadError::MissingFieldName)?.to_owned();
		Ok(self.hooks.on_key(raw))
	}

	fn float_value(&self, number: FloatToken) -> Result<Value> {
		if self.features.contains(Features::DECIMAL_FLOATS) {
			return Ok(Value::Decimal(decimal_of(number)?));
		}
		Ok(match number {
			FloatToken::F32(value) => Value::F32(value),
			FloatToken::F64(value) => Value::F64(value),
			FloatToken::Big(value) => Value::Decimal(value),
		})
	}

	fn enter(&self, depth: u32) -> Result<u32> {
		if depth >= self.max_depth {
			return Err(ReadError::DepthExceeded {
				max_depth: self.max_depth,
			});
		}
		Ok(depth + 1)
	}
}

fn int_value(number: IntToken) -> Value {
	match number {
		IntToken::I32(value) => Value::I32(value),
		IntToken::I64(value) => Value::I64(value),
		IntToken::Big(value) => Value::BigInt(value),
	}
}

fn decimal_of(number: FloatToken) -> Result<Decimal> {
	match number {
		FloatToken::F32(value) => Decimal::try_from(value).map_err(|_| ReadError::InvalidNumber {
			text: value.to_string(),
		}),
		FloatToken::F64(value) => Decimal::try_from(value).map_err(|_| ReadError::InvalidNumber {
			text: value.to_string(),
		}),
		FloatToken::Big(value) => Ok(value),
	}
}
