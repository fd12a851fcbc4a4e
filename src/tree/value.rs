use indexmap::IndexMap;
use num_bigint::BigInt;
use rust_decimal::Decimal;

/// Keyed container: keys unique, insertion order preserved, re-inserting a
/// key overwrites the value without moving the entry.
pub type ValueMap = IndexMap<String, Value>;

/// Generic value tree produced by a read operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit null.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Integral scalar fitting 32 bits.
	I32(i32),
	/// Integral scalar fitting 64 bits.
	I64(i64),
	/// Integral scalar beyond 64 bits.
	BigInt(BigInt),
	/// Single-precision floating scalar.
	F32(f32),
	/// Double-precision floating scalar.
	F64(f64),
	/// High-precision decimal scalar.
	Decimal(Decimal),
	/// Text scalar.
	String(String),
	/// Opaque embedded payload passed through unchanged.
	Bytes(Vec<u8>),
	/// Ordered sequence of values, token order preserved.
	Sequence(Vec<Value>),
	/// Fixed-size indexable block, produced on explicit array reads.
	Array(Box<[Value]>),
	/// Keyed collection with preserved insertion order.
	Map(ValueMap),
}

impl Value {
	/// True for the container variants (sequence, array, map).
	pub fn is_container(&self) -> bool {
		matches!(self, Value::Sequence(_) | Value::Array(_) | Value::Map(_))
	}
}
