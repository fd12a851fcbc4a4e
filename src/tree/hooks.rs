use crate::tree::value::{Value, ValueMap};

/// Overridable single-value transforms applied during materialization.
///
/// Every method has a default, so a specialized reader overrides exactly the
/// hook it needs without re-deriving traversal. Scalars in the output tree
/// are produced only through these hooks.
pub trait ValueHooks: Send + Sync {
	/// Transform a nested null token. Default: [`Value::Null`].
	fn on_null(&self) -> Value {
		Value::Null
	}

	/// Transform a boolean token. Default: identity.
	fn on_bool(&self, value: bool) -> Value {
		Value::Bool(value)
	}

	/// Transform an object field name before it becomes a map key.
	fn on_key(&self, raw: String) -> String {
		raw
	}

	/// Transform a text token. Default: identity.
	fn on_string(&self, raw: String) -> Value {
		Value::String(raw)
	}

	/// Transform an embedded payload. Default: byte passthrough.
	fn on_embedded(&self, raw: Vec<u8>) -> Value {
		Value::Bytes(raw)
	}

	/// Result of a bare null at the root of a generic read.
	fn null_for_root_value(&self) -> Value {
		Value::Null
	}

	/// Result of a bare null at the root of a map read.
	fn null_for_root_map(&self) -> Option<ValueMap> {
		None
	}

	/// Result of a bare null at the root of a sequence read.
	fn null_for_root_sequence(&self) -> Option<Vec<Value>> {
		None
	}

	/// Result of a bare null at the root of an array read.
	fn null_for_root_array(&self) -> Option<Box<[Value]>> {
		None
	}
}

/// Identity implementation of every hook.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl ValueHooks for DefaultHooks {}
