use indexmap::IndexMap;

use crate::tree::features::Features;
use crate::tree::value::{Value, ValueMap};
use crate::tree::{ReadError, Result};

/// Construction strategy for sequence containers.
///
/// Blueprint instances are shared and immutable; `for_operation` derives the
/// instance a single read operation uses, so no accumulation state is ever
/// shared across operations. Zero- and one-element containers bypass the
/// growable accumulator entirely.
pub trait SequenceBuilder: Send + Sync {
	/// Derive a fresh per-operation builder bound to `features`.
	fn for_operation(&self, features: Features) -> Box<dyn SequenceBuilder>;

	/// Allocation-free empty sequence.
	fn empty(&self) -> Vec<Value>;

	/// Minimal one-element sequence.
	fn singleton(&self, item: Value) -> Vec<Value>;

	/// Open a growable accumulator for one container.
	///
	/// Nested containers each get their own accumulator.
	fn start(&self) -> Box<dyn SequenceAccumulator>;
}

/// Growable accumulation state for a single sequence container.
pub trait SequenceAccumulator {
	/// Append one element in stream order.
	fn push(&mut self, item: Value);

	/// Finalize, reflecting all appended elements in call order.
	fn finish(self: Box<Self>) -> Vec<Value>;
}

/// Construction strategy for keyed containers.
pub trait KeyedBuilder: Send + Sync {
	/// Derive a fresh per-operation builder bound to `features`.
	fn for_operation(&self, features: Features) -> Box<dyn KeyedBuilder>;

	/// Allocation-free empty collection.
	fn empty(&self) -> ValueMap;

	/// Minimal one-entry collection.
	fn singleton(&self, key: String, value: Value) -> ValueMap;

	/// Open a growable accumulator for one container.
	fn start(&self) -> Box<dyn KeyedAccumulator>;
}

/// Growable accumulation state for a single keyed container.
pub trait KeyedAccumulator {
	/// Insert one entry; the duplicate-key policy is decided here.
	fn put(&mut self, key: String, value: Value) -> Result<()>;

	/// Finalize, reflecting all inserts, last write winning per key.
	fn finish(self: Box<Self>) -> ValueMap;
}

/// Default sequence strategy over `Vec`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSequenceBuilder;

impl SequenceBuilder for DefaultSequenceBuilder {
	fn for_operation(&self, _features: Features) -> Box<dyn SequenceBuilder> {
		Box::new(DefaultSequenceBuilder)
	}

	fn empty(&self) -> Vec<Value> {
		Vec::new()
	}

	fn singleton(&self, item: Value) -> Vec<Value> {
		vec![item]
	}

	fn start(&self) -> Box<dyn SequenceAccumulator> {
		Box::new(VecAccumulator { items: Vec::new() })
	}
}

struct VecAccumulator {
	items: Vec<Value>,
}

impl SequenceAccumulator for VecAccumulator {
	fn push(&mut self, item: Value) {
		self.items.push(item);
	}

	fn finish(self: Box<Self>) -> Vec<Value> {
		self.items
	}
}

/// Default keyed strategy over an insertion-ordered map.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultKeyedBuilder {
	features: Features,
}

impl KeyedBuilder for DefaultKeyedBuilder {
	fn for_operation(&self, features: Features) -> Box<dyn KeyedBuilder> {
		Box::new(DefaultKeyedBuilder { features })
	}

	fn empty(&self) -> ValueMap {
		IndexMap::new()
	}

	fn singleton(&self, key: String, value: Value) -> ValueMap {
		let mut map = IndexMap::with_capacity(1);
		map.insert(key, value);
		map
	}

	fn start(&self) -> Box<dyn KeyedAccumulator> {
		Box::new(MapAccumulator {
			features: self.features,
			entries: IndexMap::new(),
		})
	}
}

struct MapAccumulator {
	features: Features,
	entries: ValueMap,
}

impl KeyedAccumulator for MapAccumulator {
	fn put(&mut self, key: String, value: Value) -> Result<()> {
		if self.features.contains(Features::FAIL_ON_DUPLICATE_KEYS) && self.entries.contains_key(&key) {
			return Err(ReadError::DuplicateKey { key });
		}
		self.entries.insert(key, value);
		Ok(())
	}

	fn finish(self: Box<Self>) -> ValueMap {
		self.entries
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sequence_size_classes() {
		let builder = DefaultSequenceBuilder.for_operation(Features::empty());

		assert!(builder.empty().is_empty());
		assert_eq!(builder.singleton(Value::I32(7)), vec![Value::I32(7)]);

		let mut acc = builder.start();
		acc.push(Value::I32(1));
		acc.push(Value::I32(2));
		assert_eq!(acc.finish(), vec![Value::I32(1), Value::I32(2)]);
	}

	#[test]
	fn keyed_last_write_wins_keeps_entry_position() {
		let builder = DefaultKeyedBuilder::default().for_operation(Features::empty());

		let mut acc = builder.start();
		acc.put("a".to_owned(), Value::I32(1)).unwrap();
		acc.put("b".to_owned(), Value::I32(2)).unwrap();
		acc.put("a".to_owned(), Value::I32(3)).unwrap();
		let map = acc.finish();

		assert_eq!(map.len(), 2);
		assert_eq!(map.get_index(0), Some((&"a".to_owned(), &Value::I32(3))));
		assert_eq!(map.get_index(1), Some((&"b".to_owned(), &Value::I32(2))));
	}

	#[test]
	fn keyed_duplicate_rejection_is_opt_in() {
		let builder = DefaultKeyedBuilder::default().for_operation(Features::FAIL_ON_DUPLICATE_KEYS);

		let mut acc = builder.start();
		acc.put("a".to_owned(), Value::I32(1)).unwrap();
		let err = acc.put("a".to_owned(), Value::I32(2)).unwrap_err();
		assert!(matches!(err, ReadError::DuplicateKey { key } if key == "a"));
	}
}
