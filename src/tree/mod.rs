mod buffer;
mod builder;
mod error;
mod features;
mod hooks;
mod json;
mod reader;
mod token;
mod value;

/// In-memory token source.
pub use buffer::TokenBuffer;
/// Container construction strategies and their defaults.
pub use builder::{DefaultKeyedBuilder, DefaultSequenceBuilder, KeyedAccumulator, KeyedBuilder, SequenceAccumulator, SequenceBuilder};
/// Error and result aliases.
pub use error::{ReadError, Result};
/// Optional read behavior flags.
pub use features::Features;
/// Single-value conversion hooks.
pub use hooks::{DefaultHooks, ValueHooks};
/// JSON interop entry points.
pub use json::{source_from_json, tokens_from_json, value_to_json};
/// Blueprint and per-operation reader types.
pub use reader::{BoundReader, TreeReader};
/// Token model and source abstraction.
pub use token::{FloatToken, IntToken, Token, TokenKind, TokenSource};
/// Materialized value types.
pub use value::{Value, ValueMap};
