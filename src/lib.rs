//! Materialize streams of primitive parse tokens into generic value trees.
//!
//! The core is a blueprint/per-operation split: a configured
//! [`tree::TreeReader`] is immutable and freely shareable, and each read
//! operation binds it to a positioned token source to produce one owned
//! [`tree::Value`] tree.

pub mod tree;
