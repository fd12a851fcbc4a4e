use bitflags::bitflags;

bitflags! {
	/// Immutable behavior flags consulted by the reader and its builders.
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub struct Features: u32 {
		/// Materialize every floating token as a high-precision decimal,
		/// regardless of the source's own precision classification.
		const DECIMAL_FLOATS = 1 << 0;
		/// Reject duplicate object keys instead of last-write-wins.
		const FAIL_ON_DUPLICATE_KEYS = 1 << 1;
	}
}

impl Default for Features {
	fn default() -> Self {
		Features::empty()
	}
}
