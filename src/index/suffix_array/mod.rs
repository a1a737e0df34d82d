//! Suffix array indexing module
//!
//! This module provides O(m log n) exact substring search using suffix arrays.
//! A candidate superpermutation is indexed once and then queried for every
//! permutation of the alphabet, so lookups dominate the build cost.
//!
//! ## Architecture
//!
//! - `builder`: Sorts suffixes of the candidate text
//! - `reader`: Binary-search queries over the sorted suffixes
//! - `types`: Core type definitions and configuration

pub mod builder;
pub mod reader;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixArrayBuilder;
pub use reader::SubstringIndex;
pub use types::{MAX_COMPARE, SubstringIndexStats, SuffixArrayConfig};
