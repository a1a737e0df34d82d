//! Types for suffix array indexing
//!
//! This module defines the core types used for suffix array-based search,
//! which provides O(m log n) exact substring matching over one candidate.

use serde::{Deserialize, Serialize};

/// Byte offset into the indexed text
pub type TextPosition = usize;

/// Suffix array entry - starting offset of a suffix in the text
pub type SuffixEntry = usize;

/// Suffixes are ordered by at most this many leading bytes.
///
/// Binary search stays exact for any pattern no longer than the window;
/// longer patterns are answered by a linear scan instead.
pub const MAX_COMPARE: usize = 256;

/// Configuration for suffix array building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixArrayConfig {
    /// Texts at least this long are sorted with rayon's parallel sort
    #[serde(default = "default_parallel_sort_threshold")]
    pub parallel_sort_threshold: usize,
}

fn default_parallel_sort_threshold() -> usize {
    100_000
}

impl Default for SuffixArrayConfig {
    fn default() -> Self {
        Self {
            parallel_sort_threshold: default_parallel_sort_threshold(),
        }
    }
}

/// Statistics about a built index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstringIndexStats {
    /// Size of the indexed text in bytes
    pub text_size: usize,
    /// Number of suffixes (equals text_size)
    pub suffix_count: usize,
}
