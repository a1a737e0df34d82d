//! Suffix array builder
//!
//! Builds a suffix array over a single candidate text by sorting every
//! suffix start position, in parallel for large texts.

use super::reader::SubstringIndex;
use super::types::*;
use rayon::prelude::*;

/// Builder for constructing a [`SubstringIndex`]
#[derive(Debug, Clone, Default)]
pub struct SuffixArrayBuilder {
    config: SuffixArrayConfig,
}

impl SuffixArrayBuilder {
    /// Create a new suffix array builder with the given configuration
    pub fn new(config: SuffixArrayConfig) -> Self {
        Self { config }
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Build the index over `text`
    ///
    /// This is the main computation - sorts all suffixes, in parallel when
    /// the text reaches the configured threshold.
    pub fn build(&self, text: impl Into<Vec<u8>>) -> SubstringIndex {
        let text = text.into();
        let suffix_array = if text.is_empty() {
            Vec::new()
        } else {
            build_suffix_array(&text, self.config.parallel_sort_threshold)
        };

        tracing::trace!(text_size = text.len(), "built suffix array");
        SubstringIndex::from_parts(text, suffix_array)
    }
}

/// Build suffix array by sorting positions
///
/// 1. Creates array of all suffix positions [0, 1, 2, ..., n-1]
/// 2. Sorts positions by comparing the suffixes they point to
/// 3. Uses rayon for parallel sorting on large texts
///
/// Time: O(n log n) comparisons, each bounded by `MAX_COMPARE`
fn build_suffix_array(text: &[u8], parallel_threshold: usize) -> Vec<SuffixEntry> {
    let n = text.len();
    let mut sa: Vec<SuffixEntry> = (0..n).collect();

    if n >= parallel_threshold {
        sa.par_sort_unstable_by(|&a, &b| compare_suffixes(text, a, b));
    } else {
        sa.sort_unstable_by(|&a, &b| compare_suffixes(text, a, b));
    }

    sa
}

/// Compare two suffixes lexicographically on their first `MAX_COMPARE` bytes
#[inline]
fn compare_suffixes(text: &[u8], a: usize, b: usize) -> std::cmp::Ordering {
    let len_a = (text.len() - a).min(MAX_COMPARE);
    let len_b = (text.len() - b).min(MAX_COMPARE);

    text[a..a + len_a].cmp(&text[b..b + len_b])
}
