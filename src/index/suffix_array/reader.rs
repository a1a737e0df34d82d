//! Substring index queries
//!
//! Provides O(m log n) exact substring search over a built suffix array.
//! The index is read-only once built and can be shared across threads.

use super::builder::SuffixArrayBuilder;
use super::types::*;
use memchr::memmem;

/// Read-only suffix array over one text
pub struct SubstringIndex {
    /// Indexed text
    text: Vec<u8>,
    /// Sorted suffix start positions
    suffix_array: Vec<SuffixEntry>,
}

impl SubstringIndex {
    pub(super) fn from_parts(text: Vec<u8>, suffix_array: Vec<SuffixEntry>) -> Self {
        Self { text, suffix_array }
    }

    /// Build an index over `text` with the default configuration
    pub fn new(text: &str) -> Self {
        SuffixArrayBuilder::with_defaults().build(text)
    }

    /// Get the full text slice
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Get text starting at a position
    #[inline]
    fn text_at(&self, pos: TextPosition) -> &[u8] {
        &self.text[pos..]
    }

    /// Search for a pattern in the suffix array
    ///
    /// Returns the range [lo, hi) of indices in the suffix array where all
    /// suffixes start with the pattern. The empty pattern matches nothing.
    pub fn search(&self, pattern: &[u8]) -> (usize, usize) {
        if pattern.is_empty() || self.suffix_array.is_empty() {
            return (0, 0);
        }

        let lo = self.lower_bound(pattern);
        let hi = self.upper_bound(pattern, lo);
        (lo, hi)
    }

    /// Find first index where suffix starts with pattern (or would if inserted)
    fn lower_bound(&self, pattern: &[u8]) -> usize {
        let mut lo = 0;
        let mut hi = self.suffix_array.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let suffix = self.text_at(self.suffix_array[mid]);

            let cmp_len = pattern.len().min(suffix.len());
            if &suffix[..cmp_len] < pattern {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// Find first index at or after `start` where suffix does NOT start with pattern
    fn upper_bound(&self, pattern: &[u8], start: usize) -> usize {
        let mut lo = start;
        let mut hi = self.suffix_array.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.text_at(self.suffix_array[mid]).starts_with(pattern) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// Whether the pattern is longer than the sort window
    #[inline]
    fn needs_scan(pattern: &[u8]) -> bool {
        pattern.len() > MAX_COMPARE
    }

    /// All (possibly overlapping) match offsets found by a linear scan
    fn scan_positions(&self, pattern: &[u8]) -> Vec<TextPosition> {
        let finder = memmem::Finder::new(pattern);
        let mut positions = Vec::new();
        let mut from = 0;

        while let Some(offset) = finder.find(&self.text[from..]) {
            positions.push(from + offset);
            from += offset + 1;
        }

        positions
    }

    /// Check if pattern occurs at least once
    pub fn contains(&self, pattern: &[u8]) -> bool {
        if pattern.is_empty() {
            return false;
        }
        if Self::needs_scan(pattern) {
            return memmem::find(&self.text, pattern).is_some();
        }

        let (lo, hi) = self.search(pattern);
        lo < hi
    }

    /// Get the number of occurrences of a pattern, overlapping ones included
    pub fn count_matches(&self, pattern: &[u8]) -> usize {
        if pattern.is_empty() {
            return 0;
        }
        if Self::needs_scan(pattern) {
            return self.scan_positions(pattern).len();
        }

        let (lo, hi) = self.search(pattern);
        hi - lo
    }

    /// Start offsets of every occurrence, in ascending order
    pub fn positions(&self, pattern: &[u8]) -> Vec<TextPosition> {
        if pattern.is_empty() {
            return Vec::new();
        }
        if Self::needs_scan(pattern) {
            return self.scan_positions(pattern);
        }

        let (lo, hi) = self.search(pattern);
        let mut positions = self.suffix_array[lo..hi].to_vec();
        positions.sort_unstable();
        positions
    }

    /// Get statistics about this index
    pub fn stats(&self) -> SubstringIndexStats {
        SubstringIndexStats {
            text_size: self.text.len(),
            suffix_count: self.suffix_array.len(),
        }
    }
}
