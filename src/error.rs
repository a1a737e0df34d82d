//! Error types for superpermutation construction and verification

use thiserror::Error;

/// Result type for superpermutation operations
pub type Result<T> = std::result::Result<T, SuperpermError>;

/// Errors that can occur while building or checking a superpermutation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuperpermError {
    /// A factorial was requested beyond the precomputed table
    #[error("cannot compute factorial of {requested}: largest supported input is {max}")]
    Overflow { requested: usize, max: usize },

    /// A buffer sized by a factorial could not be reserved
    ///
    /// Alphabets near the 20-symbol bound pass validation but need n!-sized
    /// buffers that no allocator can satisfy.
    #[error("cannot reserve a buffer of {elements} elements")]
    Allocation { elements: usize },

    /// The symbol alphabet repeats a symbol
    #[error("symbol {symbol:?} appears at positions {first} and {second}")]
    DuplicateSymbol {
        symbol: char,
        first: usize,
        second: usize,
    },
}
