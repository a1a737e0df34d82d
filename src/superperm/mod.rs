//! Superpermutation construction and verification.
//!
//! - [`find`] - Builds a superpermutation from a shift sequence
//! - [`check`] - Verifies a candidate against every permutation
//! - [`permutations`] - Recursive-removal permutation generator
//! - [`symbols`] - Alphabet validation and length arithmetic

pub mod check;
pub mod find;
pub mod permutations;
pub mod symbols;

pub use check::{CheckReport, Verifier, check, check_report};
pub use find::{build_superpermutation, find, shift_sequence};
pub use permutations::permutations;
pub use symbols::{superpermutation_len, validate_symbols};
