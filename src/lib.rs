//! # superperm - Superpermutation construction and verification
//!
//! A superpermutation of an alphabet is a string that contains every
//! ordering of the alphabet as a contiguous substring. This crate builds
//! one of length `1! + 2! + ... + n!` for up to 20 distinct symbols and
//! checks arbitrary candidates in parallel.
//!
//! ## Architecture
//!
//! - [`superperm`] - Construction, verification, and permutation generation
//! - [`index`] - Suffix array substring index over a candidate
//! - [`utils`] - Factorial table and balanced work distribution
//! - [`config`] - Serde-backed tuning for the verifier
//! - [`error`] - Error type shared by every fallible operation
//!
//! ## Quick Start
//!
//! ```
//! let candidate = superperm::find("abc").unwrap();
//! assert_eq!(candidate, "abcabacba");
//! assert!(superperm::check("abc", &candidate).unwrap());
//!
//! let report = superperm::check_report("abc", "abcabcabc").unwrap();
//! assert_eq!(report.missing, vec!["acb", "bac", "cba"]);
//! ```
//!
//! ## Parallelism
//!
//! Verification fans out on the rayon global pool in two phases: the
//! permutation set and the candidate's suffix array are built side by side,
//! then lookups are split into at most 32 balanced buckets. Construction is
//! single-threaded.

pub mod config;
pub mod error;
pub mod index;
pub mod superperm;
pub mod utils;

pub use config::SuperpermConfig;
pub use error::{Result, SuperpermError};
pub use superperm::{CheckReport, Verifier, check, check_report, find};
