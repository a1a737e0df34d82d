//! Shared building blocks.
//!
//! ## Modules
//!
//! - [`factorial`] - Exact factorial table for inputs up to 20
//! - [`distribute`] - Balanced fan-out of index ranges across worker tasks
//!
//! ```
//! use superperm::utils::{distribute, factorial};
//!
//! assert_eq!(factorial(4).unwrap(), 24);
//!
//! // Sum 0..100 in up to 32 concurrent buckets
//! let partials = distribute(100, |start, end| (start..=end).sum::<usize>());
//! assert_eq!(partials.iter().sum::<usize>(), 4950);
//! ```

pub mod distribute;
pub mod factorial;

pub use distribute::*;
pub use factorial::*;
