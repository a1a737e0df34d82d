//! Exact factorial lookup
//!
//! Every value of n! that fits in a `u64` is stored in a literal table, so
//! lookups are O(1) and need no initialization.

use crate::error::{Result, SuperpermError};

/// Largest input whose factorial fits in the table (20! < 2^64 < 21!)
pub const MAX_FACTORIAL_INPUT: usize = 20;

/// n! for n = 0..=20
pub const FACTORIALS: [u64; MAX_FACTORIAL_INPUT + 1] = [
    1,
    1,
    2,
    6,
    24,
    120,
    720,
    5_040,
    40_320,
    362_880,
    3_628_800,
    39_916_800,
    479_001_600,
    6_227_020_800,
    87_178_291_200,
    1_307_674_368_000,
    20_922_789_888_000,
    355_687_428_096_000,
    6_402_373_705_728_000,
    121_645_100_408_832_000,
    2_432_902_008_176_640_000,
];

/// Return `a!` exactly
///
/// Fails with [`SuperpermError::Overflow`] for `a > 20`.
#[inline]
pub fn factorial(a: usize) -> Result<u64> {
    FACTORIALS
        .get(a)
        .copied()
        .ok_or(SuperpermError::Overflow {
            requested: a,
            max: MAX_FACTORIAL_INPUT,
        })
}

/// `a!` as a `usize`, for sizing buffers and index arithmetic
///
/// Also fails with [`SuperpermError::Overflow`] on targets where the value
/// does not fit in `usize`.
pub fn factorial_usize(a: usize) -> Result<usize> {
    usize::try_from(factorial(a)?).map_err(|_| SuperpermError::Overflow {
        requested: a,
        max: MAX_FACTORIAL_INPUT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(1).unwrap(), 1);
        assert_eq!(factorial(3).unwrap(), 6);
        assert_eq!(factorial(10).unwrap(), 3_628_800);
    }

    #[test]
    fn test_table_is_consistent() {
        for a in 1..=MAX_FACTORIAL_INPUT {
            assert_eq!(FACTORIALS[a], FACTORIALS[a - 1] * a as u64);
        }
    }

    #[test]
    fn test_upper_boundary() {
        assert_eq!(factorial(20).unwrap(), 2_432_902_008_176_640_000);
        assert_eq!(
            factorial(21),
            Err(SuperpermError::Overflow {
                requested: 21,
                max: 20
            })
        );
        assert!(factorial(usize::MAX).is_err());
    }

    #[test]
    fn test_usize_variant() {
        assert_eq!(factorial_usize(5).unwrap(), 120);
        assert!(factorial_usize(21).is_err());
    }
}
