//! Alphabet validation and size arithmetic

use crate::error::{Result, SuperpermError};
use crate::utils::{MAX_FACTORIAL_INPUT, factorial_usize};
use rustc_hash::FxHashMap;

/// Split `symbols` into chars, rejecting oversized or repeating alphabets
///
/// Alphabets over 20 symbols fail with [`SuperpermError::Overflow`] before
/// duplicates are looked for. A repeated symbol fails with
/// [`SuperpermError::DuplicateSymbol`] naming its first two char positions.
pub fn validate_symbols(symbols: &str) -> Result<Vec<char>> {
    let chars: Vec<char> = symbols.chars().collect();
    if chars.len() > MAX_FACTORIAL_INPUT {
        return Err(SuperpermError::Overflow {
            requested: chars.len(),
            max: MAX_FACTORIAL_INPUT,
        });
    }

    let mut seen: FxHashMap<char, usize> = FxHashMap::default();
    for (second, &symbol) in chars.iter().enumerate() {
        if let Some(&first) = seen.get(&symbol) {
            return Err(SuperpermError::DuplicateSymbol {
                symbol,
                first,
                second,
            });
        }
        seen.insert(symbol, second);
    }

    Ok(chars)
}

/// Length of the superpermutation built for `n` symbols: `1! + 2! + ... + n!`
pub fn superpermutation_len(n: usize) -> Result<usize> {
    (1..=n).try_fold(0usize, |total, i| {
        let term = factorial_usize(i)?;
        total.checked_add(term).ok_or(SuperpermError::Overflow {
            requested: n,
            max: MAX_FACTORIAL_INPUT,
        })
    })
}

/// Empty buffer with room for exactly `capacity` elements
///
/// Fails with [`SuperpermError::Allocation`] instead of aborting when the
/// reservation cannot be satisfied.
pub(crate) fn try_buffer<T>(capacity: usize) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|_| SuperpermError::Allocation { elements: capacity })?;
    Ok(buffer)
}
