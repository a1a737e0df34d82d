//! Superpermutation construction from a shift sequence
//!
//! The output is seeded with the alphabet at both ends and filled toward the
//! center. A shift sequence of n!/2 entries drives the fill: each entry
//! `inc` copies `inc` already-placed symbols forward (and mirrors them from
//! the back), rotating the trailing block so a new permutation appears.
//! The result has length `1! + 2! + ... + n!`, which is minimal for n <= 4.

use super::symbols::{superpermutation_len, try_buffer, validate_symbols};
use crate::error::Result;
use crate::utils::factorial_usize;

/// Build a superpermutation of the characters in `symbols`
///
/// ```
/// assert_eq!(superperm::find("abc").unwrap(), "abcabacba");
/// ```
///
/// Fails with `Overflow` for more than 20 symbols, with `DuplicateSymbol`
/// if any character repeats, and with `Allocation` when the alphabet is
/// valid but too large to build in memory.
pub fn find(symbols: &str) -> Result<String> {
    let chars = validate_symbols(symbols)?;
    let out = build_superpermutation(&chars)?;

    tracing::debug!(n = chars.len(), len = out.len(), "built superpermutation");
    Ok(out.into_iter().collect())
}

/// Shift sequence for `n` symbols
///
/// For each block size `i` in 2..=n, entries `initial, initial + interval,
/// ...` are incremented, where `initial = 2 * (shifts - 1) / i!` and
/// `interval = initial + 1`.
pub fn shift_sequence(n: usize) -> Result<Vec<usize>> {
    let shifts = factorial_usize(n)? / 2;
    let mut sequence = try_buffer(shifts)?;
    sequence.resize(shifts, 0usize);

    for i in 2..=n {
        let initial = 2 * (shifts - 1) / factorial_usize(i)?;
        let interval = initial + 1;
        for j in (initial..shifts).step_by(interval) {
            sequence[j] += 1;
        }
    }

    Ok(sequence)
}

/// Build a superpermutation over arbitrary symbols
///
/// Symbols are assumed distinct; use [`validate_symbols`] first when they
/// come from untrusted input.
pub fn build_superpermutation<T: Copy>(symbols: &[T]) -> Result<Vec<T>> {
    let n = symbols.len();
    let Some(&first) = symbols.first() else {
        return Ok(Vec::new());
    };

    let sequence = shift_sequence(n)?;
    let len = superpermutation_len(n)?;

    let mut out = try_buffer(len)?;
    out.resize(len, first);
    for (i, &symbol) in symbols.iter().enumerate() {
        out[i] = symbol;
        out[len - 1 - i] = symbol;
    }

    let mut cur = n;
    for &inc in &sequence {
        for i in 0..inc {
            let symbol = out[cur - n + i];
            out[cur + inc - i - 1] = symbol;
            out[len - cur - inc + i] = symbol;
        }
        cur += inc;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SuperpermError;
    use crate::superperm::permutations::permutations;

    fn contains_all_permutations(symbols: &str, candidate: &str) -> bool {
        let chars: Vec<char> = symbols.chars().collect();
        permutations(&chars)
            .unwrap()
            .into_iter()
            .map(|p| p.into_iter().collect::<String>())
            .all(|p| candidate.contains(&p))
    }

    #[test]
    fn test_known_outputs() {
        assert_eq!(find("").unwrap(), "");
        assert_eq!(find("a").unwrap(), "a");
        assert_eq!(find("ab").unwrap(), "aba");
        assert_eq!(find("abc").unwrap(), "abcabacba");
        assert_eq!(find("abcd").unwrap(), "abcdabcadbcabdcabacdbacbdacbadcba");
    }

    #[test]
    fn test_shift_sequence() {
        assert!(shift_sequence(0).unwrap().is_empty());
        assert!(shift_sequence(1).unwrap().is_empty());
        assert_eq!(shift_sequence(2).unwrap(), vec![1]);
        assert_eq!(shift_sequence(3).unwrap(), vec![1, 1, 2]);
        assert_eq!(shift_sequence(4).unwrap().len(), 12);
    }

    #[test]
    fn test_shifts_stay_below_block_size() {
        for n in 2..=7 {
            let sequence = shift_sequence(n).unwrap();
            assert_eq!(sequence.iter().max(), Some(&(n - 1)));
            assert!(sequence.iter().all(|&inc| inc >= 1));
        }
    }

    #[test]
    fn test_lengths_and_coverage() {
        let alphabet = "abcdefg";
        for n in 1..=alphabet.len() {
            let symbols = &alphabet[..n];
            let out = find(symbols).unwrap();
            assert_eq!(out.chars().count(), superpermutation_len(n).unwrap());
            assert!(contains_all_permutations(symbols, &out), "n = {n}");
        }
    }

    #[test]
    fn test_multibyte_symbols() {
        assert_eq!(find("αβγ").unwrap(), "αβγαβαγβα");
    }

    #[test]
    fn test_generic_symbols() {
        assert_eq!(
            build_superpermutation(&[1u8, 2, 3]).unwrap(),
            vec![1, 2, 3, 1, 2, 1, 3, 2, 1]
        );
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(find("wxyz5").unwrap(), find("wxyz5").unwrap());
    }

    #[test]
    fn test_rejects_bad_alphabets() {
        assert!(matches!(
            find("abca"),
            Err(SuperpermError::DuplicateSymbol { symbol: 'a', .. })
        ));
        assert!(matches!(
            find("abcdefghijklmnopqrstu"),
            Err(SuperpermError::Overflow { requested: 21, .. })
        ));
    }

    #[test]
    fn test_largest_alphabet_reports_allocation_error() {
        let symbols = "abcdefghijklmnopqrst";
        assert_eq!(validate_symbols(symbols).unwrap().len(), 20);
        assert!(matches!(
            find(symbols),
            Err(SuperpermError::Allocation { .. })
        ));
        assert!(matches!(
            shift_sequence(20),
            Err(SuperpermError::Allocation { .. })
        ));
    }
}
