//! Permutation generation by recursive removal
//!
//! For each position `i` in order, `seq[i]` is removed, the remainder is
//! permuted, and `seq[i]` is put back. Output is in head-removal order, not
//! lexicographic order; only completeness is guaranteed. Inputs must hold
//! pairwise-distinct symbols for every ordering to be distinct.

use super::symbols::try_buffer;
use crate::error::Result;
use crate::utils::factorial_usize;

/// All `seq.len()!` orderings of `seq`
///
/// A one-element sequence yields itself; the empty sequence yields a single
/// empty ordering. Fails with `Overflow` past 20 symbols and with
/// `Allocation` when the output cannot be reserved.
pub fn permutations<T: Copy>(seq: &[T]) -> Result<Vec<Vec<T>>> {
    let mut out = try_buffer(factorial_usize(seq.len())?)?;
    let mut prefix = Vec::with_capacity(seq.len());
    let mut remaining = seq.to_vec();

    permute_into(&mut prefix, &mut remaining, &mut out);
    Ok(out)
}

/// The `(n-1)!` orderings of `seq` that start with `seq[lead]`
///
/// These are exactly the orderings `permutations(seq)` emits for position
/// `lead`, in the same order. `lead` must index into `seq`.
pub(crate) fn permutations_with_leading<T: Copy>(seq: &[T], lead: usize) -> Result<Vec<Vec<T>>> {
    let mut remaining = seq.to_vec();
    let symbol = remaining.remove(lead);

    let mut out = try_buffer(factorial_usize(remaining.len())?)?;
    let mut prefix = Vec::with_capacity(seq.len());
    prefix.push(symbol);

    permute_into(&mut prefix, &mut remaining, &mut out);
    Ok(out)
}

fn permute_into<T: Copy>(prefix: &mut Vec<T>, remaining: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
    if remaining.len() <= 1 {
        let mut permutation = Vec::with_capacity(prefix.len() + remaining.len());
        permutation.extend_from_slice(prefix);
        permutation.extend_from_slice(remaining);
        out.push(permutation);
        return;
    }

    for i in 0..remaining.len() {
        let symbol = remaining.remove(i);
        prefix.push(symbol);
        permute_into(prefix, remaining, out);
        prefix.pop();
        remaining.insert(i, symbol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SuperpermError;
    use crate::utils::factorial;
    use rustc_hash::FxHashSet;

    fn strings(perms: Vec<Vec<char>>) -> Vec<String> {
        perms.into_iter().map(|p| p.into_iter().collect()).collect()
    }

    #[test]
    fn test_head_removal_order() {
        let chars: Vec<char> = "abc".chars().collect();
        assert_eq!(
            strings(permutations(&chars).unwrap()),
            vec!["abc", "acb", "bac", "bca", "cab", "cba"]
        );
    }

    #[test]
    fn test_base_cases() {
        assert_eq!(permutations(&['x']).unwrap(), vec![vec!['x']]);
        assert_eq!(permutations::<char>(&[]).unwrap(), vec![Vec::<char>::new()]);
    }

    #[test]
    fn test_completeness_and_distinctness() {
        let alphabet: Vec<char> = "abcdefg".chars().collect();
        for n in 1..=alphabet.len() {
            let seq = &alphabet[..n];
            let perms = permutations(seq).unwrap();
            assert_eq!(perms.len() as u64, factorial(n).unwrap());

            let distinct: FxHashSet<&Vec<char>> = perms.iter().collect();
            assert_eq!(distinct.len(), perms.len());

            let mut sorted_seq = seq.to_vec();
            sorted_seq.sort_unstable();
            for perm in &perms {
                let mut sorted = perm.clone();
                sorted.sort_unstable();
                assert_eq!(sorted, sorted_seq);
            }
        }
    }

    #[test]
    fn test_leading_matches_full_layout() {
        let seq = [1u8, 2, 3, 4, 5];
        let all = permutations(&seq).unwrap();
        let block = factorial_usize(seq.len() - 1).unwrap();

        for lead in 0..seq.len() {
            let led = permutations_with_leading(&seq, lead).unwrap();
            assert_eq!(led.len(), block);
            assert!(led.iter().all(|p| p[0] == seq[lead]));
            assert_eq!(led, all[lead * block..(lead + 1) * block]);
        }
    }

    #[test]
    fn test_single_symbol_with_leading() {
        assert_eq!(permutations_with_leading(&['z'], 0).unwrap(), vec![vec!['z']]);
    }

    #[test]
    fn test_oversized_inputs_return_errors() {
        let seq: Vec<u8> = (0..20).collect();
        assert!(matches!(
            permutations_with_leading(&seq, 0),
            Err(SuperpermError::Allocation { .. })
        ));
        assert!(matches!(
            permutations(&seq),
            Err(SuperpermError::Allocation { .. })
        ));

        let seq: Vec<u8> = (0..21).collect();
        assert!(matches!(
            permutations(&seq),
            Err(SuperpermError::Overflow { requested: 21, .. })
        ));
    }
}
