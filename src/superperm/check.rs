//! Superpermutation verification
//!
//! Checking runs in two fan-out/fan-in phases:
//!
//! 1. Permutation generation (one task per leading symbol) and the suffix
//!    array build over the candidate run side by side under `rayon::join`.
//! 2. The permutation set is split into up to 32 buckets; each bucket looks
//!    its permutations up in the shared index and returns its own verdict.
//!
//! Verdicts are reduced after the join, so no worker writes shared state.

use super::permutations::permutations_with_leading;
use super::symbols::{try_buffer, validate_symbols};
use crate::config::SuperpermConfig;
use crate::error::{Result, SuperpermError};
use crate::index::{SubstringIndex, SuffixArrayBuilder};
use crate::utils::{WorkDistributor, factorial_usize};
use serde::{Deserialize, Serialize};

/// Outcome of a detailed check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Alphabet that was checked
    pub symbols: String,
    /// Candidate length in chars
    pub candidate_len: usize,
    /// Number of permutations looked up (0 for the empty alphabet)
    pub permutations_checked: usize,
    /// Permutations absent from the candidate, in generation order
    pub missing: Vec<String>,
}

impl CheckReport {
    /// Whether every permutation was found
    pub fn is_superpermutation(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Verifies candidate superpermutations
#[derive(Debug, Clone, Default)]
pub struct Verifier {
    distributor: WorkDistributor,
    index_builder: SuffixArrayBuilder,
}

impl Verifier {
    pub fn new(config: &SuperpermConfig) -> Self {
        Self {
            distributor: WorkDistributor::new(config.distributor.clone()),
            index_builder: SuffixArrayBuilder::new(config.suffix_array.clone()),
        }
    }

    /// Verifier with the default bucket cap and sort threshold
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Whether every permutation of `symbols` occurs in `candidate`
    ///
    /// The empty alphabet is trivially satisfied. A single symbol is
    /// satisfied iff the candidate contains it.
    pub fn check(&self, symbols: &str, candidate: &str) -> Result<bool> {
        let chars = validate_symbols(symbols)?;
        if chars.is_empty() {
            return Ok(true);
        }

        let (perms, index) = self.prepare(&chars, candidate);
        let perms = perms?;
        let verdicts = self.distributor.run(perms.len(), |start, end| {
            perms[start..=end]
                .iter()
                .all(|p| index.contains(p.as_bytes()))
        });
        let found_all = verdicts.iter().all(|&ok| ok);

        tracing::debug!(
            n = chars.len(),
            candidate_len = candidate.len(),
            permutations = perms.len(),
            buckets = verdicts.len(),
            found_all,
            "checked candidate"
        );
        Ok(found_all)
    }

    /// Like [`Verifier::check`], but lists every missing permutation
    pub fn report(&self, symbols: &str, candidate: &str) -> Result<CheckReport> {
        let chars = validate_symbols(symbols)?;
        let mut report = CheckReport {
            symbols: symbols.to_string(),
            candidate_len: candidate.chars().count(),
            permutations_checked: 0,
            missing: Vec::new(),
        };
        if chars.is_empty() {
            return Ok(report);
        }

        let (perms, index) = self.prepare(&chars, candidate);
        let perms = perms?;
        let missing = self.distributor.run(perms.len(), |start, end| {
            let missing: Vec<String> = perms[start..=end]
                .iter()
                .filter(|p| !index.contains(p.as_bytes()))
                .cloned()
                .collect();
            if !missing.is_empty() {
                tracing::trace!(start, end, missing = missing.len(), "bucket has misses");
            }
            missing
        });

        report.permutations_checked = perms.len();
        report.missing = missing.into_iter().flatten().collect();

        tracing::debug!(
            n = chars.len(),
            permutations = report.permutations_checked,
            missing = report.missing.len(),
            "reported candidate"
        );
        Ok(report)
    }

    /// Generate permutations and index the candidate concurrently
    fn prepare(&self, chars: &[char], candidate: &str) -> (Result<Vec<String>>, SubstringIndex) {
        rayon::join(
            || self.generate(chars),
            || self.index_builder.build(candidate),
        )
    }

    /// All permutations of `chars`, one worker per leading symbol
    ///
    /// Permutations led by `chars[k]` occupy `[k * (n-1)!, (k+1) * (n-1)!)`.
    /// The full set is reserved up front so oversized alphabets fail before
    /// any worker starts.
    fn generate(&self, chars: &[char]) -> Result<Vec<String>> {
        let mut perms = try_buffer(factorial_usize(chars.len())?)?;

        let buckets = self.distributor.run(chars.len(), |start, end| {
            let mut led = Vec::new();
            for lead in start..=end {
                led.extend(
                    permutations_with_leading(chars, lead)?
                        .into_iter()
                        .map(|p| p.into_iter().collect::<String>()),
                );
            }
            Ok::<_, SuperpermError>(led)
        });

        for bucket in buckets {
            perms.extend(bucket?);
        }
        Ok(perms)
    }
}

/// Check `candidate` with the default verifier
///
/// ```
/// assert!(superperm::check("abc", "abcabacba").unwrap());
/// assert!(!superperm::check("abc", "abcabcabc").unwrap());
/// ```
pub fn check(symbols: &str, candidate: &str) -> Result<bool> {
    Verifier::with_defaults().check(symbols, candidate)
}

/// Detailed check with the default verifier
pub fn check_report(symbols: &str, candidate: &str) -> Result<CheckReport> {
    Verifier::with_defaults().report(symbols, candidate)
}
