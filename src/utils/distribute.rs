//! Balanced fan-out of index ranges onto the rayon pool
//!
//! `[0, count)` is cut into at most `max_buckets` contiguous buckets whose
//! sizes differ by at most one; the first `count % buckets` buckets carry the
//! extra unit. Each bucket runs as its own task and returns a value. The call
//! returns once every bucket has finished, with results in bucket order, so
//! callers reduce after the join instead of sharing mutable state.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Default cap on concurrent buckets
pub const DEFAULT_MAX_BUCKETS: usize = 32;

/// Configuration for work distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributorConfig {
    /// Maximum number of buckets per call (0 is treated as 1)
    #[serde(default = "default_max_buckets")]
    pub max_buckets: usize,
}

fn default_max_buckets() -> usize {
    DEFAULT_MAX_BUCKETS
}

impl Default for DistributorConfig {
    fn default() -> Self {
        Self {
            max_buckets: default_max_buckets(),
        }
    }
}

/// Inclusive index range handled by one task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// First index (inclusive)
    pub start: usize,
    /// Last index (inclusive)
    pub end: usize,
}

#[allow(clippy::len_without_is_empty)]
impl Bucket {
    /// Number of indices in the bucket (always at least one)
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// The bucket as a half-open range, for slicing
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end + 1
    }
}

/// Splits unit counts into buckets and runs a callback per bucket
#[derive(Debug, Clone, Default)]
pub struct WorkDistributor {
    config: DistributorConfig,
}

impl WorkDistributor {
    pub fn new(config: DistributorConfig) -> Self {
        Self { config }
    }

    /// Distributor with the default cap of 32 buckets
    pub fn with_defaults() -> Self {
        Self::default()
    }

    #[inline]
    fn max_buckets(&self) -> usize {
        self.config.max_buckets.max(1)
    }

    /// Number of buckets `count` units are split into
    pub fn bucket_count(&self, count: usize) -> usize {
        self.max_buckets().min(count)
    }

    /// Compute the bucket layout for `count` units
    pub fn buckets(&self, count: usize) -> Vec<Bucket> {
        let bucket_count = self.bucket_count(count);
        if bucket_count == 0 {
            return Vec::new();
        }

        let bucket_size = count / bucket_count;
        let bucket_drop = count % bucket_count;

        (0..bucket_count)
            .map(|i| {
                let start = i * bucket_size + i.min(bucket_drop);
                let mut end = start + bucket_size - 1;
                if i < bucket_drop {
                    end += 1;
                }
                Bucket { start, end }
            })
            .collect()
    }

    /// Run `callback(start, end)` once per bucket, concurrently
    ///
    /// Blocks until every bucket has returned. Results are in bucket order;
    /// the order in which buckets execute is unspecified.
    pub fn run<F, R>(&self, count: usize, callback: F) -> Vec<R>
    where
        F: Fn(usize, usize) -> R + Sync,
        R: Send,
    {
        let buckets = self.buckets(count);
        tracing::trace!(count, buckets = buckets.len(), "distributing work");

        buckets
            .into_par_iter()
            .with_max_len(1)
            .map(|bucket| callback(bucket.start, bucket.end))
            .collect()
    }
}

/// Run `callback` over `[0, count)` split into at most 32 concurrent buckets
pub fn distribute<F, R>(count: usize, callback: F) -> Vec<R>
where
    F: Fn(usize, usize) -> R + Sync,
    R: Send,
{
    WorkDistributor::with_defaults().run(count, callback)
}
