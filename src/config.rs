//! Tuning knobs for verification
//!
//! Configuration is plain data. Callers that keep settings on disk read the
//! JSON themselves and hand the text to [`SuperpermConfig::from_json`].

use crate::index::SuffixArrayConfig;
use crate::utils::DistributorConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Combined configuration for a [`crate::Verifier`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperpermConfig {
    /// Bucket cap for the fan-out phases
    #[serde(default)]
    pub distributor: DistributorConfig,

    /// Suffix array build settings
    #[serde(default)]
    pub suffix_array: SuffixArrayConfig,
}

impl SuperpermConfig {
    /// Parse config from JSON; missing fields take their defaults
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse superperm config")
    }

    /// Serialize config as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize superperm config")
    }
}
