// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Resolved once at startup (defaults, then an optional JSON file, then CLI flags)
//! and passed down by value. Nothing reads the environment during a query.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default score a record must strictly exceed to be shown.
pub const DEFAULT_MIN_SCORE: f64 = 3.0;

/// Default number of cards per answer.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Default budget for the remote fallback.
pub const DEFAULT_FALLBACK_TIMEOUT_MS: u64 = 3_000;

/// Tunables for one search session. Every field has a default, so a config file
/// only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Records need a score strictly above this.
    pub min_score: f64,
    /// Results are truncated to this many.
    pub max_results: usize,
    /// Let Arabic tokens hit through the synonym table.
    pub expand_synonyms: bool,
    /// How long to wait on the remote fallback before treating it as "no match".
    pub fallback_timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            min_score: DEFAULT_MIN_SCORE,
            max_results: DEFAULT_MAX_RESULTS,
            expand_synonyms: true,
            fallback_timeout_ms: DEFAULT_FALLBACK_TIMEOUT_MS,
        }
    }
}

impl SearchConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_score.is_finite() || self.min_score < 0.0 {
            return Err(ConfigError::Invalid {
                field: "min_score",
                reason: format!("must be a finite, non-negative number (got {})", self.min_score),
            });
        }
        if self.max_results == 0 {
            return Err(ConfigError::Invalid {
                field: "max_results",
                reason: "must be at least 1".into(),
            });
        }
        if self.fallback_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "fallback_timeout_ms",
                reason: "must be greater than 0".into(),
            });
        }
        Ok(())
    }

    pub fn fallback_timeout(&self) -> Duration {
        Duration::from_millis(self.fallback_timeout_ms)
    }
}
