// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! One enum per boundary. Scoring itself can't fail, so these only show up
//! around it: loading data and config, talking to collaborators, and the
//! matcher seam the session controller guards.

use std::fmt;
use std::path::PathBuf;

/// Loading or validating a fatwa dataset failed.
#[derive(Debug)]
pub enum DatasetError {
    /// The file couldn't be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The JSON didn't match the record shape (including an unknown verdict).
    Parse(serde_json::Error),
    /// A record's id is empty or whitespace.
    EmptyId { index: usize },
    /// Two records share an id.
    DuplicateId { id: String, first: usize, second: usize },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io { path, source } => {
                write!(f, "failed to read dataset {}: {}", path.display(), source)
            }
            DatasetError::Parse(e) => write!(f, "invalid dataset JSON: {}", e),
            DatasetError::EmptyId { index } => write!(f, "record {} has an empty id", index),
            DatasetError::DuplicateId { id, first, second } => write!(
                f,
                "duplicate id '{}' at records {} and {}",
                id, first, second
            ),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io { source, .. } => Some(source),
            DatasetError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// Loading or validating search configuration failed.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    /// A value is out of range. `field` names the offending key.
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read config {}: {}", path.display(), source)
            }
            ConfigError::Parse(e) => write!(f, "invalid config JSON: {}", e),
            ConfigError::Invalid { field, reason } => write!(f, "invalid {}: {}", field, reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

/// The remote semantic fallback couldn't answer.
///
/// Never surfaces to the user: `BestEffortFallback` turns every variant into
/// "no remote match".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackError {
    /// Transport or service failure, with whatever the service said.
    Unavailable(String),
    /// The service answered with something that isn't `{ "matchId": ... }`.
    MalformedResponse(String),
    /// No answer within the configured timeout.
    TimedOut { after_ms: u64 },
}

impl fmt::Display for FallbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackError::Unavailable(msg) => write!(f, "fallback unavailable: {}", msg),
            FallbackError::MalformedResponse(msg) => {
                write!(f, "fallback returned a malformed response: {}", msg)
            }
            FallbackError::TimedOut { after_ms } => {
                write!(f, "fallback timed out after {} ms", after_ms)
            }
        }
    }
}

impl std::error::Error for FallbackError {}

/// A `Matcher` failed to produce results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The matcher gave up with a reason.
    Failed(String),
    /// Matching panicked; the payload message if it was a string.
    Panicked(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Failed(msg) => write!(f, "search failed: {}", msg),
            SearchError::Panicked(msg) => write!(f, "search panicked: {}", msg),
        }
    }
}

impl std::error::Error for SearchError {}

/// Speech capture couldn't start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceError {
    /// The platform has no speech recognition.
    Unsupported,
    /// The recognizer refused to start (permissions, device busy, ...).
    StartFailed(String),
}

impl fmt::Display for VoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoiceError::Unsupported => f.write_str("speech recognition is not available"),
            VoiceError::StartFailed(msg) => write!(f, "speech recognition failed to start: {}", msg),
        }
    }
}

impl std::error::Error for VoiceError {}
