// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for configuration and backend failures.
//!
//! Query outcomes are NOT errors: an empty query or an empty index is a
//! `ResponseStatus`. This type only covers bad parameters and a backend that
//! could not run at all.

/// Error type for the local search index.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// `relevance_threshold` is NaN or outside `[0, 1]`.
    #[error("relevance_threshold {0} is outside [0, 1]")]
    RelevanceThresholdOutOfRange(f64),

    /// `partial_match_penalty_rate` is NaN or outside `[0, 1]`.
    #[error("partial_match_penalty_rate {0} is outside [0, 1]")]
    PenaltyRateOutOfRange(f64),

    /// Search params could not be parsed.
    #[error("invalid search params: {0}")]
    Config(#[from] serde_json::Error),

    /// The backend failed to execute a query.
    #[error("search backend failed: {0}")]
    Backend(String),
}
