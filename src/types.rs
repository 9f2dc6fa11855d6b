// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! Callers hand us `Data` items made of `Content` fields. Queries come back as
//! `SearchResult`s with `Position`s pointing into the original content text.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Data**: `id` is unique across the registry. Re-registering an id
//!   replaces the whole item.
//!
//! - **Content**: `id` is unique within its parent `Data`, and `0 ≤ weight ≤ 1`.
//!
//! - **Position**: `start + length ≤ text.chars().count()` for the content it
//!   names. Offsets are Unicode scalar values of the ORIGINAL text, not bytes
//!   and not offsets into the normalized token stream.
//!
//! - **SearchParams**: `0 ≤ relevance_threshold ≤ 1` and
//!   `0 ≤ partial_match_penalty_rate ≤ 1`. Use `validate()` before trusting
//!   params from outside.

use crate::error::IndexError;
use serde::{Deserialize, Serialize};

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

fn default_weight() -> f64 {
    1.0
}

/// One searchable field of a `Data` item, e.g. a single UI string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: String,
    pub text: String,
    /// Multiplier applied to this content's score. Secondary strings (search
    /// tags, alternate phrasings) get a lower weight than the primary label.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl Content {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_weight(id, text, 1.0)
    }

    pub fn with_weight(id: impl Into<String>, text: impl Into<String>, weight: f64) -> Self {
        Content {
            id: id.into(),
            text: text.into(),
            weight,
        }
    }
}

/// A registered item: an opaque id plus the contents it is matched on.
///
/// Ids are chosen by the caller (paths, urls, settings keys). They are never
/// persisted by the index. `locale` picks how contents are tokenized; empty
/// means Latin-script words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Data {
    pub id: String,
    #[serde(default)]
    pub contents: Vec<Content>,
    #[serde(default)]
    pub locale: String,
}

impl Data {
    pub fn new(id: impl Into<String>, contents: Vec<Content>) -> Self {
        Data {
            id: id.into(),
            contents,
            locale: String::new(),
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

// =============================================================================
// SEARCH PARAMETERS
// =============================================================================

pub const DEFAULT_RELEVANCE_THRESHOLD: f64 = 0.32;
pub const DEFAULT_PARTIAL_MATCH_PENALTY_RATE: f64 = 0.9;

/// Knobs for matching and filtering.
///
/// Missing fields fall back to the defaults when deserializing, so a config
/// file only needs to name what it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParams {
    /// Items scoring below this are dropped.
    pub relevance_threshold: f64,
    /// Multiplied into the score once per query token that matched nothing.
    pub partial_match_penalty_rate: f64,
    /// Only count a content token as a match if it starts with the query token.
    pub use_prefix_only: bool,
    /// Score tokens by normalized Levenshtein distance instead of containment.
    pub use_edit_distance: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            relevance_threshold: DEFAULT_RELEVANCE_THRESHOLD,
            partial_match_penalty_rate: DEFAULT_PARTIAL_MATCH_PENALTY_RATE,
            use_prefix_only: false,
            use_edit_distance: false,
        }
    }
}

impl SearchParams {
    /// Parse params from JSON and validate them.
    ///
    /// ```ignore
    /// let params = SearchParams::from_json(r#"{"usePrefixOnly": true}"#)?;
    /// assert_eq!(params.relevance_threshold, 0.32);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        let params: SearchParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Check the range invariants. NaN is out of range.
    pub fn validate(&self) -> Result<(), IndexError> {
        if !(0.0..=1.0).contains(&self.relevance_threshold) {
            return Err(IndexError::RelevanceThresholdOutOfRange(
                self.relevance_threshold,
            ));
        }
        if !(0.0..=1.0).contains(&self.partial_match_penalty_rate) {
            return Err(IndexError::PenaltyRateOutOfRange(
                self.partial_match_penalty_rate,
            ));
        }
        Ok(())
    }

    /// Force both rates into `[0, 1]`. NaN falls back to the default.
    pub fn clamped(self) -> Self {
        SearchParams {
            relevance_threshold: clamp_unit(self.relevance_threshold, DEFAULT_RELEVANCE_THRESHOLD),
            partial_match_penalty_rate: clamp_unit(
                self.partial_match_penalty_rate,
                DEFAULT_PARTIAL_MATCH_PENALTY_RATE,
            ),
            ..self
        }
    }
}

/// Clamp to `[0, 1]`, replacing NaN with `fallback`.
pub(crate) fn clamp_unit(value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(0.0, 1.0)
    }
}

// =============================================================================
// TOKENS AND RESULTS
// =============================================================================

/// A matched or tokenized span inside one content's original text.
///
/// `start` and `length` count chars, so `text.chars().skip(start).take(length)`
/// recovers the span.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub content_id: String,
    pub start: u32,
    pub length: u32,
}

impl Position {
    pub fn new(content_id: impl Into<String>, start: u32, length: u32) -> Self {
        Position {
            content_id: content_id.into(),
            start,
            length,
        }
    }

    /// One past the last char of the span.
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + self.length
    }
}

/// A normalized token and every place it occurs, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub text: String,
    pub positions: Vec<Position>,
}

impl Token {
    pub fn new(text: impl Into<String>, positions: Vec<Position>) -> Self {
        Token {
            text: text.into(),
            positions,
        }
    }
}

/// One item matching a query.
///
/// The linear backend always produces scores in `[0, 1]`. It reports the
/// positions of a single winning content, one per matched query token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Id of the matching `Data`.
    pub id: String,
    pub score: f64,
    pub positions: Vec<Position>,
}

// =============================================================================
// STATUS AND IDENTIFIERS
// =============================================================================

/// Outcome of one `find` call.
///
/// The discriminants are logged, so entries must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ResponseStatus {
    UnknownError = 0,
    /// The search ran. There may still be zero results.
    Success = 1,
    EmptyQuery = 2,
    EmptyIndex = 3,
}

impl ResponseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::UnknownError => "unknown_error",
            ResponseStatus::Success => "success",
            ResponseStatus::EmptyQuery => "empty_query",
            ResponseStatus::EmptyIndex => "empty_index",
        }
    }

    /// Numeric sample value for histogram-style reporting.
    #[inline]
    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Which logical index this is. Only used to name metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IndexId {
    CrosSettings,
    HelpApp,
}

impl IndexId {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexId::CrosSettings => "CrosSettings",
            IndexId::HelpApp => "HelpApp",
        }
    }
}

/// Search backend an `Index` runs on.
///
/// Only the linear map exists today. An inverted-index backend slots in here
/// without touching the `Index` API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Backend {
    LinearMap,
}
