// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search backends: the pluggable part of an `Index`.
//!
//! The `Index` owns the registry and parameters. A backend only decides which
//! registered items match a tokenized query and in what order. Today that is
//! a linear scan with fuzzy matching, fine for a few hundred settings strings.
//! An inverted index for larger corpora implements the same trait.

mod linear;

pub use linear::LinearSearchBackend;

use crate::error::IndexError;
use crate::registry::Registry;
use crate::types::{Backend, SearchParams, SearchResult, Token};
use crate::util::normalize::tokenize_query;

/// A strategy for answering queries over a registry.
pub trait SearchBackend: Send + Sync {
    /// Which backend this is.
    fn kind(&self) -> Backend;

    /// Ranked results for already-tokenized query terms.
    ///
    /// Implementations must return results sorted by score descending then id
    /// ascending, all at or above `params.relevance_threshold`, and at most
    /// `max_results` of them (`0` = unlimited). An empty query yields no results.
    fn search(
        &self,
        query: &[Token],
        registry: &Registry,
        params: &SearchParams,
        max_results: u32,
    ) -> Result<Vec<SearchResult>, IndexError>;

    /// Tokenize `query` and search.
    fn search_query(
        &self,
        query: &str,
        registry: &Registry,
        params: &SearchParams,
        max_results: u32,
    ) -> Result<Vec<SearchResult>, IndexError> {
        let tokens = tokenize_query(query);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }
        self.search(&tokens, registry, params, max_results)
    }
}

/// Construct the backend for a `Backend` kind.
pub fn create_backend(kind: Backend) -> Box<dyn SearchBackend> {
    match kind {
        Backend::LinearMap => Box::new(LinearSearchBackend::new()),
    }
}
