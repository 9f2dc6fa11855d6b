// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `Index` façade: registration, queries, params, metrics.
//!
//! One `Index` per logical search domain (OS settings, help articles). It owns
//! the registry and the search params, hands queries to its backend, and
//! tells an optional `MetricsReporter` how each query went.
//!
//! Every `find` comes back as a `(ResponseStatus, results)` pair. Nothing
//! here panics or returns an error for a well-formed call:
//!
//! | Situation                        | Status         | Results        |
//! |----------------------------------|----------------|----------------|
//! | no registered data               | `EmptyIndex`   | empty          |
//! | query normalizes to no tokens    | `EmptyQuery`   | empty          |
//! | backend ran                      | `Success`      | possibly empty |
//! | backend returned an error        | `UnknownError` | empty          |
//!
//! `Index` has no interior locking. Share it across threads through
//! `SharedIndex`.

use crate::backend::{create_backend, SearchBackend};
use crate::contracts::check_find_results;
use crate::error::IndexError;
use crate::metrics::MetricsReporter;
use crate::registry::Registry;
use crate::types::{Backend, Data, IndexId, ResponseStatus, SearchParams, SearchResult};
use crate::util::normalize::tokenize_query;
use std::sync::Arc;

/// An in-process search index over caller-registered `Data`.
pub struct Index {
    index_id: IndexId,
    backend: Box<dyn SearchBackend>,
    registry: Registry,
    params: SearchParams,
    reporter: Option<Arc<dyn MetricsReporter>>,
}

impl std::fmt::Debug for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Index")
            .field("index_id", &self.index_id)
            .field("backend", &self.backend.kind())
            .field("size", &self.registry.len())
            .field("params", &self.params)
            .field("reporter", &self.reporter.is_some())
            .finish()
    }
}

impl Index {
    /// Create an empty index on one of the built-in backends.
    pub fn new(index_id: IndexId, backend: Backend) -> Self {
        Self::with_backend(index_id, create_backend(backend))
    }

    /// Create an empty index on a custom backend.
    pub fn with_backend(index_id: IndexId, backend: Box<dyn SearchBackend>) -> Self {
        Index {
            index_id,
            backend,
            registry: Registry::new(),
            params: SearchParams::default(),
            reporter: None,
        }
    }

    /// Report search outcomes to `reporter`.
    pub fn with_reporter(mut self, reporter: Arc<dyn MetricsReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    pub fn index_id(&self) -> IndexId {
        self.index_id
    }

    pub fn backend(&self) -> Backend {
        self.backend.kind()
    }

    // =========================================================================
    // REGISTRATION
    // =========================================================================

    /// Insert `data`, replacing any item with the same id.
    pub fn add_or_update(&mut self, data: Data) {
        let id_is_new = self.registry.upsert(data);
        tracing::trace!(index = self.index_id.as_str(), id_is_new, "add_or_update");
    }

    /// Insert or replace every item in `data`, in order.
    pub fn add_or_update_all(&mut self, data: impl IntoIterator<Item = Data>) {
        for item in data {
            self.registry.upsert(item);
        }
        tracing::debug!(
            index = self.index_id.as_str(),
            size = self.registry.len(),
            "registered batch"
        );
    }

    /// Remove the item with `id`. Returns whether it existed.
    pub fn remove(&mut self, id: &str) -> bool {
        self.registry.remove(id)
    }

    /// Remove every listed id. Returns how many existed.
    pub fn delete<S: AsRef<str>>(&mut self, ids: &[S]) -> u32 {
        ids.iter()
            .filter(|id| self.registry.remove(id.as_ref()))
            .count() as u32
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.registry.clear();
    }

    /// Number of registered items.
    pub fn size(&self) -> u32 {
        self.registry.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// The registered item with `id`, as last stored.
    pub fn get(&self, id: &str) -> Option<&Data> {
        self.registry.get(id).map(|entry| &entry.data)
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Search for `query`, returning at most `max_results` items (0 = no cap).
    ///
    /// The reporter, if any, hears about every call: once that a search
    /// happened, once with its status.
    pub fn find(&self, query: &str, max_results: u32) -> (ResponseStatus, Vec<SearchResult>) {
        if let Some(reporter) = &self.reporter {
            reporter.on_search_performed(self.index_id);
        }

        let (status, results) = self.run_query(query, max_results);

        tracing::debug!(
            index = self.index_id.as_str(),
            status = status.as_str(),
            num_results = results.len(),
            "find"
        );

        if let Some(reporter) = &self.reporter {
            reporter.on_search_result(self.index_id, status, results.len());
        }

        (status, results)
    }

    fn run_query(&self, query: &str, max_results: u32) -> (ResponseStatus, Vec<SearchResult>) {
        if self.registry.is_empty() {
            return (ResponseStatus::EmptyIndex, Vec::new());
        }

        let tokens = tokenize_query(query);
        if tokens.is_empty() {
            return (ResponseStatus::EmptyQuery, Vec::new());
        }

        match self
            .backend
            .search(&tokens, &self.registry, &self.params, max_results)
        {
            Ok(results) => {
                check_find_results(&results, &self.registry, &self.params, max_results);
                (ResponseStatus::Success, results)
            }
            Err(err) => {
                tracing::error!(index = self.index_id.as_str(), error = %err, "search failed");
                (ResponseStatus::UnknownError, Vec::new())
            }
        }
    }

    // =========================================================================
    // CONFIGURATION
    // =========================================================================

    /// Replace the search params. Out-of-range values are rejected and the
    /// current params stay in effect.
    pub fn set_search_params(&mut self, params: SearchParams) -> Result<(), IndexError> {
        if let Err(err) = params.validate() {
            tracing::warn!(index = self.index_id.as_str(), error = %err, "rejected search params");
            return Err(err);
        }
        self.params = params;
        Ok(())
    }

    pub fn search_params(&self) -> SearchParams {
        self.params
    }
}
