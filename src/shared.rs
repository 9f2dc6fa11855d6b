// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Thread-safe handle around an `Index`.
//!
//! Queries take the read lock, so any number of `find`s run at once.
//! Registration and param changes take the write lock and wait for in-flight
//! queries to finish. A query therefore never sees a half-applied batch.

use crate::error::IndexError;
use crate::index::Index;
use crate::types::{Data, ResponseStatus, SearchParams, SearchResult};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable, `Send + Sync` handle to one `Index`.
#[derive(Debug, Clone)]
pub struct SharedIndex {
    inner: Arc<RwLock<Index>>,
}

impl SharedIndex {
    pub fn new(index: Index) -> Self {
        SharedIndex {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    pub fn find(&self, query: &str, max_results: u32) -> (ResponseStatus, Vec<SearchResult>) {
        self.inner.read().find(query, max_results)
    }

    pub fn add_or_update(&self, data: Data) {
        self.inner.write().add_or_update(data);
    }

    /// Register a batch under a single write lock.
    pub fn add_or_update_all(&self, data: impl IntoIterator<Item = Data>) {
        self.inner.write().add_or_update_all(data);
    }

    pub fn remove(&self, id: &str) -> bool {
        self.inner.write().remove(id)
    }

    pub fn delete<S: AsRef<str>>(&self, ids: &[S]) -> u32 {
        self.inner.write().delete(ids)
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    pub fn size(&self) -> u32 {
        self.inner.read().size()
    }

    pub fn set_search_params(&self, params: SearchParams) -> Result<(), IndexError> {
        self.inner.write().set_search_params(params)
    }

    pub fn search_params(&self) -> SearchParams {
        self.inner.read().search_params()
    }

    /// Run `f` with shared access to the index.
    pub fn read<R>(&self, f: impl FnOnce(&Index) -> R) -> R {
        f(&self.inner.read())
    }
}
