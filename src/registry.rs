// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The registry: every `Data` an index knows about, in insertion order.
//!
//! Tokenization happens once, at registration, so a query only pays for
//! matching. Re-registering an id replaces the item in place and keeps its
//! original slot, so iteration order only changes on removal.

use crate::types::{clamp_unit, Data, Token};
use crate::util::normalize::{consolidate_tokens, tokenize_with_mode, TokenizeMode};
use std::collections::HashMap;

/// A registered item plus its tokenized contents.
///
/// `content_tokens[i]` belongs to `data.contents[i]`.
#[derive(Debug, Clone)]
pub struct IndexedData {
    pub data: Data,
    pub content_tokens: Vec<Vec<Token>>,
}

impl IndexedData {
    /// Tokenize every content in the mode its locale selects. Out-of-range
    /// weights are clamped.
    pub fn new(mut data: Data) -> Self {
        for content in &mut data.contents {
            let clamped = clamp_unit(content.weight, 1.0);
            if clamped != content.weight {
                tracing::warn!(
                    data_id = %data.id,
                    content_id = %content.id,
                    weight = content.weight,
                    "content weight outside [0, 1], clamping to {}",
                    clamped
                );
                content.weight = clamped;
            }
        }

        let mode = TokenizeMode::for_locale(&data.locale);
        let content_tokens = data
            .contents
            .iter()
            .map(|content| {
                consolidate_tokens(tokenize_with_mode(&content.id, &content.text, mode))
            })
            .collect();

        IndexedData {
            data,
            content_tokens,
        }
    }
}

/// Insertion-ordered map from `Data.id` to `IndexedData`.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<IndexedData>,
    slots: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace by id. Returns `true` if the id was new.
    pub fn upsert(&mut self, data: Data) -> bool {
        let indexed = IndexedData::new(data);
        match self.slots.get(&indexed.data.id) {
            Some(&slot) => {
                self.entries[slot] = indexed;
                false
            }
            None => {
                self.slots.insert(indexed.data.id.clone(), self.entries.len());
                self.entries.push(indexed);
                true
            }
        }
    }

    /// Remove by id. Returns whether an entry existed.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(slot) = self.slots.remove(id) else {
            return false;
        };
        self.entries.remove(slot);
        for other in self.slots.values_mut() {
            if *other > slot {
                *other -= 1;
            }
        }
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.slots.clear();
    }

    pub fn get(&self, id: &str) -> Option<&IndexedData> {
        self.slots.get(id).map(|&slot| &self.entries[slot])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[IndexedData] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexedData> {
        self.entries.iter()
    }
}
