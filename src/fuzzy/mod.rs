// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: how similar is a query token to a content token?
//!
//! Edit distance lives in `levenshtein`. The token matcher picks between
//! prefix, edit-distance and containment scoring based on `SearchParams`.

mod levenshtein;
mod matcher;

pub use levenshtein::*;
pub use matcher::*;
