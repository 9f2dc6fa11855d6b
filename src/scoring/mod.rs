// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! `core` turns per-token fuzzy matches into one score per content.
//! `ranking` orders the resulting items.

mod core;
pub mod ranking;

pub use core::*;
