// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing.
//!
//! Text normalization for accent-insensitive search and the tokenizer that
//! feeds both queries and content into the matcher.

pub mod normalize;
