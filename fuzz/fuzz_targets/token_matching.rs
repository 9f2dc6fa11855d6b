// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for token matching and edit distance.
//!
//! Arbitrary UTF-8 must never panic the matcher, and every match it reports
//! must be a score in (0, 1] with a span inside the candidate.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use local_search::{levenshtein_bounded, levenshtein_distance, match_token, normalize, SearchParams};

#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    candidate: String,
    use_prefix_only: bool,
    use_edit_distance: bool,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to keep the O(nm) DP fast
    let query: String = normalize(&input.query).chars().take(32).collect();
    let candidate: String = normalize(&input.candidate).chars().take(64).collect();

    let params = SearchParams {
        use_prefix_only: input.use_prefix_only,
        use_edit_distance: input.use_edit_distance,
        ..SearchParams::default()
    };

    if let Some(found) = match_token(&query, &candidate, &params) {
        assert!(
            found.score > 0.0 && found.score <= 1.0,
            "score {} out of range for query='{}', candidate='{}'",
            found.score,
            query,
            candidate
        );
        assert!(
            (found.start + found.length) as usize <= candidate.chars().count(),
            "span {}+{} outside candidate='{}'",
            found.start,
            found.length,
            candidate
        );
    }

    // The bounded check must agree with the full distance
    let distance = levenshtein_distance(&query, &candidate);
    assert_eq!(levenshtein_bounded(&query, &candidate, distance), Some(distance));
    if distance > 0 {
        assert_eq!(levenshtein_bounded(&query, &candidate, distance - 1), None);
    }

    // Length difference is a lower bound
    let len_diff = query.chars().count().abs_diff(candidate.chars().count());
    assert!(len_diff <= distance);
});
