// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance over chars, with an optional bound.
//!
//! The edit-distance matcher only needs the distance when it is below the
//! longer token's length (otherwise the score is zero). Passing that bound
//! lets the DP bail out on the length gap alone, or as soon as a whole row
//! exceeds it.

/// Levenshtein distance between `a` and `b`, if it is at most `max`.
///
/// `None` means the distance is greater than `max`. Two lower bounds allow
/// an early exit:
/// 1. the length difference
/// 2. the minimum of any DP row
///
/// Neither rejects a pair whose true distance is `≤ max`.
pub fn levenshtein_bounded(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > max {
        return None;
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];

        for (j, &bc) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ac != bc);
            curr[j + 1] = substitution
                .min(prev[j + 1] + 1) // deletion
                .min(curr[j] + 1); // insertion
            row_min = row_min.min(curr[j + 1]);
        }

        if row_min > max {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[b.len()];
    (distance <= max).then_some(distance)
}

/// Full Levenshtein distance (insert, delete, substitute all cost 1).
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    // The distance never exceeds the longer length, so this bound never cuts.
    let longest = a.chars().count().max(b.chars().count());
    levenshtein_bounded(a, b, longest).unwrap_or(longest)
}
