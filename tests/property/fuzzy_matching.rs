//! Properties of the token matcher.

use local_search::{match_token, SearchParams};
use proptest::prelude::*;

fn token_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-fé]{0,10}").unwrap()
}

fn mode_strategy() -> impl Strategy<Value = SearchParams> {
    (any::<bool>(), any::<bool>()).prop_map(|(use_prefix_only, use_edit_distance)| SearchParams {
        use_prefix_only,
        use_edit_distance,
        ..SearchParams::default()
    })
}

proptest! {
    /// Scores are in (0, 1] and spans stay inside the candidate.
    #[test]
    fn prop_match_is_bounded(
        query in token_strategy(),
        candidate in token_strategy(),
        params in mode_strategy(),
    ) {
        if let Some(found) = match_token(&query, &candidate, &params) {
            prop_assert!(found.score > 0.0 && found.score <= 1.0);
            prop_assert!((found.start + found.length) as usize <= candidate.chars().count());
            prop_assert!(found.length > 0);
        }
    }

    /// Identical non-empty tokens always match perfectly.
    #[test]
    fn prop_self_match_is_perfect(token in token_strategy(), params in mode_strategy()) {
        prop_assume!(!token.is_empty());
        let found = match_token(&token, &token, &params).unwrap();
        prop_assert_eq!(found.score, 1.0);
    }

    /// The empty query never matches.
    #[test]
    fn prop_empty_query_never_matches(candidate in token_strategy(), params in mode_strategy()) {
        prop_assert!(match_token("", &candidate, &params).is_none());
    }

    /// Prefix mode is exactly `starts_with`.
    #[test]
    fn prop_prefix_mode_is_starts_with(query in token_strategy(), candidate in token_strategy()) {
        prop_assume!(!query.is_empty() && !candidate.is_empty());
        let params = SearchParams { use_prefix_only: true, ..SearchParams::default() };
        prop_assert_eq!(
            match_token(&query, &candidate, &params).is_some(),
            candidate.starts_with(&query)
        );
    }

    /// Default mode: containment always scores at least as well as the same
    /// query against a longer candidate that also contains it.
    #[test]
    fn prop_tighter_containment_scores_higher(
        query in "[a-f]{1,4}",
        padding in "[a-f]{1,4}",
    ) {
        let params = SearchParams::default();
        let tight = match_token(&query, &query, &params).unwrap();
        let loose_candidate = format!("{}{}", query, padding);
        let loose = match_token(&query, &loose_candidate, &params).unwrap();
        prop_assert!(tight.score > loose.score);
    }
}
