//! Query-path invariants over random corpora.
//!
//! | Property               | Check                                          |
//! |------------------------|------------------------------------------------|
//! | determinism            | two identical finds agree                      |
//! | threshold              | every score ≥ relevance_threshold              |
//! | zero threshold         | every registered item comes back               |
//! | ordering               | score desc, id asc                             |
//! | truncation             | len ≤ max_results when max_results > 0         |
//! | empty short-circuits   | EmptyQuery / EmptyIndex with no results        |
//! | upsert idempotence     | re-registering changes nothing                 |
//! | removal                | removed ids never appear                       |
//! | positions              | every span fits inside its content text        |

use super::common::assert_ranked;
use local_search::{
    Backend, Content, Data, Index, IndexId, ResponseStatus, SearchParams, SearchResult,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Words mixing precomposed and decomposed accents, so normalization can
/// shrink a word's char count.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Zé0-9\u{0301}]{1,8}").unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..6).prop_map(|words| words.join(" - "))
}

fn data_strategy() -> impl Strategy<Value = Vec<Data>> {
    prop::collection::vec(prop::collection::vec(text_strategy(), 1..4), 1..8).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, texts)| {
                let contents = texts
                    .into_iter()
                    .enumerate()
                    .map(|(j, text)| Content::new(format!("c{}", j), text))
                    .collect();
                Data::new(format!("d{}", i), contents)
            })
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zé0-9 ,.-]{0,16}").unwrap()
}

fn params_strategy() -> impl Strategy<Value = SearchParams> {
    (0.0f64..=1.0, 0.0f64..=1.0, any::<bool>(), any::<bool>()).prop_map(
        |(relevance_threshold, partial_match_penalty_rate, use_prefix_only, use_edit_distance)| {
            SearchParams {
                relevance_threshold,
                partial_match_penalty_rate,
                use_prefix_only,
                use_edit_distance,
            }
        },
    )
}

fn build(data: &[Data], params: SearchParams) -> Index {
    let mut index = Index::new(IndexId::CrosSettings, Backend::LinearMap);
    index.add_or_update_all(data.iter().cloned());
    index.set_search_params(params).unwrap();
    index
}

fn assert_positions_in_bounds(data: &[Data], results: &[SearchResult]) {
    for result in results {
        let item = data.iter().find(|d| d.id == result.id).unwrap();
        for position in &result.positions {
            let content = item
                .contents
                .iter()
                .find(|c| c.id == position.content_id)
                .unwrap();
            assert!((position.start + position.length) as usize <= content.text.chars().count());
        }
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_find_invariants(
        data in data_strategy(),
        query in query_strategy(),
        params in params_strategy(),
        max_results in 0u32..5,
    ) {
        let index = build(&data, params);
        let (status, results) = index.find(&query, max_results);

        // Determinism
        prop_assert_eq!(index.find(&query, max_results), (status, results.clone()));

        if status != ResponseStatus::Success {
            prop_assert_eq!(status, ResponseStatus::EmptyQuery);
            prop_assert!(results.is_empty());
        }
        for result in &results {
            prop_assert!(result.score >= params.relevance_threshold);
            prop_assert!((0.0..=1.0).contains(&result.score));
        }
        if max_results > 0 {
            prop_assert!(results.len() <= max_results as usize);
        }
        assert_ranked(&results);
        assert_positions_in_bounds(&data, &results);
    }

    #[test]
    fn prop_empty_index_short_circuits(query in query_strategy(), max_results in 0u32..5) {
        let index = Index::new(IndexId::HelpApp, Backend::LinearMap);
        prop_assert_eq!(index.find(&query, max_results), (ResponseStatus::EmptyIndex, vec![]));
    }

    #[test]
    fn prop_blank_query_short_circuits(data in data_strategy(), blanks in "[ ,.!-]{0,8}") {
        let index = build(&data, SearchParams::default());
        prop_assert_eq!(index.find(&blanks, 0), (ResponseStatus::EmptyQuery, vec![]));
    }

    #[test]
    fn prop_upsert_is_idempotent(data in data_strategy(), query in query_strategy()) {
        let once = build(&data, SearchParams::default());
        let mut twice = build(&data, SearchParams::default());
        twice.add_or_update_all(data.iter().cloned());

        prop_assert_eq!(once.size(), twice.size());
        prop_assert_eq!(once.find(&query, 0), twice.find(&query, 0));
    }

    #[test]
    fn prop_removed_ids_never_returned(
        data in data_strategy(),
        query in query_strategy(),
        victim in any::<prop::sample::Index>(),
    ) {
        let mut index = build(&data, SearchParams::default());
        let id = data[victim.index(data.len())].id.clone();

        prop_assert!(index.remove(&id));
        let (_, results) = index.find(&query, 0);
        prop_assert!(results.iter().all(|r| r.id != id));
    }

    #[test]
    fn prop_zero_threshold_returns_every_item(data in data_strategy(), query in "[a-z]{1,6}") {
        let params = SearchParams { relevance_threshold: 0.0, ..SearchParams::default() };
        let index = build(&data, params);
        let (status, results) = index.find(&query, 0);

        prop_assert_eq!(status, ResponseStatus::Success);
        prop_assert_eq!(results.len(), index.size() as usize);
        assert_ranked(&results);
    }
}
