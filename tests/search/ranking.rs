//! Ranking, thresholds and truncation.

use super::common::{assert_ranked, empty_index, result_ids, settings_index};
use local_search::testing::make_data_simple;
use local_search::SearchParams;

#[test]
fn equal_scores_sort_by_id() {
    let mut index = empty_index();
    for id in ["delta", "alpha", "charlie", "bravo"] {
        index.add_or_update(make_data_simple(id, "Sound"));
    }
    let (_, results) = index.find("sound", 0);
    assert_eq!(result_ids(&results), vec!["alpha", "bravo", "charlie", "delta"]);
}

#[test]
fn corpus_results_are_ranked() {
    let index = settings_index();
    for query in ["blue", "light", "net", "s", "display brightness", "pair"] {
        let (_, results) = index.find(query, 0);
        assert_ranked(&results);
    }
}

#[test]
fn max_results_caps_output() {
    let mut index = empty_index();
    for i in 0..10 {
        index.add_or_update(make_data_simple(&format!("item-{}", i), "Sound"));
    }
    for max_results in 1..=10u32 {
        let (_, results) = index.find("sound", max_results);
        assert_eq!(results.len(), max_results as usize);
    }
    assert_eq!(index.find("sound", 0).1.len(), 10);
}

#[test]
fn raising_threshold_drops_weak_matches() {
    let mut index = settings_index();
    let (_, loose) = index.find("blue", 0);
    assert_eq!(loose.len(), 2);

    index
        .set_search_params(SearchParams {
            relevance_threshold: 0.5,
            ..SearchParams::default()
        })
        .unwrap();
    let (_, strict) = index.find("blue", 0);
    assert_eq!(result_ids(&strict), vec!["display/night-light"]);
    assert!(strict.iter().all(|r| r.score >= 0.5));
}

#[test]
fn harsher_penalty_drops_partial_matches() {
    let mut index = settings_index();
    assert_eq!(index.find("volume loudness", 0).1.len(), 1);

    index
        .set_search_params(SearchParams {
            partial_match_penalty_rate: 0.5,
            ..SearchParams::default()
        })
        .unwrap();
    // (1.0 + 0) / 2 * 0.5 = 0.25 < 0.32
    assert!(index.find("volume loudness", 0).1.is_empty());
}

#[test]
fn content_weight_lowers_rank() {
    let mut index = empty_index();
    index.add_or_update(local_search::Data::new(
        "secondary",
        vec![local_search::Content::with_weight("tag", "Sound", 0.6)],
    ));
    index.add_or_update(make_data_simple("primary", "Sound"));

    let (_, results) = index.find("sound", 0);
    assert_eq!(result_ids(&results), vec!["primary", "secondary"]);
    assert!((results[1].score - 0.6).abs() < 1e-12);
}

#[test]
fn zero_threshold_keeps_unmatched_items_after_matches() {
    let mut index = empty_index();
    index.add_or_update(make_data_simple("disp", "Display"));
    index.add_or_update(make_data_simple("bt", "Bluetooth"));
    index
        .set_search_params(SearchParams {
            relevance_threshold: 0.0,
            ..SearchParams::default()
        })
        .unwrap();

    let (_, results) = index.find("bluetooth", 0);
    assert_eq!(result_ids(&results), vec!["bt", "disp"]);
    assert_eq!(results[1].score, 0.0);
    assert!(results[1].positions.is_empty());
}
