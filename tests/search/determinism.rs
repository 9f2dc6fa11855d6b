//! Determinism: same registry, same params, same query → same answer.

use super::common::{result_ids, settings_index};
use local_search::testing::{settings_corpus, synthetic_corpus};
use local_search::{Index, IndexId, LinearSearchBackend, SearchParams};

const WORDS: &[&str] = &[
    "network", "wireless", "bluetooth", "display", "brightness", "sound", "volume",
    "keyboard", "shortcut", "privacy", "camera", "battery", "storage", "language",
];

#[test]
fn repeated_finds_are_identical() {
    let index = settings_index();
    for query in ["blue", "wifi", "display light", "sound"] {
        let first = index.find(query, 0);
        for _ in 0..5 {
            assert_eq!(index.find(query, 0), first);
        }
    }
}

#[test]
fn registration_order_does_not_change_results() {
    let mut forward = Index::new(IndexId::CrosSettings, local_search::Backend::LinearMap);
    forward.add_or_update_all(settings_corpus());

    let mut reversed = Index::new(IndexId::CrosSettings, local_search::Backend::LinearMap);
    reversed.add_or_update_all(settings_corpus().into_iter().rev());

    for query in ["blue", "light", "s", "network settings"] {
        assert_eq!(forward.find(query, 0), reversed.find(query, 0));
    }
}

#[test]
fn sequential_backend_matches_default_backend() {
    let corpus = synthetic_corpus(300, WORDS);

    let mut default = Index::new(IndexId::HelpApp, local_search::Backend::LinearMap);
    default.add_or_update_all(corpus.clone());

    let mut sequential =
        Index::with_backend(IndexId::HelpApp, Box::new(LinearSearchBackend::sequential()));
    sequential.add_or_update_all(corpus);

    for params in [
        SearchParams::default(),
        SearchParams {
            use_edit_distance: true,
            ..SearchParams::default()
        },
    ] {
        default.set_search_params(params).unwrap();
        sequential.set_search_params(params).unwrap();
        for query in ["camera", "blu", "storag languge", "volume"] {
            let (_, a) = default.find(query, 25);
            let (_, b) = sequential.find(query, 25);
            assert_eq!(result_ids(&a), result_ids(&b));
            assert_eq!(a, b);
        }
    }
}
