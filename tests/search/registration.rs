//! Registration: upsert, removal, batch operations.

use super::common::{empty_index, result_ids, settings_index};
use local_search::testing::{make_data_simple, settings_corpus};
use local_search::{Position, ResponseStatus};

#[test]
fn upsert_is_idempotent() {
    let mut once = empty_index();
    once.add_or_update(make_data_simple("bt", "Bluetooth"));

    let mut twice = empty_index();
    twice.add_or_update(make_data_simple("bt", "Bluetooth"));
    twice.add_or_update(make_data_simple("bt", "Bluetooth"));

    assert_eq!(once.size(), 1);
    assert_eq!(twice.size(), 1);
    assert_eq!(once.find("blue", 0), twice.find("blue", 0));
}

#[test]
fn upsert_replaces_contents() {
    let mut index = empty_index();
    index.add_or_update(make_data_simple("item", "Bluetooth"));
    index.add_or_update(make_data_simple("item", "Display"));

    assert_eq!(index.size(), 1);
    assert_eq!(index.get("item").unwrap().contents[0].text, "Display");
    assert!(index.find("bluetooth", 0).1.is_empty());
    assert_eq!(result_ids(&index.find("display", 0).1), vec!["item"]);
}

#[test]
fn removed_items_never_come_back() {
    let mut index = settings_index();
    let before = index.size();

    assert!(index.remove("bluetooth"));
    assert!(!index.remove("bluetooth"));
    assert_eq!(index.size(), before - 1);

    let (status, results) = index.find("bluetooth", 0);
    assert_eq!(status, ResponseStatus::Success);
    assert!(results.iter().all(|r| r.id != "bluetooth"));
}

#[test]
fn removing_last_item_empties_index() {
    let mut index = empty_index();
    index.add_or_update(make_data_simple("only", "Volume"));
    assert!(index.remove("only"));
    assert_eq!(index.find("volume", 0).0, ResponseStatus::EmptyIndex);
}

#[test]
fn batch_registration_and_delete() {
    let mut index = empty_index();
    index.add_or_update_all(settings_corpus());
    assert_eq!(index.size() as usize, settings_corpus().len());

    let removed = index.delete(&["bluetooth", "sound/volume", "not-there"]);
    assert_eq!(removed, 2);
    assert_eq!(index.size() as usize, settings_corpus().len() - 2);
}

#[test]
fn clear_removes_everything() {
    let mut index = settings_index();
    index.clear();
    assert!(index.is_empty());
    assert_eq!(index.find("wifi", 0).0, ResponseStatus::EmptyIndex);
}

#[test]
fn non_latin_locale_splits_camel_case() {
    let mut index = empty_index();
    index.add_or_update(make_data_simple("latin", "NightLight"));
    index.add_or_update(make_data_simple("cjk", "NightLight").with_locale("ja"));

    let (_, results) = index.find("light", 0);
    assert_eq!(result_ids(&results), vec!["cjk", "latin"]);
    assert_eq!(results[0].score, 1.0);
    assert_eq!(results[1].score, 0.5);
    for result in &results {
        assert_eq!(result.positions, vec![Position::new("c0", 5, 5)]);
    }
}
