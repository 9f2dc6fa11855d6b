//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so tests and benches agree on what a
//! "settings corpus" looks like.

#![doc(hidden)]

use crate::types::{Content, Data};

/// Create a data item with one content per `(content_id, text)` pair.
pub fn make_data(id: &str, contents: &[(&str, &str)]) -> Data {
    Data::new(
        id,
        contents
            .iter()
            .map(|(content_id, text)| Content::new(*content_id, *text))
            .collect(),
    )
}

/// Create a data item with a single content `c0`.
pub fn make_data_simple(id: &str, text: &str) -> Data {
    make_data(id, &[("c0", text)])
}

/// A small OS-settings style corpus.
pub fn settings_corpus() -> Vec<Data> {
    vec![
        make_data(
            "network/wifi",
            &[("label", "Wi-Fi"), ("tag", "Wireless networks")],
        ),
        make_data(
            "network/hotspot",
            &[("label", "Mobile hotspot"), ("tag", "Tethering")],
        ),
        make_data(
            "bluetooth",
            &[("label", "Bluetooth"), ("tag", "Pair devices")],
        ),
        make_data(
            "display/night-light",
            &[("label", "Night Light"), ("tag", "Blue light filter")],
        ),
        make_data(
            "display/brightness",
            &[("label", "Display brightness")],
        ),
        make_data(
            "sound/volume",
            &[("label", "Volume"), ("tag", "Sound level")],
        ),
        make_data(
            "keyboard/shortcuts",
            &[("label", "Keyboard shortcuts")],
        ),
        make_data(
            "privacy/camera",
            &[("label", "Camera access"), ("tag", "Privacy and security")],
        ),
    ]
}

/// A synthetic corpus of `size` items built from `words`, for benches.
///
/// Empty `words` gives an empty corpus.
pub fn synthetic_corpus(size: usize, words: &[&str]) -> Vec<Data> {
    if words.is_empty() {
        return Vec::new();
    }
    (0..size)
        .map(|i| {
            let pick = |k: usize| words[(i * 7 + k * 13) % words.len()];
            let label = format!("{} {}", pick(0), pick(1));
            let tag = format!("{} {} {}", pick(2), pick(3), pick(4));
            make_data(
                &format!("item-{}", i),
                &[("label", label.as_str()), ("tag", tag.as_str())],
            )
        })
        .collect()
}
