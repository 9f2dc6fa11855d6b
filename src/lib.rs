//! In-process fuzzy search over small document collections.
//!
//! Register `Data` items (settings pages, help articles) on an `Index`, then
//! `find` them with free-text queries. Matching is typo- and
//! punctuation-tolerant, ranking is deterministic, and every call returns a
//! well-formed `(ResponseStatus, results)` pair.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ util::       │────▶│   fuzzy      │────▶│  scoring     │
//! │  normalize   │     │ (match_token,│     │ (score_tokens│
//! │ (tokenize)   │     │  levenshtein)│     │  ranking)    │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                                         │
//!        ▼                                         ▼
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  registry    │────▶│   index      │◀────│  backend     │
//! │ (id → Data)  │     │  (façade)    │     │ (linear scan)│
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                        │          │
//!                        ▼          ▼
//!                 ┌──────────┐  ┌──────────┐
//!                 │ metrics  │  │ shared   │
//!                 │(reporter)│  │ (RwLock) │
//!                 └──────────┘  └──────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use local_search::{Backend, Content, Data, Index, IndexId, ResponseStatus};
//!
//! let mut index = Index::new(IndexId::CrosSettings, Backend::LinearMap);
//! index.add_or_update(Data::new("s1", vec![Content::new("c1", "Wi-Fi settings")]));
//!
//! let (status, results) = index.find("wifi", 10);
//! assert_eq!(status, ResponseStatus::Success);
//! assert_eq!(results[0].id, "s1");
//! ```

// Module declarations
pub mod backend;
pub mod contracts;
mod error;
pub mod fuzzy;
mod index;
pub mod metrics;
pub mod registry;
pub mod scoring;
mod shared;
pub mod testing;
mod types;
pub mod util;

// Re-exports for public API
pub use backend::{create_backend, LinearSearchBackend, SearchBackend};
pub use error::IndexError;
pub use fuzzy::{levenshtein_bounded, levenshtein_distance, match_token, TokenMatch};
pub use index::Index;
pub use metrics::{
    histogram_name, DailyUsageReporter, InMemoryPrefStore, InMemoryReporter, MetricsReporter,
    MetricsSnapshot, PrefStore,
};
pub use registry::Registry;
pub use scoring::{score_content, ContentScore};
pub use shared::SharedIndex;
pub use types::{
    Backend, Content, Data, IndexId, Position, ResponseStatus, SearchParams, SearchResult, Token,
    DEFAULT_PARTIAL_MATCH_PENALTY_RATE, DEFAULT_RELEVANCE_THRESHOLD,
};
pub use util::normalize::{normalize, tokenize, tokenize_query, tokenize_with_mode, TokenizeMode};
