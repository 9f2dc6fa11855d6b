// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Metrics reporting: the index tells someone else what happened.
//!
//! The index never decides where metrics go. It calls a `MetricsReporter`
//! once per search ("a search happened") and once per outcome (status and
//! result count). Two reporters ship here:
//!
//! - `InMemoryReporter` keeps histogram-style samples, keyed by the same
//!   names a histogram backend would use.
//! - `DailyUsageReporter` counts searches per day in a `PrefStore`, so the
//!   count survives restarts of whatever owns the index.
//!
//! Reporter calls sit on the query path. Keep them to a counter bump.

use crate::types::{IndexId, ResponseStatus};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::time::{SystemTime, UNIX_EPOCH};

/// Metric suffix for the per-search status sample.
pub const RESPONSE_STATUS_METRIC: &str = "ResponseStatus";
/// Metric suffix for the number of results of a successful search.
pub const NUMBER_RESULTS_METRIC: &str = "NumberResults";
/// Metric suffix for the number of searches in one day.
pub const DAILY_SEARCH_METRIC: &str = "DailySearch";

/// Histogram name for a metric of one index.
///
/// ```ignore
/// assert_eq!(
///     histogram_name(IndexId::CrosSettings, RESPONSE_STATUS_METRIC),
///     "LocalSearchService.CrosSettings.ResponseStatus"
/// );
/// ```
pub fn histogram_name(index_id: IndexId, metric: &str) -> String {
    format!("LocalSearchService.{}.{}", index_id.as_str(), metric)
}

/// Receives search outcomes from an `Index`.
pub trait MetricsReporter: Send + Sync {
    /// Called once per `find`, whatever the outcome.
    fn on_search_performed(&self, index_id: IndexId);

    /// Called once per `find` with its status. `num_results` is only
    /// meaningful when `status` is `Success`; it is 0 otherwise.
    fn on_search_result(&self, index_id: IndexId, status: ResponseStatus, num_results: usize);
}

// =============================================================================
// IN-MEMORY REPORTER
// =============================================================================

/// Point-in-time copy of what an `InMemoryReporter` has seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// `on_search_performed` calls per index.
    pub searches_performed: BTreeMap<IndexId, u64>,
    /// Samples per histogram name, in arrival order.
    pub samples: BTreeMap<String, Vec<u64>>,
}

impl MetricsSnapshot {
    pub fn samples_for(&self, index_id: IndexId, metric: &str) -> &[u64] {
        self.samples
            .get(&histogram_name(index_id, metric))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Reporter that keeps everything in memory.
#[derive(Debug, Default)]
pub struct InMemoryReporter {
    inner: Mutex<MetricsSnapshot>,
}

impl InMemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner.lock().clone()
    }
}

impl MetricsReporter for InMemoryReporter {
    fn on_search_performed(&self, index_id: IndexId) {
        *self.inner.lock().searches_performed.entry(index_id).or_insert(0) += 1;
    }

    fn on_search_result(&self, index_id: IndexId, status: ResponseStatus, num_results: usize) {
        let mut inner = self.inner.lock();
        inner
            .samples
            .entry(histogram_name(index_id, RESPONSE_STATUS_METRIC))
            .or_default()
            .push(u64::from(status.to_u8()));
        if status == ResponseStatus::Success {
            inner
                .samples
                .entry(histogram_name(index_id, NUMBER_RESULTS_METRIC))
                .or_default()
                .push(num_results as u64);
        }
    }
}

// =============================================================================
// DAILY USAGE REPORTER
// =============================================================================

/// Narrow key-value access to wherever the embedding app keeps preferences.
pub trait PrefStore: Send + Sync {
    fn get_u64(&self, key: &str) -> Option<u64>;
    fn set_u64(&self, key: &str, value: u64);
}

/// `PrefStore` backed by a map, for tests and apps without real prefs.
#[derive(Debug, Default)]
pub struct InMemoryPrefStore {
    values: Mutex<HashMap<String, u64>>,
}

impl InMemoryPrefStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for InMemoryPrefStore {
    fn get_u64(&self, key: &str) -> Option<u64> {
        self.values.lock().get(key).copied()
    }

    fn set_u64(&self, key: &str, value: u64) {
        self.values.lock().insert(key.to_string(), value);
    }
}

/// Days since the Unix epoch, UTC.
pub fn current_day() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() / 86_400)
        .unwrap_or(0)
}

const PREF_PREFIX: &str = "local_search_service";

/// Pref keys used by `DailyUsageReporter` for one index.
pub fn daily_pref_keys(index_id: IndexId) -> DailyPrefKeys {
    let base = format!("{}.{}", PREF_PREFIX, index_id.as_str());
    DailyPrefKeys {
        day: format!("{}.day", base),
        count: format!("{}.daily_count", base),
        last_daily_count: format!("{}.last_daily_count", base),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPrefKeys {
    /// Day the running count belongs to.
    pub day: String,
    /// Searches so far on `day`.
    pub count: String,
    /// Final count of the most recent finished day.
    pub last_daily_count: String,
}

/// Counts searches per index per day in a `PrefStore`.
///
/// When the first search of a new day arrives, the previous day's count is
/// moved to `last_daily_count` and logged, then counting restarts at 1.
pub struct DailyUsageReporter<P: PrefStore> {
    prefs: P,
    clock: Box<dyn Fn() -> u64 + Send + Sync>,
    // Serializes read-modify-write of the pref triple
    lock: Mutex<()>,
}

impl<P: PrefStore> DailyUsageReporter<P> {
    pub fn new(prefs: P) -> Self {
        Self::with_clock(prefs, current_day)
    }

    /// Use `clock` (days since epoch) instead of the system clock.
    pub fn with_clock(prefs: P, clock: impl Fn() -> u64 + Send + Sync + 'static) -> Self {
        DailyUsageReporter {
            prefs,
            clock: Box::new(clock),
            lock: Mutex::new(()),
        }
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }
}

impl<P: PrefStore> MetricsReporter for DailyUsageReporter<P> {
    fn on_search_performed(&self, index_id: IndexId) {
        let _guard = self.lock.lock();
        let keys = daily_pref_keys(index_id);
        let today = (self.clock)();

        let count = match self.prefs.get_u64(&keys.day) {
            Some(day) if day == today => self.prefs.get_u64(&keys.count).unwrap_or(0),
            Some(day) => {
                let finished = self.prefs.get_u64(&keys.count).unwrap_or(0);
                self.prefs.set_u64(&keys.last_daily_count, finished);
                tracing::info!(
                    metric = %histogram_name(index_id, DAILY_SEARCH_METRIC),
                    day,
                    count = finished,
                    "daily search count"
                );
                self.prefs.set_u64(&keys.day, today);
                0
            }
            None => {
                self.prefs.set_u64(&keys.day, today);
                0
            }
        };

        self.prefs.set_u64(&keys.count, count + 1);
    }

    fn on_search_result(&self, _index_id: IndexId, _status: ResponseStatus, _num_results: usize) {}
}
