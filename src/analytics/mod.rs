//! Mood analytics
//!
//! Derived statistics over a user's mood log: the overall average-mood
//! label, daily and weekly summaries, and the 14-day trend signal.
//!
//! The aggregation algorithms are pure functions over entry slices; the
//! [`MoodAnalytics`] service binds them to the shared store, loading the
//! document fresh on every call. Aggregation is calendar-relative, so the
//! current date comes from an injected [`Clock`] rather than a wall-clock
//! call buried inside the logic.

pub mod average;
pub mod summary;
pub mod trend;

pub use average::{average_mood, AverageMood};
pub use summary::{daily_summary, weekly_summary, DailySummary, DayBucket, WeeklySummary};
pub use trend::{detect_trend, label_score, Trend, TrendOutcome, TrendReport};

use crate::store::{StoreHandle, StoreResult};
use chrono::{Local, NaiveDate};
use std::sync::Arc;

/// Source of the current calendar date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the server's local calendar date
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Analytics operations bound to the shared store and a clock
pub struct MoodAnalytics {
    store: Arc<StoreHandle>,
    clock: Arc<dyn Clock>,
}

impl MoodAnalytics {
    /// Create analytics over the store using the system clock
    pub fn new(store: Arc<StoreHandle>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Create analytics with a custom clock
    pub fn with_clock(store: Arc<StoreHandle>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Summarize one calendar day for a user.
    ///
    /// `None` means no entries matched the date; it is a marker, not an
    /// error, and an unknown user yields the same marker.
    pub async fn daily_summary(
        &self,
        user_id: &str,
        date: &str,
    ) -> StoreResult<Option<DailySummary>> {
        let store = self.store.load().await?;
        let entries = store.get(user_id).map(Vec::as_slice).unwrap_or(&[]);
        Ok(daily_summary(entries, date))
    }

    /// Break the trailing 7 days into per-day buckets for a user.
    ///
    /// `None` when the user has no entries at all; otherwise all 7 buckets
    /// are present, empty ones included.
    pub async fn weekly_summary(&self, user_id: &str) -> StoreResult<Option<WeeklySummary>> {
        let store = self.store.load().await?;
        let entries = store.get(user_id).map(Vec::as_slice).unwrap_or(&[]);
        if entries.is_empty() {
            return Ok(None);
        }
        Ok(Some(weekly_summary(entries, self.clock.today())))
    }

    /// Detect the 14-day mood trend for a user.
    ///
    /// `None` when the user has no entries at all.
    pub async fn trend(&self, user_id: &str) -> StoreResult<Option<TrendOutcome>> {
        let store = self.store.load().await?;
        let entries = store.get(user_id).map(Vec::as_slice).unwrap_or(&[]);
        if entries.is_empty() {
            return Ok(None);
        }
        Ok(Some(detect_trend(entries, self.clock.today())))
    }
}
