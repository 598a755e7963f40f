//! Daily and weekly summaries
//!
//! Date-bucketed aggregation over a user's log. Entries are bucketed by
//! exact string equality on their `date` field; no calendar normalization
//! is applied.

use crate::classify::Category;
use crate::store::MoodEntry;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary of one calendar day's entries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: String,
    pub total_entries: usize,
    /// Raw mood labels in submission order
    pub moods: Vec<String>,
    /// Mood of the last entry submitted for this date
    pub most_recent_mood: String,
    /// Category of that same last entry. A last-value proxy kept from the
    /// original behavior, not a statistical average.
    pub average_mood_category: Category,
}

/// One day's bucket in a weekly summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub count: usize,
    pub moods: Vec<String>,
}

/// Seven calendar days ending today, keyed by ISO date string.
///
/// Every bucket is present even when empty.
pub type WeeklySummary = BTreeMap<String, DayBucket>;

/// Entries whose `date` matches exactly, in submission order
fn filter_by_date<'a>(entries: &'a [MoodEntry], date: &str) -> Vec<&'a MoodEntry> {
    entries.iter().filter(|e| e.date == date).collect()
}

/// Summarize one calendar day.
///
/// `None` is the explicit no-entries marker for a date with no matching
/// entries; it is not an error.
pub fn daily_summary(entries: &[MoodEntry], date: &str) -> Option<DailySummary> {
    let matching = filter_by_date(entries, date);
    let last = matching.last()?;

    Some(DailySummary {
        date: date.to_string(),
        total_entries: matching.len(),
        moods: matching.iter().map(|e| e.mood.clone()).collect(),
        most_recent_mood: last.mood.clone(),
        average_mood_category: last.mood_category,
    })
}

/// Break the trailing 7 days (today inclusive) into per-day buckets
pub fn weekly_summary(entries: &[MoodEntry], today: NaiveDate) -> WeeklySummary {
    let mut week = WeeklySummary::new();

    for offset in 0..7 {
        let day = (today - Duration::days(offset)).format("%Y-%m-%d").to_string();
        let matching = filter_by_date(entries, &day);
        let moods = matching.iter().map(|e| e.mood.clone()).collect();
        week.insert(
            day,
            DayBucket {
                count: matching.len(),
                moods,
            },
        );
    }

    week
}
