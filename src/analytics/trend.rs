//! 14-day trend detection
//!
//! Buckets the trailing two weeks of entries into per-day mean scores and
//! compares the early half of the recorded days against the late half.

use crate::store::MoodEntry;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Days walked backward from today when bucketing scores
const TREND_WINDOW_DAYS: i64 = 14;

/// Minimum days with a recorded score before a trend is reported
const MIN_SCORED_DAYS: usize = 3;

/// Half-average gap beyond which the trend stops being stable
const TREND_THRESHOLD: f64 = 0.4;

/// Score for a category label.
///
/// Total lookup over the fixed table; unrecognized labels (including
/// `undefined`) score zero.
pub fn label_score(label: &str) -> i32 {
    match label {
        "positive" => 3,
        "mostly positive" => 2,
        "neutral" => 1,
        "mostly negative" => -1,
        "negative" => -2,
        _ => 0,
    }
}

/// Direction of the 14-day mood signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full trend report for a user with enough recorded days
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    pub trend: Trend,
    /// Mean score per recorded day; days without entries are omitted
    pub daily_scores: BTreeMap<String, f64>,
    pub first_half_avg: f64,
    pub second_half_avg: f64,
}

/// Outcome of trend detection
#[derive(Debug, Clone, PartialEq)]
pub enum TrendOutcome {
    /// Fewer than three days in the window have any entries
    InsufficientData,
    Detected(TrendReport),
}

/// Detect the mood trend over the 14 calendar days ending `today`.
///
/// Each recorded day's score is the arithmetic mean of its entries'
/// category scores; days with no entries are omitted rather than scored
/// zero. Recorded days are split chronologically into two halves (the odd
/// extra day lands in the second half) and the half averages compared
/// against the fixed threshold.
pub fn detect_trend(entries: &[MoodEntry], today: NaiveDate) -> TrendOutcome {
    let mut daily_scores = BTreeMap::new();

    for offset in 0..TREND_WINDOW_DAYS {
        let day = (today - Duration::days(offset)).format("%Y-%m-%d").to_string();
        let scores: Vec<i32> = entries
            .iter()
            .filter(|e| e.date == day)
            .map(|e| label_score(e.mood_category.as_str()))
            .collect();

        if !scores.is_empty() {
            let mean = scores.iter().sum::<i32>() as f64 / scores.len() as f64;
            daily_scores.insert(day, mean);
        }
    }

    if daily_scores.len() < MIN_SCORED_DAYS {
        return TrendOutcome::InsufficientData;
    }

    // BTreeMap iterates dates ascending; lexicographic order over ISO-8601
    // strings is chronological order.
    let ordered: Vec<f64> = daily_scores.values().copied().collect();
    let (first_half, second_half) = ordered.split_at(ordered.len() / 2);
    let first_half_avg = mean(first_half);
    let second_half_avg = mean(second_half);

    let trend = if second_half_avg - first_half_avg > TREND_THRESHOLD {
        Trend::Increasing
    } else if first_half_avg - second_half_avg > TREND_THRESHOLD {
        Trend::Decreasing
    } else {
        Trend::Stable
    };

    TrendOutcome::Detected(TrendReport {
        trend,
        daily_scores,
        first_half_avg,
        second_half_avg,
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
