//! Average-mood heuristic
//!
//! Derives a single qualitative label from a user's full history based on
//! the ratio of positive and negative entries.

use crate::classify::Category;
use crate::store::MoodEntry;
use serde::Serialize;
use std::fmt;

/// Qualitative label for a user's whole mood history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AverageMood {
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "mostly positive")]
    MostlyPositive,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "mostly negative")]
    MostlyNegative,
    #[serde(rename = "negative")]
    Negative,
}

impl AverageMood {
    /// The serialized label for this average
    pub fn as_str(&self) -> &'static str {
        match self {
            AverageMood::Positive => "positive",
            AverageMood::MostlyPositive => "mostly positive",
            AverageMood::Neutral => "neutral",
            AverageMood::MostlyNegative => "mostly negative",
            AverageMood::Negative => "negative",
        }
    }
}

impl fmt::Display for AverageMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the overall mood label from category counts.
///
/// Undefined entries count toward nothing, and the total is clamped to 1
/// so an all-undefined (or empty) history divides cleanly and falls
/// through to neutral. The decision table is ordered; ties between the
/// positive and negative ratios fall through to neutral as well.
pub fn average_mood(entries: &[MoodEntry]) -> AverageMood {
    let mut positive = 0usize;
    let mut neutral = 0usize;
    let mut negative = 0usize;

    for entry in entries {
        match entry.mood_category {
            Category::Positive => positive += 1,
            Category::Neutral => neutral += 1,
            Category::Negative => negative += 1,
            Category::Undefined => {}
        }
    }

    let total = (positive + neutral + negative).max(1) as f64;
    let pos_ratio = positive as f64 / total;
    let neg_ratio = negative as f64 / total;

    if pos_ratio >= 0.7 && pos_ratio > neg_ratio {
        AverageMood::Positive
    } else if pos_ratio >= 0.5 && pos_ratio > neg_ratio {
        AverageMood::MostlyPositive
    } else if neg_ratio >= 0.7 && neg_ratio > pos_ratio {
        AverageMood::Negative
    } else if neg_ratio >= 0.5 && neg_ratio > pos_ratio {
        AverageMood::MostlyNegative
    } else {
        AverageMood::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    fn entries(moods: &[&str]) -> Vec<MoodEntry> {
        moods
            .iter()
            .enumerate()
            .map(|(i, mood)| MoodEntry {
                entry_id: format!("id-{}", i),
                date: "2026-08-20".to_string(),
                mood: mood.to_string(),
                mood_category: classify(mood),
                journal_text: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_three_positive_one_negative_is_positive() {
        // pos_ratio = 0.75 >= 0.7 and greater than neg_ratio
        let log = entries(&["happy", "happy", "happy", "sad"]);
        assert_eq!(average_mood(&log), AverageMood::Positive);
    }

    #[test]
    fn test_half_positive_is_mostly_positive() {
        // pos_ratio = 0.5, neg_ratio = 0.25
        let log = entries(&["happy", "excited", "sad", "calm"]);
        assert_eq!(average_mood(&log), AverageMood::MostlyPositive);
    }

    #[test]
    fn test_mostly_negative_history() {
        let log = entries(&["sad", "angry", "happy", "calm"]);
        assert_eq!(average_mood(&log), AverageMood::MostlyNegative);
    }

    #[test]
    fn test_overwhelmingly_negative_history() {
        let log = entries(&["sad", "angry", "stressed", "sad"]);
        assert_eq!(average_mood(&log), AverageMood::Negative);
    }

    #[test]
    fn test_tie_falls_through_to_neutral() {
        // pos_ratio == neg_ratio == 0.5
        let log = entries(&["happy", "sad"]);
        assert_eq!(average_mood(&log), AverageMood::Neutral);
    }

    #[test]
    fn test_all_undefined_is_neutral() {
        let log = entries(&["meh", "blah"]);
        assert_eq!(average_mood(&log), AverageMood::Neutral);
    }

    #[test]
    fn test_empty_history_is_neutral() {
        assert_eq!(average_mood(&[]), AverageMood::Neutral);
    }

    #[test]
    fn test_undefined_entries_do_not_dilute_ratios() {
        // 3 positive of 4 counted: undefined is excluded from the total
        let log = entries(&["happy", "happy", "happy", "sad", "meh", "blah"]);
        assert_eq!(average_mood(&log), AverageMood::Positive);
    }

    #[test]
    fn test_average_mood_serializes_with_spaces() {
        assert_eq!(
            serde_json::to_string(&AverageMood::MostlyPositive).unwrap(),
            "\"mostly positive\""
        );
    }
}
