//! Mood-based recommendations
//!
//! Maps a 1-5 self-reported mood score to a band of coping strategies,
//! with support resources attached at the low end. Pure: no store access.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors from the recommendation engine
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecommendError {
    /// Score outside the accepted 1-5 range
    #[error("mood_score must be an integer between 1 and 5")]
    ScoreOutOfRange,
}

/// Score band a 1-5 mood score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    VeryLow,
    Low,
    Neutral,
    Positive,
    VeryPositive,
}

impl ScoreBand {
    /// Band for a raw score, `None` outside 1..=5
    pub fn from_score(score: i64) -> Option<Self> {
        match score {
            1 => Some(ScoreBand::VeryLow),
            2 => Some(ScoreBand::Low),
            3 => Some(ScoreBand::Neutral),
            4 => Some(ScoreBand::Positive),
            5 => Some(ScoreBand::VeryPositive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::VeryLow => "very_low",
            ScoreBand::Low => "low",
            ScoreBand::Neutral => "neutral",
            ScoreBand::Positive => "positive",
            ScoreBand::VeryPositive => "very_positive",
        }
    }

    fn strategies(&self) -> &'static [&'static str] {
        match self {
            ScoreBand::VeryLow => VERY_LOW_STRATEGIES,
            ScoreBand::Low => LOW_STRATEGIES,
            ScoreBand::Neutral => NEUTRAL_STRATEGIES,
            ScoreBand::Positive => POSITIVE_STRATEGIES,
            ScoreBand::VeryPositive => VERY_POSITIVE_STRATEGIES,
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const VERY_LOW_STRATEGIES: &[&str] = &[
    "Try slow deep breathing for 2 minutes",
    "Take a short walk outside",
    "Drink a glass of water and rest briefly",
];

const LOW_STRATEGIES: &[&str] = &[
    "Write a short reflection about how you're feeling",
    "Listen to calming music",
    "Do a simple grounding exercise (5-4-3-2-1)",
];

const NEUTRAL_STRATEGIES: &[&str] = &[
    "Take a moment to stretch your body",
    "Set a small goal for the next hour",
    "Practice mindful breathing",
];

const POSITIVE_STRATEGIES: &[&str] = &[
    "Celebrate things that went well today",
    "Share something good with a friend",
    "Do an activity you enjoy",
];

const VERY_POSITIVE_STRATEGIES: &[&str] = &[
    "Reflect on what contributed to your good mood today",
    "Try a creative activity like doodling or journaling",
    "Spread kindness to someone else",
];

/// Support resources attached when the score is low
const SUPPORT_RESOURCES: &[&str] = &[
    "Campus counseling and psychological services",
    "Wellness coaching at the recreation center",
    "Student peer support network",
    "Counseling center mind spa",
];

/// Scores at or below this attach support resources
const SUPPORT_THRESHOLD: i64 = 2;

/// Recommendation payload for a mood score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub mood_score: i64,
    pub category: ScoreBand,
    pub coping_strategies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_resources: Option<Vec<String>>,
}

/// Build a recommendation for a 1-5 mood score.
///
/// Out-of-range scores are rejected before anything else.
pub fn recommend(mood_score: i64) -> Result<Recommendation, RecommendError> {
    let band = ScoreBand::from_score(mood_score).ok_or(RecommendError::ScoreOutOfRange)?;

    let coping_strategies = band.strategies().iter().map(|s| s.to_string()).collect();
    let support_resources = (mood_score <= SUPPORT_THRESHOLD)
        .then(|| SUPPORT_RESOURCES.iter().map(|s| s.to_string()).collect());

    Ok(Recommendation {
        mood_score,
        category: band,
        coping_strategies,
        support_resources,
    })
}
