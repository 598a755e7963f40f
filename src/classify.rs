//! Mood classification
//!
//! Maps free-text mood labels to coarse categories. The label tables are a
//! fixed three-way partition; anything outside them classifies as
//! [`Category::Undefined`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse category derived from a raw mood label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Positive,
    Neutral,
    Negative,
    Undefined,
}

impl Category {
    /// The serialized label for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Positive => "positive",
            Category::Neutral => "neutral",
            Category::Negative => "negative",
            Category::Undefined => "undefined",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labels recognized as positive moods
const POSITIVE_LABELS: &[&str] = &["happy", "excited", "content"];

/// Labels recognized as neutral moods
const NEUTRAL_LABELS: &[&str] = &["calm", "indifferent", "fine"];

/// Labels recognized as negative moods
const NEGATIVE_LABELS: &[&str] = &["sad", "angry", "stressed"];

/// Classify a raw mood label into a category.
///
/// Pure and total: labels are matched case-sensitively against the fixed
/// partition, and anything unrecognized yields [`Category::Undefined`].
pub fn classify(mood: &str) -> Category {
    if POSITIVE_LABELS.contains(&mood) {
        Category::Positive
    } else if NEUTRAL_LABELS.contains(&mood) {
        Category::Neutral
    } else if NEGATIVE_LABELS.contains(&mood) {
        Category::Negative
    } else {
        Category::Undefined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_positive_labels() {
        for label in ["happy", "excited", "content"] {
            assert_eq!(classify(label), Category::Positive, "label: {}", label);
        }
    }

    #[test]
    fn test_classify_neutral_labels() {
        for label in ["calm", "indifferent", "fine"] {
            assert_eq!(classify(label), Category::Neutral, "label: {}", label);
        }
    }

    #[test]
    fn test_classify_negative_labels() {
        for label in ["sad", "angry", "stressed"] {
            assert_eq!(classify(label), Category::Negative, "label: {}", label);
        }
    }

    #[test]
    fn test_classify_unknown_label() {
        assert_eq!(classify("ecstatic"), Category::Undefined);
        assert_eq!(classify(""), Category::Undefined);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(classify("Happy"), Category::Undefined);
        assert_eq!(classify("SAD"), Category::Undefined);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Category::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::to_string(&Category::Undefined).unwrap(),
            "\"undefined\""
        );
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Negative.to_string(), "negative");
    }
}
