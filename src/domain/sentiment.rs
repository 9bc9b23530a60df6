// ============================================================
// Layer 3 — Sentiment Label
// ============================================================
// The system predicts one of two classes:
//
//   0 = Negative   (ratings 1 and 2)
//   1 = Positive   (ratings 3, 4 and 5)
//
// A rating of exactly 3 counts as positive. This is a fixed
// business rule of the dataset labelling, not a tunable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ratings at or above this value are labelled positive.
pub const POSITIVE_RATING_THRESHOLD: f64 = 3.0;

/// Binary sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sentiment {
    Negative,
    Positive,
}

impl Sentiment {
    /// Both classes in label order (0, 1)
    pub const ALL: [Sentiment; 2] = [Sentiment::Negative, Sentiment::Positive];

    /// Numeric class label: 0 = negative, 1 = positive
    pub fn label(self) -> u8 {
        match self {
            Sentiment::Negative => 0,
            Sentiment::Positive => 1,
        }
    }

    /// Index into a `[p_negative, p_positive]` probability pair
    pub fn index(self) -> usize {
        self.label() as usize
    }

    /// The label as a regression target for the classifier
    pub fn target(self) -> f64 {
        self.label() as f64
    }

    pub fn from_label(label: u8) -> Option<Self> {
        match label {
            0 => Some(Sentiment::Negative),
            1 => Some(Sentiment::Positive),
            _ => None,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Positive => write!(f, "Positive"),
        }
    }
}

/// Map a star rating to a sentiment label.
///
/// `rating >= 3` → Positive, otherwise Negative.
/// A NaN rating compares false and is therefore Negative.
pub fn derive_label(rating: f64) -> Sentiment {
    if rating >= POSITIVE_RATING_THRESHOLD {
        Sentiment::Positive
    } else {
        Sentiment::Negative
    }
}

/// The output of scoring one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// The predicted class
    pub sentiment: Sentiment,

    /// Probability of the predicted class, in [0, 1]
    pub confidence: f64,

    /// `[p_negative, p_positive]`, sums to 1
    pub probabilities: [f64; 2],

    /// The normalised text that was actually scored
    pub cleaned_text: String,
}

impl Prediction {
    /// Build a prediction from a class probability pair.
    /// Ties resolve to Positive, matching a p_positive >= 0.5 cut.
    pub fn from_probabilities(probabilities: [f64; 2], cleaned_text: impl Into<String>) -> Self {
        let sentiment = if probabilities[1] >= probabilities[0] {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        };
        Self {
            sentiment,
            confidence: probabilities[sentiment.index()],
            probabilities,
            cleaned_text: cleaned_text.into(),
        }
    }

    /// Confidence as a percentage, for display
    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }
}
