// ============================================================
// Layer 3 — Review Domain Types
// ============================================================
// A Review is one row of the source CSV: free text plus a
// 1–5 star rating. A LabeledReview is what training consumes:
// the normalised text and the sentiment derived from the rating.

use serde::{Deserialize, Serialize};

use crate::domain::sentiment::{derive_label, Sentiment};

/// A raw review as read from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Free-text body. `None` when the cell is missing from the row,
    /// which the normaliser treats as non-text input.
    pub text: Option<String>,

    /// Star rating, nominally 1–5
    pub rating: f64,
}

impl Review {
    /// Create a new Review.
    /// Uses impl Into<String> so callers can pass &str or String.
    pub fn new(text: impl Into<String>, rating: f64) -> Self {
        Self {
            text:   Some(text.into()),
            rating,
        }
    }

    /// A review whose text cell is absent
    pub fn without_text(rating: f64) -> Self {
        Self { text: None, rating }
    }

    /// The sentiment implied by this review's rating
    pub fn sentiment(&self) -> Sentiment {
        derive_label(self.rating)
    }
}

/// A review ready for training: cleaned text and its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledReview {
    pub cleaned_text: String,
    pub sentiment:    Sentiment,
}

impl LabeledReview {
    pub fn new(cleaned_text: impl Into<String>, sentiment: Sentiment) -> Self {
        Self {
            cleaned_text: cleaned_text.into(),
            sentiment,
        }
    }
}
