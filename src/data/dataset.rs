// ============================================================
// Layer 4 — Review Dataset
// ============================================================
// An in-memory collection of labelled reviews with the
// accessors the trainer and evaluator need.

use std::collections::BTreeMap;

use crate::data::preprocessor::Preprocessor;
use crate::domain::review::{LabeledReview, Review};
use crate::domain::sentiment::Sentiment;

#[derive(Debug, Clone, Default)]
pub struct ReviewDataset {
    samples: Vec<LabeledReview>,
}

impl ReviewDataset {
    pub fn new(samples: Vec<LabeledReview>) -> Self {
        Self { samples }
    }

    /// Normalise every review body and derive every label.
    pub fn from_reviews(reviews: &[Review], preprocessor: &Preprocessor) -> Self {
        let samples = reviews
            .iter()
            .map(|r| LabeledReview::new(preprocessor.clean_optional(r.text.as_deref()), r.sentiment()))
            .collect();
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[LabeledReview] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<LabeledReview> {
        self.samples
    }

    pub fn texts(&self) -> Vec<&str> {
        self.samples.iter().map(|s| s.cleaned_text.as_str()).collect()
    }

    pub fn labels(&self) -> Vec<Sentiment> {
        self.samples.iter().map(|s| s.sentiment).collect()
    }

    /// Number of samples per class, in label order
    pub fn class_counts(&self) -> BTreeMap<Sentiment, usize> {
        let mut counts = BTreeMap::new();
        for s in &self.samples {
            *counts.entry(s.sentiment).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reviews_cleans_and_labels() {
        let reviews = vec![
            Review::new("Awesome!! READ MORE", 5.0),
            Review::new("Bad.", 2.0),
            Review::without_text(3.0),
        ];
        let ds = ReviewDataset::from_reviews(&reviews, &Preprocessor::new());
        assert_eq!(ds.texts(), vec!["awesome", "bad", ""]);
        assert_eq!(
            ds.labels(),
            vec![Sentiment::Positive, Sentiment::Negative, Sentiment::Positive]
        );
        let counts = ds.class_counts();
        assert_eq!(counts[&Sentiment::Positive], 2);
        assert_eq!(counts[&Sentiment::Negative], 1);
    }
}
