// ============================================================
// Layer 5 — Sentiment Pipeline
// ============================================================
// The fitted vectorizer and classifier as one unit. This is
// the artifact: it is serialised whole by the trainer and
// loaded whole by the inferencer, and never mutated after fit.
//
// The pipeline consumes text that has ALREADY been normalised
// by data::preprocessor; callers own that step.

use serde::{Deserialize, Serialize};

use crate::domain::error::SentimentError;
use crate::domain::sentiment::Sentiment;
use crate::ml::classifier::{LogisticConfig, LogisticRegression};
use crate::ml::vectorizer::{TfidfVectorizer, VectorizerConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentPipeline {
    vectorizer: TfidfVectorizer,
    classifier: LogisticRegression,
}

impl SentimentPipeline {
    /// Fit the vectorizer on `texts`, then the classifier on the
    /// resulting rows and `labels`.
    pub fn fit<S: AsRef<str>>(
        vectorizer_cfg: VectorizerConfig,
        classifier_cfg: &LogisticConfig,
        texts:          &[S],
        labels:         &[Sentiment],
    ) -> Result<Self, SentimentError> {
        if texts.is_empty() {
            return Err(SentimentError::EmptyDataset);
        }

        let vectorizer = TfidfVectorizer::fit(vectorizer_cfg, texts)?;
        tracing::info!("Vocabulary size: {}", vectorizer.vocabulary_size());

        let rows       = vectorizer.transform_all(texts);
        let classifier = LogisticRegression::fit(
            classifier_cfg,
            &rows,
            labels,
            vectorizer.vocabulary_size(),
        )?;

        Ok(Self { vectorizer, classifier })
    }

    /// `[p_negative, p_positive]` for one cleaned text
    pub fn predict_proba(&self, cleaned_text: &str) -> [f64; 2] {
        self.classifier.predict_proba(&self.vectorizer.transform(cleaned_text))
    }

    pub fn predict(&self, cleaned_text: &str) -> Sentiment {
        self.classifier.predict(&self.vectorizer.transform(cleaned_text))
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn classifier(&self) -> &LogisticRegression {
        &self.classifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_and_predict() {
        let texts = [
            "excellent shuttle durable",
            "excellent quality",
            "durable feathers excellent",
            "terrible shuttle broke",
            "terrible quality",
            "broke feathers terrible",
        ];
        let labels = [
            Sentiment::Positive,
            Sentiment::Positive,
            Sentiment::Positive,
            Sentiment::Negative,
            Sentiment::Negative,
            Sentiment::Negative,
        ];
        let p = SentimentPipeline::fit(
            VectorizerConfig::default(),
            &LogisticConfig::default(),
            &texts[..],
            &labels,
        )
        .unwrap();

        assert_eq!(p.predict("excellent"), Sentiment::Positive);
        assert_eq!(p.predict("terrible"), Sentiment::Negative);
        let [neg, pos] = p.predict_proba("unseen words only");
        assert!((neg + pos - 1.0).abs() < 1e-12);
    }
}
