// ============================================================
// Layer 5 — Trainer
// ============================================================
// Fits the TF-IDF + logistic regression pipeline on the
// training partition. The held-out partition is never seen
// here; evaluation lives in ml::evaluator.

use anyhow::{Context, Result};

use crate::application::train_use_case::TrainConfig;
use crate::data::dataset::ReviewDataset;
use crate::ml::pipeline::SentimentPipeline;

pub fn run_training(cfg: &TrainConfig, train: &ReviewDataset) -> Result<SentimentPipeline> {
    let counts = train.class_counts();
    tracing::info!(
        "Fitting on {} reviews (class counts: {:?})",
        train.len(),
        counts
    );

    let pipeline = SentimentPipeline::fit(
        cfg.vectorizer_config(),
        &cfg.classifier_config(),
        &train.texts(),
        &train.labels(),
    )
    .context("Failed to fit sentiment pipeline")?;

    tracing::info!(
        "Classifier converged in {} iterations",
        pipeline.classifier().n_iter()
    );
    Ok(pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::SentimentError;
    use crate::domain::review::LabeledReview;
    use crate::domain::sentiment::Sentiment;

    #[test]
    fn test_single_class_training_fails_with_typed_error() {
        let train = ReviewDataset::new(vec![
            LabeledReview::new("great shuttle", Sentiment::Positive),
            LabeledReview::new("lovely feathers", Sentiment::Positive),
        ]);
        let err = run_training(&TrainConfig::default(), &train).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SentimentError>(),
            Some(SentimentError::SingleClass(_))
        ));
    }

    #[test]
    fn test_vocabulary_respects_max_features() {
        let train = ReviewDataset::new(vec![
            LabeledReview::new("great durable shuttle", Sentiment::Positive),
            LabeledReview::new("awful flimsy cork", Sentiment::Negative),
        ]);
        let cfg = TrainConfig { max_features: 3, ..TrainConfig::default() };
        let pipeline = run_training(&cfg, &train).unwrap();
        assert_eq!(pipeline.vectorizer().vocabulary_size(), 3);
    }
}
