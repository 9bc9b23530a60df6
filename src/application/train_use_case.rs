// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Load the review CSV        (Layer 4 - data)
//   Step 2: Clean text, derive labels  (Layer 4 - data)
//   Step 3: Seeded train/test split    (Layer 4 - data)
//   Step 4: Fit vectorizer + classifier (Layer 5 - ml)
//   Step 5: Evaluate on held-out data  (Layer 5 - ml)
//   Step 6: Save the artifact          (Layer 6 - infra)
//   Step 7: Append run metrics         (Layer 6 - infra)
//
// A missing dataset is not an error: it is reported and the
// run ends as TrainOutcome::DatasetMissing.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    dataset::ReviewDataset,
    loader::{CsvReviewLoader, DEFAULT_RATING_COLUMN, DEFAULT_TEXT_COLUMN},
    preprocessor::Preprocessor,
    splitter::split_train_test,
};
use crate::domain::error::SentimentError;
use crate::domain::traits::ReviewSource;
use crate::infra::{
    artifact::{ArtifactStore, DEFAULT_MODEL_PATH},
    metrics::{MetricsLogger, RunMetrics},
};
use crate::ml::{
    classifier::LogisticConfig,
    evaluator::{evaluate, ClassificationReport},
    trainer::run_training,
    vectorizer::VectorizerConfig,
};

// ─── Training Configuration ──────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub data_path:     PathBuf,
    pub model_path:    PathBuf,
    pub text_column:   String,
    pub rating_column: String,
    pub test_size:     f64,
    pub seed:          u64,
    pub max_features:  usize,
    pub c:             f64,
    pub max_iter:      usize,
    pub tolerance:     f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            data_path:     PathBuf::from("data/reviews.csv"),
            model_path:    PathBuf::from(DEFAULT_MODEL_PATH),
            text_column:   DEFAULT_TEXT_COLUMN.to_string(),
            rating_column: DEFAULT_RATING_COLUMN.to_string(),
            test_size:     0.2,
            seed:          42,
            max_features:  5000,
            c:             1.0,
            max_iter:      1000,
            tolerance:     1e-6,
        }
    }
}

impl TrainConfig {
    /// Check every hyperparameter before any data is read or written.
    pub fn validate(&self) -> Result<(), SentimentError> {
        if !(self.test_size > 0.0 && self.test_size < 1.0) {
            return Err(SentimentError::InvalidParameter {
                name:   "test_size",
                value:  self.test_size.to_string(),
                reason: "must lie strictly between 0 and 1",
            });
        }
        if self.max_features == 0 {
            return Err(SentimentError::InvalidParameter {
                name:   "max_features",
                value:  self.max_features.to_string(),
                reason: "must be at least 1",
            });
        }
        self.classifier_config().validate()
    }

    pub fn vectorizer_config(&self) -> VectorizerConfig {
        VectorizerConfig {
            max_features:      self.max_features,
            remove_stop_words: true,
        }
    }

    pub fn classifier_config(&self) -> LogisticConfig {
        LogisticConfig {
            c:         self.c,
            max_iter:  self.max_iter,
            tolerance: self.tolerance,
        }
    }
}

// ─── Outcome ──────────────────────────────────────────────────────────────────
/// Summary of a completed training run
#[derive(Debug, Clone)]
pub struct TrainReport {
    pub train_size:      usize,
    pub test_size:       usize,
    pub vocabulary_size: usize,
    pub report:          ClassificationReport,
    pub model_path:      PathBuf,
}

#[derive(Debug, Clone)]
pub enum TrainOutcome {
    Trained(TrainReport),
    /// The dataset file was absent; nothing was trained
    DatasetMissing(PathBuf),
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full training pipeline end to end
    pub fn execute(&self) -> Result<TrainOutcome> {
        let cfg = &self.config;
        cfg.validate()?;

        // ── Step 1: Load reviews ──────────────────────────────────────────────
        tracing::info!("Loading data from '{}'", cfg.data_path.display());
        let loader = CsvReviewLoader::new(&cfg.data_path)
            .with_columns(&cfg.text_column, &cfg.rating_column);
        let reviews = match loader.load_all() {
            Ok(reviews) => reviews,
            Err(e) => match e.downcast_ref::<SentimentError>() {
                Some(SentimentError::DatasetNotFound(path)) => {
                    tracing::error!("{}", e);
                    return Ok(TrainOutcome::DatasetMissing(path.clone()));
                }
                _ => return Err(e),
            },
        };
        if reviews.is_empty() {
            return Err(SentimentError::EmptyDataset.into());
        }

        // ── Step 2: Clean text and derive labels ──────────────────────────────
        tracing::info!("Preprocessing data...");
        let dataset = ReviewDataset::from_reviews(&reviews, &Preprocessor::new());

        // ── Step 3: Train / held-out split ────────────────────────────────────
        let (train, test) = split_train_test(dataset.into_samples(), cfg.test_size, cfg.seed);
        let train = ReviewDataset::new(train);
        let test  = ReviewDataset::new(test);
        tracing::info!("Split: {} train, {} held out", train.len(), test.len());

        // ── Step 4: Fit ───────────────────────────────────────────────────────
        tracing::info!("Training model...");
        let pipeline = run_training(cfg, &train)?;

        // ── Step 5: Evaluate ──────────────────────────────────────────────────
        tracing::info!("Evaluating model...");
        let report = evaluate(&pipeline, &test);
        tracing::info!("Accuracy: {:.4}", report.accuracy);

        // ── Step 6: Persist ───────────────────────────────────────────────────
        let store = ArtifactStore::new(&cfg.model_path);
        store.save(&pipeline)?;

        // ── Step 7: Metrics log ───────────────────────────────────────────────
        let metrics = RunMetrics {
            train_size:      train.len(),
            test_size:       test.len(),
            vocabulary_size: pipeline.vectorizer().vocabulary_size(),
            iterations:      pipeline.classifier().n_iter(),
            report:          report.clone(),
        };
        MetricsLogger::new(store.dir())?.log(&metrics)?;

        Ok(TrainOutcome::Trained(TrainReport {
            train_size:      metrics.train_size,
            test_size:       metrics.test_size,
            vocabulary_size: metrics.vocabulary_size,
            report,
            model_path:      cfg.model_path.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::predict_use_case::PredictUseCase;
    use crate::domain::sentiment::Sentiment;

    const FIXTURE: &str = include_str!("../../data/sample_reviews.csv");

    fn config_in(dir: &std::path::Path) -> TrainConfig {
        let data_path = dir.join("reviews.csv");
        std::fs::write(&data_path, FIXTURE).unwrap();
        TrainConfig {
            data_path,
            model_path: dir.join("out").join("model.json"),
            ..TrainConfig::default()
        }
    }

    fn trained(outcome: TrainOutcome) -> TrainReport {
        match outcome {
            TrainOutcome::Trained(r) => r,
            other => panic!("expected a trained model, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_dataset_ends_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = TrainConfig {
            data_path:  dir.path().join("absent.csv"),
            model_path: dir.path().join("model.json"),
            ..TrainConfig::default()
        };
        let outcome = TrainUseCase::new(cfg.clone()).execute().unwrap();
        assert!(matches!(outcome, TrainOutcome::DatasetMissing(p) if p == cfg.data_path));
        assert!(!cfg.model_path.exists());
    }

    #[test]
    fn test_fixture_training_is_accurate_and_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path());

        let first  = trained(TrainUseCase::new(cfg.clone()).execute().unwrap());
        let second = trained(TrainUseCase::new(cfg.clone()).execute().unwrap());

        assert_eq!(first.test_size, 12);
        assert_eq!(first.train_size, 48);
        assert!(first.report.accuracy >= 0.75, "accuracy {}", first.report.accuracy);
        assert_eq!(first.report, second.report);

        assert!(cfg.model_path.exists());
        let metrics = std::fs::read_to_string(dir.path().join("out").join("metrics.csv")).unwrap();
        assert_eq!(metrics.lines().count(), 3);
    }

    #[test]
    fn test_trained_model_scores_obvious_reviews() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path());
        trained(TrainUseCase::new(cfg.clone()).execute().unwrap());

        let predictor = PredictUseCase::new(&cfg.model_path);
        let good = predictor.analyze("Excellent shuttles, durable and worth the price!").unwrap();
        let bad  = predictor.analyze("Terrible quality, feathers broke. Waste of money").unwrap();
        assert_eq!(good.sentiment, Sentiment::Positive);
        assert_eq!(bad.sentiment, Sentiment::Negative);
    }

    fn invalid_parameter(cfg: TrainConfig) -> &'static str {
        let model_path = cfg.model_path.clone();
        let err = TrainUseCase::new(cfg).execute().unwrap_err();
        assert!(!model_path.exists(), "no artifact may be written");
        match err.downcast_ref::<SentimentError>() {
            Some(SentimentError::InvalidParameter { name, .. }) => *name,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_zero_c_is_rejected_before_training() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = TrainConfig { c: 0.0, ..config_in(dir.path()) };
        assert_eq!(invalid_parameter(cfg), "c");
        assert!(!dir.path().join("out").join("metrics.csv").exists());
    }

    #[test]
    fn test_negative_or_nan_c_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        for c in [-1.0, f64::NAN] {
            let cfg = TrainConfig { c, ..config_in(dir.path()) };
            assert_eq!(invalid_parameter(cfg), "c");
        }
    }

    #[test]
    fn test_zero_max_features_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = TrainConfig { max_features: 0, ..config_in(dir.path()) };
        assert_eq!(invalid_parameter(cfg), "max_features");
    }

    #[test]
    fn test_zero_max_iter_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = TrainConfig { max_iter: 0, ..config_in(dir.path()) };
        assert_eq!(invalid_parameter(cfg), "max_iter");
    }

    #[test]
    fn test_out_of_range_test_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        for test_size in [0.0, 1.0, -0.2] {
            let cfg = TrainConfig { test_size, ..config_in(dir.path()) };
            assert_eq!(invalid_parameter(cfg), "test_size");
        }
    }

    #[test]
    fn test_missing_column_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = TrainConfig {
            rating_column: "Stars".to_string(),
            ..config_in(dir.path())
        };
        let err = TrainUseCase::new(cfg).execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SentimentError>(),
            Some(SentimentError::MissingColumn { .. })
        ));
    }
}
