// ============================================================
// Layer 5 — Inferencer
// ============================================================
// Scores raw user text with a loaded pipeline:
//
//   raw text ──(blank?)──► reject with EmptyInput
//       │
//       ▼
//   Preprocessor::clean   (same normalisation as training)
//       │
//       ▼
//   pipeline.predict_proba → Prediction { label, confidence }

use anyhow::Result;

use crate::data::preprocessor::{is_blank, Preprocessor};
use crate::domain::error::SentimentError;
use crate::domain::sentiment::Prediction;
use crate::domain::traits::SentimentClassifier;
use crate::infra::artifact::ArtifactStore;
use crate::ml::pipeline::SentimentPipeline;

pub struct Inferencer {
    pipeline:     SentimentPipeline,
    preprocessor: Preprocessor,
}

impl Inferencer {
    pub fn new(pipeline: SentimentPipeline) -> Self {
        Self {
            pipeline,
            preprocessor: Preprocessor::new(),
        }
    }

    /// Load the artifact; fails with ModelUnavailable if it is absent.
    pub fn from_store(store: &ArtifactStore) -> Result<Self> {
        let pipeline = store.load()?;
        tracing::info!("Model loaded from '{}'", store.path().display());
        Ok(Self::new(pipeline))
    }

    pub fn pipeline(&self) -> &SentimentPipeline {
        &self.pipeline
    }
}

impl SentimentClassifier for Inferencer {
    fn classify(&self, text: &str) -> Result<Prediction> {
        if is_blank(text) {
            return Err(SentimentError::EmptyInput.into());
        }

        let cleaned       = self.preprocessor.clean(text);
        let probabilities = self.pipeline.predict_proba(&cleaned);
        let prediction    = Prediction::from_probabilities(probabilities, cleaned);

        tracing::debug!(
            "Scored {:?} → {} ({:.3})",
            prediction.cleaned_text,
            prediction.sentiment,
            prediction.confidence
        );
        Ok(prediction)
    }
}
