// ============================================================
// Layer 2 — PredictUseCase
// ============================================================
// Scores user-entered reviews with the trained artifact.
//
// The artifact is loaded lazily on first use and cached in a
// OnceLock owned by this struct for the rest of the process.
// It is read-only after load. An absent artifact is reported
// as ModelUnavailable on every call; nothing is cached then,
// so a model trained later is picked up.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::data::preprocessor::is_blank;
use crate::domain::error::SentimentError;
use crate::domain::sentiment::Prediction;
use crate::domain::traits::SentimentClassifier;
use crate::infra::artifact::ArtifactStore;
use crate::ml::inferencer::Inferencer;

pub struct PredictUseCase {
    store:      ArtifactStore,
    inferencer: OnceLock<Inferencer>,
}

impl PredictUseCase {
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            store:      ArtifactStore::new(model_path),
            inferencer: OnceLock::new(),
        }
    }

    pub fn model_path(&self) -> &Path {
        self.store.path()
    }

    /// True once a model is loaded or an artifact file is present
    pub fn is_available(&self) -> bool {
        self.inferencer.get().is_some() || self.store.exists()
    }

    /// The single construction point of the cached inferencer.
    fn inferencer(&self) -> Result<&Inferencer> {
        if let Some(inf) = self.inferencer.get() {
            return Ok(inf);
        }
        let loaded = Inferencer::from_store(&self.store)?;
        Ok(self.inferencer.get_or_init(|| loaded))
    }

    /// Force the artifact to load now, surfacing ModelUnavailable early.
    pub fn warm_up(&self) -> Result<()> {
        self.inferencer().map(|_| ())
    }

    /// Score one review.
    /// Blank input is rejected before the model is even consulted.
    pub fn analyze(&self, text: &str) -> Result<Prediction> {
        if is_blank(text) {
            return Err(SentimentError::EmptyInput.into());
        }
        self.inferencer()?.classify(text)
    }
}
