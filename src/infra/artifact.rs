// ============================================================
// Layer 6 — Artifact Store
// ============================================================
// Saves and restores the fitted SentimentPipeline as ONE
// JSON file. There is no schema tag or version: retraining
// simply overwrites the file.
//
// What gets saved:
//   - vectorizer config, vocabulary (term → column) and idf
//   - classifier coefficients, intercept, iteration count
//
// Reference: serde_json crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::domain::error::SentimentError;
use crate::ml::pipeline::SentimentPipeline;

/// Default artifact file name
pub const DEFAULT_MODEL_PATH: &str = "model.json";

/// Reads and writes the single pipeline artifact.
pub struct ArtifactStore {
    path: PathBuf,
}

impl ArtifactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the artifact (used for side files like metrics.csv)
    pub fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Serialise the pipeline, replacing any previous artifact.
    pub fn save(&self, pipeline: &SentimentPipeline) -> Result<()> {
        fs::create_dir_all(self.dir())
            .with_context(|| format!("Cannot create '{}'", self.dir().display()))?;

        let file = File::create(&self.path)
            .with_context(|| format!("Cannot write model to '{}'", self.path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, pipeline)?;
        writer.flush()?;

        tracing::info!("Saved model to '{}'", self.path.display());
        Ok(())
    }

    /// Load the pipeline.
    /// An absent file is reported as `SentimentError::ModelUnavailable`.
    pub fn load(&self) -> Result<SentimentPipeline> {
        if !self.exists() {
            return Err(SentimentError::ModelUnavailable(self.path.clone()).into());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Cannot open model '{}'", self.path.display()))?;
        let pipeline = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Model file '{}' is corrupt", self.path.display()))?;
        Ok(pipeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sentiment::Sentiment;
    use crate::ml::classifier::LogisticConfig;
    use crate::ml::vectorizer::VectorizerConfig;

    fn pipeline() -> SentimentPipeline {
        SentimentPipeline::fit(
            VectorizerConfig::default(),
            &LogisticConfig::default(),
            &["sturdy shuttle", "flimsy shuttle"][..],
            &[Sentiment::Positive, Sentiment::Negative],
        )
        .unwrap()
    }

    #[test]
    fn test_save_then_load_gives_same_predictions() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path().join("nested").join("model.json"));
        let original = pipeline();

        store.save(&original).unwrap();
        assert!(store.exists());

        let loaded = store.load().unwrap();
        assert_eq!(loaded.vectorizer(), original.vectorizer());
        assert_eq!(loaded.predict("sturdy"), original.predict("sturdy"));
    }

    #[test]
    fn test_missing_artifact_is_unavailable() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path().join("model.json"));
        let err   = store.load().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SentimentError>(),
            Some(SentimentError::ModelUnavailable(_))
        ));
    }

    #[test]
    fn test_corrupt_artifact_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, "not json").unwrap();
        let err = ArtifactStore::new(&path).load().unwrap_err();
        assert!(err.downcast_ref::<SentimentError>().is_none());
    }

    #[test]
    fn test_bare_file_name_lives_in_current_dir() {
        assert_eq!(ArtifactStore::new("model.json").dir(), PathBuf::from("."));
    }
}
