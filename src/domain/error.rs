// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Every failure a user can hit, as one typed enum.
// The application and CLI layers carry these inside
// anyhow::Error and downcast when they need to react
// to a specific case (e.g. a missing dataset).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    /// The training CSV does not exist
    #[error("Data file not found at '{}'", .0.display())]
    DatasetNotFound(PathBuf),

    /// A required column is absent from the CSV header
    #[error("Column '{column}' not found in '{}'", .path.display())]
    MissingColumn { column: String, path: PathBuf },

    /// No usable rows remained after loading
    #[error("Dataset contains no usable rows")]
    EmptyDataset,

    /// Every training label is the same class
    #[error("Training data contains only {0} reviews; need both classes")]
    SingleClass(String),

    /// The vectorizer found no tokens left after stop-word removal
    #[error("Empty vocabulary; perhaps the documents only contain stop words")]
    EmptyVocabulary,

    /// No fitted artifact exists at the expected path
    #[error("Model not found at '{}'. Please run `train` first.", .0.display())]
    ModelUnavailable(PathBuf),

    /// A training hyperparameter outside its valid range
    #[error("Invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name:   &'static str,
        value:  String,
        reason: &'static str,
    },

    /// Blank or whitespace-only text submitted for scoring
    #[error("Please enter some text to analyze.")]
    EmptyInput,
}
