// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Three subcommands:
//   train        fit and save the model
//   predict      score one review given on the command line
//   interactive  prompt loop scoring one review per line
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::train_use_case::TrainConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the sentiment model on a review CSV
    Train(TrainArgs),

    /// Score a single review with the trained model
    Predict(PredictArgs),

    /// Score reviews typed at a prompt, one per line
    Interactive(InteractiveArgs),
}

/// All arguments for the `train` command.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// CSV file with the review dataset
    #[arg(long, default_value = "data/reviews.csv")]
    pub data_path: PathBuf,

    /// Where to write the fitted model
    #[arg(long, default_value = "model.json")]
    pub model_path: PathBuf,

    /// Header of the free-text column
    #[arg(long, default_value = "Review text")]
    pub text_column: String,

    /// Header of the 1–5 rating column
    #[arg(long, default_value = "Ratings")]
    pub rating_column: String,

    /// Fraction of reviews held out for evaluation
    #[arg(long, default_value_t = 0.2)]
    pub test_size: f64,

    /// Seed for the train/test shuffle
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Maximum vocabulary size
    #[arg(long, default_value_t = 5000)]
    pub max_features: usize,

    /// Inverse regularisation strength of the classifier
    #[arg(long, default_value_t = 1.0)]
    pub c: f64,

    /// Iteration cap for the classifier optimiser
    #[arg(long, default_value_t = 1000)]
    pub max_iter: usize,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// The application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            data_path:     a.data_path,
            model_path:    a.model_path,
            text_column:   a.text_column,
            rating_column: a.rating_column,
            test_size:     a.test_size,
            seed:          a.seed,
            max_features:  a.max_features,
            c:             a.c,
            max_iter:      a.max_iter,
            ..TrainConfig::default()
        }
    }
}

/// All arguments for the `predict` command
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// The review text to score
    #[arg(long)]
    pub text: String,

    /// Model produced by `train`
    #[arg(long, default_value = "model.json")]
    pub model_path: PathBuf,
}

/// All arguments for the `interactive` command
#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Model produced by `train`
    #[arg(long, default_value = "model.json")]
    pub model_path: PathBuf,
}
