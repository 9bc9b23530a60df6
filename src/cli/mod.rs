// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with clap.
// All business logic is delegated to Layer 2 (application).
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

/// Terminal front end for the `interactive` command
pub mod interactive;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InteractiveArgs, PredictArgs, TrainArgs};

use crate::application::{
    predict_use_case::PredictUseCase,
    train_use_case::{TrainOutcome, TrainUseCase},
};
use crate::domain::error::SentimentError;

#[derive(Parser, Debug)]
#[command(
    name = "shuttle-sentiment",
    version,
    about = "Train a review sentiment classifier, then score new reviews."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args)       => run_train(args),
            Commands::Predict(args)     => run_predict(args),
            Commands::Interactive(args) => run_interactive(args),
        }
    }
}

fn run_train(args: TrainArgs) -> Result<()> {
    let use_case = TrainUseCase::new(args.into());

    match use_case.execute()? {
        TrainOutcome::Trained(r) => {
            println!("Accuracy: {:.4}", r.report.accuracy);
            println!("Classification Report:");
            println!("{}", r.report);
            println!(
                "Trained on {} reviews ({} held out), vocabulary {}.",
                r.train_size, r.test_size, r.vocabulary_size
            );
            println!("Model saved to '{}'.", r.model_path.display());
        }
        TrainOutcome::DatasetMissing(path) => {
            eprintln!("Error: Data file not found at '{}'", path.display());
        }
    }
    Ok(())
}

fn run_predict(args: PredictArgs) -> Result<()> {
    let use_case = PredictUseCase::new(args.model_path);

    match use_case.analyze(&args.text) {
        Ok(prediction) => {
            println!("{}", interactive::render(&prediction));
            Ok(())
        }
        Err(e) => match e.downcast_ref::<SentimentError>() {
            Some(SentimentError::EmptyInput | SentimentError::ModelUnavailable(_)) => {
                eprintln!("⚠️ {e}");
                Ok(())
            }
            _ => Err(e),
        },
    }
}

fn run_interactive(args: InteractiveArgs) -> Result<()> {
    let use_case = PredictUseCase::new(args.model_path);
    let stdin    = std::io::stdin();
    interactive::run_session(&use_case, stdin.lock(), std::io::stdout())
}
