// ============================================================
// Layer 1 — Interactive Front End
// ============================================================
// A terminal prompt: one review per line in, one verdict out.
// Reads from any BufRead and writes to any Write so the loop
// can be driven from tests.
//
//   > Great shuttles, very durable
//   😊 Positive Feedback | Confidence: 97.1%
//
// Blank lines get a warning; "quit", "exit" or EOF end the loop.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::application::predict_use_case::PredictUseCase;
use crate::data::preprocessor::is_separator;
use crate::domain::error::SentimentError;
use crate::domain::sentiment::{Prediction, Sentiment};

const HEADER: &str = "🏸 Review Sentiment Pro\nAnalyze Yonex Mavis 350 reviews. Type 'quit' to leave.";

/// One result line as shown to the user
pub fn render(prediction: &Prediction) -> String {
    let face = match prediction.sentiment {
        Sentiment::Positive => "😊",
        Sentiment::Negative => "😞",
    };
    format!(
        "{} {} Feedback | Confidence: {:.1}%",
        face,
        prediction.sentiment,
        prediction.confidence_percent()
    )
}

/// Run the prompt loop until quit or end of input.
pub fn run_session<R: BufRead, W: Write>(
    use_case: &PredictUseCase,
    input:    R,
    mut out:  W,
) -> Result<()> {
    writeln!(out, "{HEADER}")?;

    if let Err(e) = use_case.warm_up() {
        if let Some(SentimentError::ModelUnavailable(_)) = e.downcast_ref::<SentimentError>() {
            writeln!(out, "⚠️ Model not found! Please run `train` first.")?;
            return Ok(());
        }
        return Err(e);
    }

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let trimmed = line.trim_matches(is_separator);
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            break;
        }

        match use_case.analyze(&line) {
            Ok(prediction) => writeln!(out, "{}", render(&prediction))?,
            Err(e) => match e.downcast_ref::<SentimentError>() {
                Some(SentimentError::EmptyInput) => writeln!(out, "Please enter some text to analyze.")?,
                _ => return Err(e),
            },
        }
    }

    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::artifact::ArtifactStore;
    use crate::ml::classifier::LogisticConfig;
    use crate::ml::pipeline::SentimentPipeline;
    use crate::ml::vectorizer::VectorizerConfig;

    fn session(use_case: &PredictUseCase, input: &str) -> String {
        let mut out = Vec::new();
        run_session(use_case, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render() {
        let p = Prediction::from_probabilities([0.25, 0.75], "good");
        assert_eq!(render(&p), "😊 Positive Feedback | Confidence: 75.0%");
        let p = Prediction::from_probabilities([0.9, 0.1], "bad");
        assert_eq!(render(&p), "😞 Negative Feedback | Confidence: 90.0%");
    }

    #[test]
    fn test_missing_model_message() {
        let dir = tempfile::tempdir().unwrap();
        let uc  = PredictUseCase::new(dir.path().join("model.json"));
        let out = session(&uc, "great\n");
        assert!(out.contains("Model not found"));
        assert!(!out.contains("Feedback"));
    }

    #[test]
    fn test_session_scores_warns_and_quits() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let pipeline = SentimentPipeline::fit(
            VectorizerConfig::default(),
            &LogisticConfig::default(),
            &["fantastic shuttle", "fantastic speed", "shredded shuttle", "shredded cork"][..],
            &[Sentiment::Positive, Sentiment::Positive, Sentiment::Negative, Sentiment::Negative],
        )
        .unwrap();
        ArtifactStore::new(&path).save(&pipeline).unwrap();

        let uc  = PredictUseCase::new(&path);
        let out = session(&uc, "Fantastic!\n   \nshredded\nquit\nfantastic\n");
        assert!(out.contains("Positive Feedback"));
        assert!(out.contains("Please enter some text to analyze."));
        assert!(out.contains("Negative Feedback"));
        assert_eq!(out.matches("Feedback").count(), 2);
    }
}
