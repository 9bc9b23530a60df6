// ============================================================
// Layer 5 — ML Layer
// ============================================================
// Everything that turns cleaned text into a sentiment score:
//
//   stop_words.rs  — English stop list
//   vectorizer.rs  — TF-IDF bag-of-words features
//   classifier.rs  — L2 logistic regression
//   pipeline.rs    — vectorizer + classifier, the saved artifact
//   trainer.rs     — fits the pipeline on the training split
//   evaluator.rs   — accuracy / precision / recall on held-out data
//   inferencer.rs  — scores raw user text with a loaded pipeline

pub mod stop_words;

pub mod vectorizer;

pub mod classifier;

pub mod pipeline;

/// Fit the pipeline on the training partition
pub mod trainer;

/// Held-out classification report
pub mod evaluator;

/// Scores raw text with a loaded pipeline
pub mod inferencer;
