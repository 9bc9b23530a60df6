// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the CSV file and the feature extractor:
//
//   reviews.csv
//       │
//       ▼
//   CsvReviewLoader   → reads rows, yields raw Reviews
//       │
//       ▼
//   Preprocessor      → normalises text
//       │
//       ▼
//   ReviewDataset     → cleaned text + derived labels
//       │
//       ▼
//   split_train_test  → seeded shuffle, train / held-out
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Loads reviews from a CSV file using the csv crate
pub mod loader;

/// Text normalisation shared by training and inference
pub mod preprocessor;

/// In-memory labelled dataset
pub mod dataset;

/// Seeded train/test split
pub mod splitter;
