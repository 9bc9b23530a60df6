// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Filesystem concerns shared by the use cases:
//
//   artifact.rs — saves/loads the fitted pipeline as one JSON file
//   metrics.rs  — appends per-run evaluation metrics to a CSV

/// Single-file pipeline persistence
pub mod artifact;

/// Training-run metrics CSV logger
pub mod metrics;
