// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer programs against these traits so the
// concrete loader or classifier can be swapped freely:
//
//   - CsvReviewLoader implements ReviewSource
//   - Inferencer      implements SentimentClassifier
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::review::Review;
use crate::domain::sentiment::Prediction;

// ─── ReviewSource ─────────────────────────────────────────────────────────────
/// Any component that can produce raw reviews.
pub trait ReviewSource {
    /// Load every review available from this source.
    fn load_all(&self) -> Result<Vec<Review>>;
}

// ─── SentimentClassifier ──────────────────────────────────────────────────────
/// Any component that can score free text.
pub trait SentimentClassifier {
    /// Score raw, user-entered text.
    /// Blank input must be rejected rather than scored.
    fn classify(&self, text: &str) -> Result<Prediction>;
}
