// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal:
// training a model, or scoring a review with it.
//
// Rules for this layer:
//   - No vectorizer or classifier maths here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination

// The training workflow
pub mod train_use_case;

// The scoring workflow with the lazily loaded model
pub mod predict_use_case;
