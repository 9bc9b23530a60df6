// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits that define the core
// concepts of the system: a review, its sentiment label, a
// prediction, and the errors a user can run into.
//
// Rules for this layer:
//   - NO file I/O
//   - NO vectorizer or classifier maths
//   - Only plain Rust types and traits
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// Raw and labelled review records
pub mod review;

// The binary sentiment label and the rating → label rule
pub mod sentiment;

// Error taxonomy surfaced to the user
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
