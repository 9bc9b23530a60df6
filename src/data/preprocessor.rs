// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Normalises raw review text before vectorisation.
//
// Flipkart reviews are scraped with a trailing "READ MORE"
// link label, emoji, digits and punctuation. The vectorizer
// vocabulary is fitted on text cleaned exactly this way, so
// training and inference must share this one function.
//
// Cleaning steps (applied in order; the order matters):
//   1. Lowercase
//   2. Remove every "read more" substring
//   3. Drop anything that is not an ASCII letter or whitespace
//   4. Collapse whitespace runs to a single space and trim
//      (U+001C–U+001F count as whitespace)
//   5. Repeat 2–4 while "read more" is still present
//
// Non-ASCII letters are dropped, not transliterated.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

/// Marketing boilerplate appended to every scraped review.
const BOILERPLATE: &str = "read more";

pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Clean one review body.
    pub fn clean(&self, text: &str) -> String {
        // ── Step 1: Lowercase ─────────────────────────────────────────────────
        let lowered = text.to_lowercase();

        // ── Step 2: Strip boilerplate ─────────────────────────────────────────
        let without_boilerplate = lowered.replace(BOILERPLATE, "");

        // ── Step 3 + 4: Keep letters, collapse whitespace ─────────────────────
        let mut out = letters_single_spaced(&without_boilerplate);

        // ── Step 5: Boilerplate re-formed by steps 2–4 ────────────────────────
        // "readread more more" or "read1 more" only spell the phrase once
        // the earlier steps have run. Each pass strictly shortens the string.
        while out.contains(BOILERPLATE) {
            out = letters_single_spaced(&out.replace(BOILERPLATE, ""));
        }
        out
    }

    /// Clean a review whose text may be missing.
    /// Missing text yields an empty string instead of an error.
    pub fn clean_optional(&self, text: Option<&str>) -> String {
        text.map(|t| self.clean(t)).unwrap_or_default()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep ASCII letters, turn whitespace runs into one space, trim.
/// Dropped characters vanish without leaving a gap, so
/// "great!!product" becomes "greatproduct".
fn letters_single_spaced(text: &str) -> String {
    let mut out        = String::with_capacity(text.len());
    let mut last_space = true;

    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            out.push(c);
            last_space = false;
        } else if is_separator(c) {
            if !last_space {
                out.push(' ');
            }
            last_space = true;
        }
    }

    // At most one trailing space can remain
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Whitespace as the cleaning rules see it: Unicode white space
/// plus the ASCII file/group/record/unit separators U+001C–U+001F.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// True when `text` has no characters besides separators.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_separator)
}

/// Shorthand for `Preprocessor::new().clean(text)`.
pub fn normalize(text: &str) -> String {
    Preprocessor::new().clean(text)
}

/// Shorthand for `Preprocessor::new().clean_optional(text)`.
pub fn normalize_optional(text: Option<&str>) -> String {
    Preprocessor::new().clean_optional(text)
}
