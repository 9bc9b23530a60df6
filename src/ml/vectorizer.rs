// ============================================================
// Layer 5 — TF-IDF Vectorizer
// ============================================================
// Turns cleaned review text into a sparse, L2-normalised
// TF-IDF feature vector over a fixed vocabulary.
//
// Fitting (training partition only):
//   1. Tokenise: maximal runs of word characters, length >= 2
//   2. Drop English stop words
//   3. Keep the `max_features` terms with the highest total
//      count across the corpus (ties broken alphabetically)
//   4. Assign column indices in alphabetical order
//   5. idf(t) = ln((1 + n) / (1 + df(t))) + 1
//
// Transforming:
//   weight(t) = count(t in doc) * idf(t), then divide the row
//   by its L2 norm. Unknown terms are ignored; a document with
//   no known terms becomes the empty vector.
//
// Reference: Manning et al. (2008) Introduction to IR, §6.2

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::domain::error::SentimentError;
use crate::ml::stop_words::is_stop_word;

/// A sparse row: (column index, value) pairs sorted by index.
pub type SparseVector = Vec<(usize, f64)>;

/// Vectorizer hyperparameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Upper bound on vocabulary size
    pub max_features: usize,

    /// Exclude English stop words from the vocabulary
    pub remove_stop_words: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            max_features:      5000,
            remove_stop_words: true,
        }
    }
}

/// A fitted TF-IDF vectorizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    config:     VectorizerConfig,
    /// term → column index
    vocabulary: BTreeMap<String, usize>,
    /// idf weight per column
    idf:        Vec<f64>,
}

impl TfidfVectorizer {
    /// Learn vocabulary and idf weights from `documents`.
    pub fn fit<S: AsRef<str>>(
        config:    VectorizerConfig,
        documents: &[S],
    ) -> Result<Self, SentimentError> {
        let n_documents = documents.len();

        // ── Count term and document frequencies ──────────────────────────────
        let mut term_count: HashMap<String, usize> = HashMap::new();
        let mut doc_freq:   HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let tokens = tokenize(doc.as_ref(), config.remove_stop_words);
            let mut seen = HashSet::new();
            for token in tokens {
                if seen.insert(token.clone()) {
                    *doc_freq.entry(token.clone()).or_insert(0) += 1;
                }
                *term_count.entry(token).or_insert(0) += 1;
            }
        }

        // ── Cap the vocabulary ────────────────────────────────────────────────
        let mut ranked: Vec<(String, usize)> = term_count.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(config.max_features);

        if ranked.is_empty() {
            return Err(SentimentError::EmptyVocabulary);
        }

        let mut terms: Vec<String> = ranked.into_iter().map(|(t, _)| t).collect();
        terms.sort();

        // ── Smooth idf per kept term ──────────────────────────────────────────
        let n = n_documents as f64;
        let idf = terms
            .iter()
            .map(|t| {
                let df = doc_freq.get(t).copied().unwrap_or(0) as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t, i))
            .collect();

        Ok(Self { config, vocabulary, idf })
    }

    /// Map one document to its normalised TF-IDF row.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokenize(document, self.config.remove_stop_words) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut row: SparseVector = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();

        let norm = row.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, v) in &mut row {
                *v /= norm;
            }
        }
        row
    }

    pub fn transform_all<S: AsRef<str>>(&self, documents: &[S]) -> Vec<SparseVector> {
        documents.iter().map(|d| self.transform(d.as_ref())).collect()
    }

    /// Number of columns in every transformed row
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.index_of(term).map(|i| self.idf[i])
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.keys().map(String::as_str)
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }
}

/// Lowercased word tokens of at least two characters.
/// A word character is alphanumeric or an underscore.
pub fn tokenize(text: &str, remove_stop_words: bool) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_lowercase)
        .filter(|t| !(remove_stop_words && is_stop_word(t)))
        .collect()
}
