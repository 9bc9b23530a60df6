// ============================================================
// Layer 4 — Review Loader
// ============================================================
// Reads the review dataset from a CSV file using the csv crate.
//
// Expected layout (extra columns are ignored):
//
//   Reviewer Name,Review Title,...,Review text,Ratings
//   Kamal Suresh,Nice product,...,"Nice product, good quality...READ MORE",4
//
// Only two columns matter: the free-text body and the numeric
// rating. Their header names are configurable.
//
// Row handling:
//   - Text cell missing (short row)      → Review with text = None
//   - Rating cell missing or empty       → rating NaN, labelled negative
//   - Rating cell present but not numeric → row skipped with a warning
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::{fs::File, path::{Path, PathBuf}};

use crate::domain::error::SentimentError;
use crate::domain::review::Review;
use crate::domain::traits::ReviewSource;

/// Default header of the review body column
pub const DEFAULT_TEXT_COLUMN: &str = "Review text";

/// Default header of the star rating column
pub const DEFAULT_RATING_COLUMN: &str = "Ratings";

/// Loads reviews from a CSV file.
/// Implements the ReviewSource trait from Layer 3.
pub struct CsvReviewLoader {
    path:          PathBuf,
    text_column:   String,
    rating_column: String,
}

impl CsvReviewLoader {
    /// Create a loader using the default column names
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path:          path.into(),
            text_column:   DEFAULT_TEXT_COLUMN.to_string(),
            rating_column: DEFAULT_RATING_COLUMN.to_string(),
        }
    }

    /// Override the text and rating column headers
    pub fn with_columns(
        mut self,
        text_column:   impl Into<String>,
        rating_column: impl Into<String>,
    ) -> Self {
        self.text_column   = text_column.into();
        self.rating_column = rating_column.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Position of a named column in the header row
    fn column_index(&self, headers: &StringRecord, column: &str) -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| {
                SentimentError::MissingColumn {
                    column: column.to_string(),
                    path:   self.path.clone(),
                }
                .into()
            })
    }
}

impl ReviewSource for CsvReviewLoader {
    fn load_all(&self) -> Result<Vec<Review>> {
        if !self.path.exists() {
            return Err(SentimentError::DatasetNotFound(self.path.clone()).into());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Cannot open '{}'", self.path.display()))?;

        // flexible: a short row should not abort the whole load
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(file);

        let headers = reader
            .headers()
            .with_context(|| format!("Cannot read CSV header of '{}'", self.path.display()))?
            .clone();

        let text_idx   = self.column_index(&headers, &self.text_column)?;
        let rating_idx = self.column_index(&headers, &self.rating_column)?;

        let mut reviews = Vec::new();
        let mut skipped = 0usize;

        for (row, record) in reader.records().enumerate() {
            let record = record
                .with_context(|| format!("Malformed CSV record {} in '{}'", row + 1, self.path.display()))?;

            let rating = match record.get(rating_idx).map(str::trim) {
                None | Some("") => f64::NAN,
                Some(cell) => match cell.parse::<f64>() {
                    Ok(r) => r,
                    Err(_) => {
                        tracing::warn!("Skipping row {}: non-numeric rating {:?}", row + 1, cell);
                        skipped += 1;
                        continue;
                    }
                },
            };

            let text = record.get(text_idx).map(str::to_string);
            reviews.push(Review { text, rating });
        }

        tracing::info!(
            "Loaded {} reviews from '{}' ({} skipped)",
            reviews.len(),
            self.path.display(),
            skipped
        );
        Ok(reviews)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sentiment::Sentiment;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_loads_text_and_rating() {
        let f = csv_file(
            "Reviewer Name,Review text,Ratings\n\
             Asha,\"Good, sturdy shuttle.READ MORE\",5\n\
             Ravi,Broke quickly,1\n",
        );
        let reviews = CsvReviewLoader::new(f.path()).load_all().unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].text.as_deref(), Some("Good, sturdy shuttle.READ MORE"));
        assert_eq!(reviews[0].rating, 5.0);
        assert_eq!(reviews[1].rating, 1.0);
    }

    #[test]
    fn test_custom_columns() {
        let f = csv_file("body,stars\nnice,4\n");
        let reviews = CsvReviewLoader::new(f.path())
            .with_columns("body", "stars")
            .load_all()
            .unwrap();
        assert_eq!(reviews, vec![Review::new("nice", 4.0)]);
    }

    #[test]
    fn test_short_row_has_no_text() {
        let f = csv_file("Ratings,Review text\n3\n");
        let reviews = CsvReviewLoader::new(f.path()).load_all().unwrap();
        assert_eq!(reviews, vec![Review::without_text(3.0)]);
    }

    #[test]
    fn test_non_numeric_rating_is_skipped() {
        let f = csv_file("Review text,Ratings\nok,abc\nfine,4\n");
        let reviews = CsvReviewLoader::new(f.path()).load_all().unwrap();
        assert_eq!(reviews, vec![Review::new("fine", 4.0)]);
    }

    #[test]
    fn test_empty_rating_is_kept_as_negative() {
        let f = csv_file("Review text,Ratings\nfine,4\nhm,\nmeh\n");
        let reviews = CsvReviewLoader::new(f.path()).load_all().unwrap();
        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews[1].text.as_deref(), Some("hm"));
        assert!(reviews[1].rating.is_nan());
        assert!(reviews[2].rating.is_nan());
        assert_eq!(reviews[1].sentiment(), Sentiment::Negative);
        assert_eq!(reviews[2].sentiment(), Sentiment::Negative);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let f = csv_file("Review text,Stars\nok,4\n");
        let err = CsvReviewLoader::new(f.path()).load_all().unwrap_err();
        match err.downcast_ref::<SentimentError>() {
            Some(SentimentError::MissingColumn { column, .. }) => assert_eq!(column, "Ratings"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_dataset_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvReviewLoader::new(dir.path().join("nope.csv"))
            .load_all()
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SentimentError>(),
            Some(SentimentError::DatasetNotFound(_))
        ));
    }
}
