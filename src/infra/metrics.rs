// ============================================================
// Layer 6 — Metrics Logger
// ============================================================
// Appends one row per training run to a CSV file so runs can
// be compared over time.
//
// Output file: <model dir>/metrics.csv
//
// Example:
//   train_size,test_size,vocabulary_size,iterations,accuracy,neg_precision,neg_recall,pos_precision,pos_recall,macro_f1
//   6541,1636,5000,1000,0.912000,0.781000,0.512000,0.925000,0.977000,0.781000
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::sentiment::Sentiment;
use crate::ml::evaluator::ClassificationReport;

const HEADER: &str = "train_size,test_size,vocabulary_size,iterations,accuracy,\
neg_precision,neg_recall,pos_precision,pos_recall,macro_f1";

/// One row of metrics for a single training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    pub train_size:      usize,
    pub test_size:       usize,
    pub vocabulary_size: usize,
    pub iterations:      usize,
    pub report:          ClassificationReport,
}

impl RunMetrics {
    fn csv_row(&self) -> String {
        let neg = self.report.class(Sentiment::Negative);
        let pos = self.report.class(Sentiment::Positive);
        format!(
            "{},{},{},{},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}",
            self.train_size,
            self.test_size,
            self.vocabulary_size,
            self.iterations,
            self.report.accuracy,
            neg.precision,
            neg.recall,
            pos.precision,
            pos.recall,
            self.report.macro_avg.f1,
        )
    }
}

/// Logs run metrics to a CSV file for later analysis.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create a new MetricsLogger in `dir`.
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let csv_path = dir.join("metrics.csv");
        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "{HEADER}")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one run as a new row.
    pub fn log(&self, m: &RunMetrics) -> Result<()> {
        let mut f = OpenOptions::new().append(true).open(&self.csv_path)?;
        writeln!(f, "{}", m.csv_row())?;

        tracing::debug!(
            "Logged run metrics: accuracy={:.4}",
            m.report.accuracy
        );
        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}
