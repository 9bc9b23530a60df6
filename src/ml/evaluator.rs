// ============================================================
// Layer 5 — Evaluator
// ============================================================
// Scores a fitted pipeline on the held-out partition and
// builds a classification report:
//
//   precision = TP / (TP + FP)     (0 when nothing was predicted)
//   recall    = TP / (TP + FN)     (0 when the class is absent)
//   f1        = 2PR / (P + R)      (0 when P + R = 0)
//
// Macro average: unweighted mean over both classes.
// Weighted average: mean weighted by class support.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::data::dataset::ReviewDataset;
use crate::domain::sentiment::Sentiment;
use crate::ml::pipeline::SentimentPipeline;

/// Metrics for one class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall:    f64,
    pub f1:        f64,
    pub support:   usize,
}

/// Held-out evaluation of a binary classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub accuracy:     f64,
    /// Indexed by `Sentiment::index()`
    pub per_class:    [ClassMetrics; 2],
    pub macro_avg:    ClassMetrics,
    pub weighted_avg: ClassMetrics,
}

impl ClassificationReport {
    /// Build a report from parallel truth / prediction slices.
    pub fn from_predictions(truth: &[Sentiment], predicted: &[Sentiment]) -> Self {
        let total = truth.len();

        // confusion[actual][predicted]
        let mut confusion = [[0usize; 2]; 2];
        for (&t, &p) in truth.iter().zip(predicted) {
            confusion[t.index()][p.index()] += 1;
        }

        let correct  = confusion[0][0] + confusion[1][1];
        let accuracy = ratio(correct, total);

        let per_class = Sentiment::ALL.map(|class| {
            let c         = class.index();
            let other     = 1 - c;
            let tp        = confusion[c][c];
            let fp        = confusion[other][c];
            let fn_       = confusion[c][other];
            let precision = ratio(tp, tp + fp);
            let recall    = ratio(tp, tp + fn_);
            ClassMetrics {
                precision,
                recall,
                f1: f1(precision, recall),
                support: tp + fn_,
            }
        });

        let macro_avg = ClassMetrics {
            precision: (per_class[0].precision + per_class[1].precision) / 2.0,
            recall:    (per_class[0].recall + per_class[1].recall) / 2.0,
            f1:        (per_class[0].f1 + per_class[1].f1) / 2.0,
            support:   total,
        };

        let weight = |f: fn(&ClassMetrics) -> f64| -> f64 {
            if total == 0 {
                return 0.0;
            }
            per_class
                .iter()
                .map(|m| f(m) * m.support as f64)
                .sum::<f64>()
                / total as f64
        };
        let weighted_avg = ClassMetrics {
            precision: weight(|m| m.precision),
            recall:    weight(|m| m.recall),
            f1:        weight(|m| m.f1),
            support:   total,
        };

        Self { accuracy, per_class, macro_avg, weighted_avg }
    }

    pub fn class(&self, class: Sentiment) -> &ClassMetrics {
        &self.per_class[class.index()]
    }

    pub fn support(&self) -> usize {
        self.macro_avg.support
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>12} {:>9} {:>9} {:>9} {:>9}", "", "precision", "recall", "f1-score", "support")?;
        writeln!(f)?;
        for class in Sentiment::ALL {
            let m = self.class(class);
            writeln!(
                f,
                "{:>12} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                class.to_string(), m.precision, m.recall, m.f1, m.support
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{:>12} {:>9} {:>9} {:>9.2} {:>9}", "accuracy", "", "", self.accuracy, self.support())?;
        for (name, m) in [("macro avg", &self.macro_avg), ("weighted avg", &self.weighted_avg)] {
            writeln!(
                f,
                "{:>12} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                name, m.precision, m.recall, m.f1, m.support
            )?;
        }
        Ok(())
    }
}

/// Predict every held-out sample and report.
pub fn evaluate(pipeline: &SentimentPipeline, test: &ReviewDataset) -> ClassificationReport {
    let predicted: Vec<Sentiment> = test
        .samples()
        .iter()
        .map(|s| pipeline.predict(&s.cleaned_text))
        .collect();
    ClassificationReport::from_predictions(&test.labels(), &predicted)
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

fn f1(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sentiment::Sentiment::{Negative as N, Positive as P};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_known_confusion() {
        // TP(pos)=3, FN(pos)=1, FP(pos)=1, TN=1
        let truth     = [P, P, P, P, N, N];
        let predicted = [P, P, P, N, P, N];
        let r = ClassificationReport::from_predictions(&truth, &predicted);

        assert!(close(r.accuracy, 4.0 / 6.0));
        let pos = r.class(P);
        assert!(close(pos.precision, 0.75));
        assert!(close(pos.recall, 0.75));
        assert_eq!(pos.support, 4);
        let neg = r.class(N);
        assert!(close(neg.precision, 0.5));
        assert!(close(neg.recall, 0.5));
        assert_eq!(neg.support, 2);
        assert!(close(r.macro_avg.f1, 0.625));
        assert!(close(r.weighted_avg.recall, (0.75 * 4.0 + 0.5 * 2.0) / 6.0));
    }

    #[test]
    fn test_never_predicted_class_has_zero_precision() {
        let r = ClassificationReport::from_predictions(&[P, N], &[P, P]);
        assert_eq!(r.class(N).precision, 0.0);
        assert_eq!(r.class(N).f1, 0.0);
        assert!(close(r.accuracy, 0.5));
    }

    #[test]
    fn test_empty_report() {
        let r = ClassificationReport::from_predictions(&[], &[]);
        assert_eq!(r.accuracy, 0.0);
        assert_eq!(r.support(), 0);
    }

    #[test]
    fn test_display_lists_both_classes() {
        let text = ClassificationReport::from_predictions(&[P, N], &[P, N]).to_string();
        assert!(text.contains("Positive"));
        assert!(text.contains("Negative"));
        assert!(text.contains("accuracy"));
        assert!(text.contains("weighted avg"));
    }
}
