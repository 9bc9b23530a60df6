// ============================================================
// Layer 5 — Logistic Regression
// ============================================================
// Binary L2-regularised logistic regression over sparse rows.
//
// Objective (intercept b is not penalised):
//
//   J(w, b) = C * Σ_i logloss(y_i, σ(w·x_i + b)) + ½‖w‖²
//
// Dividing by n*C gives the same minimiser with a bounded
// gradient, which is what we descend:
//
//   f(w, b) = (1/n) Σ_i logloss_i + (λ/2)‖w‖²,   λ = 1 / (n C)
//   ∇_w f   = (1/n) Σ_i (p_i - y_i) x_i + λ w
//   ∂_b f   = (1/n) Σ_i (p_i - y_i)
//
// Optimiser: Nesterov-accelerated full-batch gradient descent
// with step 1/L, where L = ¼ max_i(‖x_i‖² + 1) + λ bounds the
// curvature. Stops when ‖∇f‖ < tolerance or after max_iter.
// Starts from zero, so fitting is fully deterministic.
//
// Reference: Nesterov (1983); Bishop (2006) PRML §4.3.2

use serde::{Deserialize, Serialize};

use crate::domain::error::SentimentError;
use crate::domain::sentiment::Sentiment;
use crate::ml::vectorizer::SparseVector;

/// Optimiser and regularisation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticConfig {
    /// Inverse regularisation strength; smaller = stronger penalty
    pub c:         f64,
    pub max_iter:  usize,
    /// Gradient-norm stopping threshold
    pub tolerance: f64,
}

impl Default for LogisticConfig {
    fn default() -> Self {
        Self {
            c:         1.0,
            max_iter:  1000,
            tolerance: 1e-6,
        }
    }
}

impl LogisticConfig {
    /// Reject settings that cannot produce finite weights.
    pub fn validate(&self) -> Result<(), SentimentError> {
        if !(self.c.is_finite() && self.c > 0.0) {
            return Err(SentimentError::InvalidParameter {
                name:   "c",
                value:  self.c.to_string(),
                reason: "must be a finite number greater than 0",
            });
        }
        if self.max_iter == 0 {
            return Err(SentimentError::InvalidParameter {
                name:   "max_iter",
                value:  self.max_iter.to_string(),
                reason: "must be at least 1",
            });
        }
        if !(self.tolerance >= 0.0) {
            return Err(SentimentError::InvalidParameter {
                name:   "tolerance",
                value:  self.tolerance.to_string(),
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}

/// A fitted binary logistic regression model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    coefficients: Vec<f64>,
    intercept:    f64,
    /// Iterations actually run during fitting
    n_iter:       usize,
}

impl LogisticRegression {
    /// Fit on `rows` (each with column indices < `n_features`) and `labels`.
    pub fn fit(
        config:     &LogisticConfig,
        rows:       &[SparseVector],
        labels:     &[Sentiment],
        n_features: usize,
    ) -> Result<Self, SentimentError> {
        config.validate()?;
        if rows.is_empty() || rows.len() != labels.len() {
            return Err(SentimentError::EmptyDataset);
        }
        if let Some(only) = single_class(labels) {
            return Err(SentimentError::SingleClass(only.to_string()));
        }

        let n       = rows.len() as f64;
        let lambda  = 1.0 / (n * config.c);
        let targets: Vec<f64> = labels.iter().map(|s| s.target()).collect();

        let max_sq_norm = rows
            .iter()
            .map(|r| r.iter().map(|(_, v)| v * v).sum::<f64>())
            .fold(0.0f64, f64::max);
        let step = 1.0 / (0.25 * (max_sq_norm + 1.0) + lambda);

        // θ = (w, b); θ_prev holds the previous iterate for momentum
        let mut w      = vec![0.0f64; n_features];
        let mut b      = 0.0f64;
        let mut w_prev = w.clone();
        let mut b_prev = b;

        let mut look_w = vec![0.0f64; n_features];
        let mut grad_w = vec![0.0f64; n_features];
        let mut n_iter = 0usize;

        for k in 0..config.max_iter {
            n_iter = k + 1;

            // ── Look-ahead point ─────────────────────────────────────────────
            let momentum = k as f64 / (k as f64 + 3.0);
            for j in 0..n_features {
                look_w[j] = w[j] + momentum * (w[j] - w_prev[j]);
            }
            let look_b = b + momentum * (b - b_prev);

            // ── Gradient at the look-ahead point ─────────────────────────────
            grad_w.iter_mut().for_each(|g| *g = 0.0);
            let mut grad_b = 0.0;
            for (row, &y) in rows.iter().zip(&targets) {
                let residual = (sigmoid(dot(&look_w, row) + look_b) - y) / n;
                for &(j, v) in row {
                    grad_w[j] += residual * v;
                }
                grad_b += residual;
            }
            for j in 0..n_features {
                grad_w[j] += lambda * look_w[j];
            }

            let grad_norm = (grad_w.iter().map(|g| g * g).sum::<f64>() + grad_b * grad_b).sqrt();
            if grad_norm < config.tolerance {
                w.copy_from_slice(&look_w);
                b = look_b;
                break;
            }

            // ── Step ─────────────────────────────────────────────────────────
            w_prev.copy_from_slice(&w);
            b_prev = b;
            for j in 0..n_features {
                w[j] = look_w[j] - step * grad_w[j];
            }
            b = look_b - step * grad_b;
        }

        tracing::debug!("Logistic regression finished after {} iterations", n_iter);

        Ok(Self {
            coefficients: w,
            intercept:    b,
            n_iter,
        })
    }

    /// `[p_negative, p_positive]` for one row
    pub fn predict_proba(&self, row: &SparseVector) -> [f64; 2] {
        let p = sigmoid(self.decision_function(row));
        [1.0 - p, p]
    }

    pub fn predict(&self, row: &SparseVector) -> Sentiment {
        let [neg, pos] = self.predict_proba(row);
        if pos >= neg {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }

    /// Raw score w·x + b
    pub fn decision_function(&self, row: &SparseVector) -> f64 {
        dot(&self.coefficients, row) + self.intercept
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn n_iter(&self) -> usize {
        self.n_iter
    }
}

/// Numerically stable logistic function
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

fn dot(weights: &[f64], row: &SparseVector) -> f64 {
    row.iter()
        .map(|&(j, v)| weights.get(j).copied().unwrap_or(0.0) * v)
        .sum()
}

/// The class shared by every label, if only one is present
fn single_class(labels: &[Sentiment]) -> Option<Sentiment> {
    let first = *labels.first()?;
    labels.iter().all(|&l| l == first).then_some(first)
}
