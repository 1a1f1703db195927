use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopsight_records::ExpenseRecord;

/// Sigma multiple beyond which an expense counts as anomalous.
pub const DEFAULT_SIGMA_THRESHOLD: f64 = 2.0;

/// An expense flagged as a statistical outlier within its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedExpense {
    pub date: Option<DateTime<Utc>>,
    pub amount: f64,
    pub description: String,
    /// `(amount - mean) / mean * 100`. Not guarded against a zero mean: the
    /// value may be non-finite.
    pub deviation_percent: f64,
}

/// Per-category anomaly statistics and flagged outliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyResult {
    pub category: String,
    pub mean: f64,
    /// Population standard deviation (divide by N, not N-1).
    pub std_deviation: f64,
    pub flagged: Vec<FlaggedExpense>,
}

/// Deterministic expense anomaly detector.
///
/// Model:
/// - Group expenses by category.
/// - Per category, compute the arithmetic mean and the population standard
///   deviation of the amounts.
/// - Flag an expense iff `|amount - mean| > sigma_threshold * std_deviation`.
///
/// With very small categories a single extreme outlier inflates its own
/// category's deviation enough that the threshold fails to flag it
/// (self-masking). That is expected behavior at a fixed sigma rule.
#[derive(Debug, Copy, Clone)]
pub struct AnomalyDetector {
    sigma_threshold: f64,
}

impl AnomalyDetector {
    pub fn new() -> Self {
        Self {
            sigma_threshold: DEFAULT_SIGMA_THRESHOLD,
        }
    }

    pub fn with_sigma_threshold(mut self, sigma_threshold: f64) -> Self {
        self.sigma_threshold = sigma_threshold;
        self
    }

    /// Detect outliers per category. Categories are reported in first-seen
    /// order; every category appears, flagged or not, so callers can render
    /// the mean/deviation context.
    pub fn detect(&self, expenses: &[ExpenseRecord]) -> Vec<AnomalyResult> {
        let mut order: Vec<&str> = Vec::new();
        let mut groups: HashMap<&str, Vec<&ExpenseRecord>> = HashMap::new();
        for expense in expenses {
            let category = expense.category.as_str();
            groups
                .entry(category)
                .or_insert_with(|| {
                    order.push(category);
                    Vec::new()
                })
                .push(expense);
        }

        order
            .into_iter()
            .map(|category| {
                let group = &groups[category];
                let amounts: Vec<f64> = group.iter().map(|e| e.amount).collect();
                let mean = mean(&amounts);
                let std = stddev_population(&amounts, mean);
                let threshold = self.sigma_threshold * std;

                let flagged = group
                    .iter()
                    .filter(|e| (e.amount - mean).abs() > threshold)
                    .map(|e| FlaggedExpense {
                        date: e.date,
                        amount: e.amount,
                        description: e.description.clone(),
                        deviation_percent: (e.amount - mean) / mean * 100.0,
                    })
                    .collect();

                AnomalyResult {
                    category: category.to_string(),
                    mean,
                    std_deviation: std,
                    flagged,
                }
            })
            .collect()
    }
}

impl Default for AnomalyDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / (xs.len() as f64)
}

/// Population standard deviation (n), deterministic.
fn stddev_population(xs: &[f64], mean: f64) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    let var = xs
        .iter()
        .map(|x| {
            let d = x - mean;
            d * d
        })
        .sum::<f64>()
        / (xs.len() as f64);
    var.sqrt()
}
