//! Expense anomaly detection: per-category statistical outlier flagging.

pub mod detector;

pub use detector::{AnomalyDetector, AnomalyResult, FlaggedExpense, DEFAULT_SIGMA_THRESHOLD};
