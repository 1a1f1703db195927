//! Sales pattern detection: monthly bucketing and growth classification.

pub mod trend;

pub use trend::{
    GrowthTrend, MonthKey, MonthlyQuantity, SeasonalPattern, TrendDetector, TrendResult,
    DEFAULT_GROWTH_THRESHOLD_PCT, SEASONAL_MIN_MONTHS,
};
