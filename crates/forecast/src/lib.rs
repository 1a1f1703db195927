//! Stock forecasting over historical sales.
//!
//! Deterministic, pure computation: the evaluation instant (`now`) is an
//! explicit parameter, never an ambient clock read.

pub mod forecaster;

pub use forecaster::{
    DaysRemaining, ForecastResult, StockForecaster, DEFAULT_FORECAST_DAYS, DEFAULT_WINDOW_DAYS,
    REORDER_POINT_DAYS,
};
