use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use shopsight_core::ProductId;
use shopsight_records::{Product, SaleRecord};

/// Trailing window for velocity computation, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Horizon for the predicted-stock projection, in days.
pub const DEFAULT_FORECAST_DAYS: u32 = 30;

/// Below this many days of remaining stock a product needs reordering.
pub const REORDER_POINT_DAYS: f64 = 14.0;

/// Reorder sizing: cover this many days of sales at current velocity.
const REORDER_COVERAGE_DAYS: f64 = 30.0;

/// Reorder sizing: safety stock on top of coverage (1.5 = +50%).
const SAFETY_STOCK_FACTOR: f64 = 1.5;

/// Days of stock remaining at the current sales velocity.
///
/// `Unknown` is reported when the product has no stock on hand; there is
/// nothing to run out of, so the ratio is undefined. An explicit sentinel
/// keeps tests precise instead of leaning on NaN/infinity propagation.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum DaysRemaining {
    Known(f64),
    Unknown,
}

impl DaysRemaining {
    pub fn is_known(&self) -> bool {
        matches!(self, DaysRemaining::Known(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            DaysRemaining::Known(d) => Some(*d),
            DaysRemaining::Unknown => None,
        }
    }

    /// Whole-day value for display (40/3 ≈ 13.33 shows as 13).
    pub fn rounded(&self) -> Option<i64> {
        self.value().map(|d| d.round() as i64)
    }
}

/// Per-product stock forecast at a fixed evaluation instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub product_id: ProductId,
    /// Average units sold per day over the trailing window. Never negative.
    pub sales_velocity: f64,
    pub days_remaining: DaysRemaining,
    /// Projected stock after `forecast_days`, floored at 0.
    pub predicted_stock: f64,
    pub needs_reorder: bool,
    pub reorder_quantity: i64,
}

/// Deterministic stock forecaster.
///
/// Model:
/// - Velocity: units sold in `[now - window_days, now)` divided by the window.
/// - Days remaining: stock over velocity, with the divisor floored at 1
///   unit/day so a stocked but dormant product reports its stock count.
/// - Predicted stock: linear drawdown over `forecast_days`, **without** the
///   velocity floor; a zero-velocity product predicts unchanged stock. The
///   asymmetry with days-remaining is deliberate and load-bearing.
#[derive(Debug, Copy, Clone)]
pub struct StockForecaster {
    window_days: u32,
    forecast_days: u32,
}

impl StockForecaster {
    pub fn new() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            forecast_days: DEFAULT_FORECAST_DAYS,
        }
    }

    /// Trailing velocity window. Clamped to at least one day.
    pub fn with_window_days(mut self, window_days: u32) -> Self {
        self.window_days = window_days.max(1);
        self
    }

    /// Projection horizon for predicted stock.
    pub fn with_forecast_days(mut self, forecast_days: u32) -> Self {
        self.forecast_days = forecast_days;
        self
    }

    /// Average units of `product_id` sold per day over the trailing window.
    ///
    /// Sales with no parseable date never qualify. Returns 0.0 when no
    /// qualifying line items exist.
    pub fn sales_velocity(
        &self,
        product_id: ProductId,
        sales: &[SaleRecord],
        now: DateTime<Utc>,
    ) -> f64 {
        let window_start = now - Duration::days(i64::from(self.window_days));
        let mut total: i64 = 0;
        for sale in sales {
            let Some(date) = sale.date else { continue };
            if date < window_start || date >= now {
                continue;
            }
            for item in &sale.items {
                if item.product_id == product_id {
                    total += item.quantity;
                }
            }
        }
        total as f64 / f64::from(self.window_days)
    }

    /// Forecast a single product at the given evaluation instant.
    pub fn forecast(
        &self,
        product: &Product,
        sales: &[SaleRecord],
        now: DateTime<Utc>,
    ) -> ForecastResult {
        let velocity = self.sales_velocity(product.id, sales, now);

        let days_remaining = if product.current_stock > 0 {
            DaysRemaining::Known(product.current_stock as f64 / velocity.max(1.0))
        } else {
            DaysRemaining::Unknown
        };

        let predicted_stock =
            (product.current_stock as f64 - velocity * f64::from(self.forecast_days)).max(0.0);

        let needs_reorder =
            matches!(days_remaining, DaysRemaining::Known(d) if d < REORDER_POINT_DAYS);

        let reorder_quantity =
            (velocity * REORDER_COVERAGE_DAYS * SAFETY_STOCK_FACTOR).ceil() as i64;

        ForecastResult {
            product_id: product.id,
            sales_velocity: velocity,
            days_remaining,
            predicted_stock,
            needs_reorder,
            reorder_quantity,
        }
    }

    /// Forecast every product, preserving input order.
    pub fn forecast_all(
        &self,
        products: &[Product],
        sales: &[SaleRecord],
        now: DateTime<Utc>,
    ) -> Vec<ForecastResult> {
        products
            .iter()
            .map(|p| self.forecast(p, sales, now))
            .collect()
    }
}

impl Default for StockForecaster {
    fn default() -> Self {
        Self::new()
    }
}
