//! Pipeline facade: raw records in, insights out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use shopsight_anomaly::{AnomalyDetector, AnomalyResult};
use shopsight_forecast::{ForecastResult, StockForecaster};
use shopsight_records::{
    normalize_expenses, normalize_products, normalize_sales, RawExpense, RawProduct, RawSale,
};
use shopsight_trends::{TrendDetector, TrendResult};

use crate::financial::financial_recommendations;
use crate::inventory::inventory_recommendations;
use crate::recommendation::Recommendation;
use crate::sales::{bundle_recommendations, sales_recommendations};

/// Everything the dashboard renders, recomputed on each invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub forecasts: Vec<ForecastResult>,
    pub trends: Vec<TrendResult>,
    pub anomalies: Vec<AnomalyResult>,
    /// Ordered: inventory, sales trends, bundles, financial.
    pub recommendations: Vec<Recommendation>,
}

/// Run the full pipeline with default detector settings.
///
/// Pure with respect to its inputs: `now` is the explicit evaluation
/// instant, no collection is mutated, and repeated calls with the same
/// arguments produce the same insights.
pub fn generate_insights(
    raw_products: &[RawProduct],
    raw_sales: &[RawSale],
    raw_expenses: &[RawExpense],
    now: DateTime<Utc>,
) -> Insights {
    let products = normalize_products(raw_products);
    let sales = normalize_sales(raw_sales);
    let expenses = normalize_expenses(raw_expenses);

    let forecasts = StockForecaster::new().forecast_all(&products, &sales, now);
    let trends = TrendDetector::new().detect_all(&sales);
    let anomalies = AnomalyDetector::new().detect(&expenses);

    let mut recommendations = inventory_recommendations(&forecasts, &products);
    recommendations.extend(sales_recommendations(&trends, &products));
    recommendations.extend(bundle_recommendations(&sales, &products));
    recommendations.extend(financial_recommendations(&anomalies, &products));

    debug!(
        products = products.len(),
        sales = sales.len(),
        expenses = expenses.len(),
        forecasts = forecasts.len(),
        trends = trends.len(),
        anomaly_categories = anomalies.len(),
        recommendations = recommendations.len(),
        "generated dashboard insights"
    );

    Insights {
        forecasts,
        trends,
        anomalies,
        recommendations,
    }
}
