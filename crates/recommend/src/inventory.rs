//! Inventory recommendations from stock forecasts.

use serde_json::json;

use shopsight_forecast::ForecastResult;
use shopsight_records::Product;

use crate::recommendation::{product_name, Recommendation, RecommendationKind};

/// Below this many remaining days stock is critical.
const CRITICAL_DAYS: f64 = 7.0;

/// Below this many remaining days (and at or above critical) stock is low.
const LOW_DAYS: f64 = 14.0;

/// Above this many remaining days the product is overstocked.
const OVERSTOCKED_DAYS: f64 = 60.0;

/// Partition forecasts into critical / low / overstocked recommendations.
///
/// Forecasts with `Unknown` days remaining are excluded. The three bands are
/// mutually exclusive by construction; the healthy band between low and
/// overstocked yields no recommendation. Output order: critical first, then
/// low, then overstocked.
pub fn inventory_recommendations(
    forecasts: &[ForecastResult],
    products: &[Product],
) -> Vec<Recommendation> {
    let mut critical = Vec::new();
    let mut low = Vec::new();
    let mut overstocked = Vec::new();

    for forecast in forecasts {
        let Some(days) = forecast.days_remaining.value() else {
            continue;
        };
        let name = product_name(products, forecast.product_id);
        let shown = days.round() as i64;
        let facts = json!({
            "product_id": forecast.product_id,
            "days_remaining": days,
            "reorder_quantity": forecast.reorder_quantity,
        });

        if days < CRITICAL_DAYS {
            critical.push(Recommendation::new(
                RecommendationKind::CriticalStock,
                format!("{name} has about {shown} day(s) of stock left; reorder {} units now", forecast.reorder_quantity),
                facts,
            ));
        } else if days < LOW_DAYS {
            low.push(Recommendation::new(
                RecommendationKind::LowStock,
                format!("{name} is running low ({shown} days left); plan to reorder {} units", forecast.reorder_quantity),
                facts,
            ));
        } else if days > OVERSTOCKED_DAYS {
            overstocked.push(Recommendation::new(
                RecommendationKind::Overstocked,
                format!("{name} has roughly {shown} days of stock on hand; consider slowing replenishment"),
                facts,
            ));
        }
    }

    critical.extend(low);
    critical.extend(overstocked);
    critical
}
