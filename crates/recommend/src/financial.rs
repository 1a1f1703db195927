//! Financial recommendations: expense anomalies and thin margins.

use serde_json::json;

use shopsight_anomaly::AnomalyResult;
use shopsight_records::Product;

use crate::recommendation::{Recommendation, RecommendationKind};

/// Flagged expenses are re-emitted only above this deviation percent.
const ANOMALY_DEVIATION_PCT: f64 = 50.0;

/// Margins below this percent warrant a pricing review.
const THIN_MARGIN_PCT: f64 = 15.0;

/// Synthesize financial recommendations.
///
/// (a) Re-emit detector output filtered to `deviation_percent > 50`. A NaN
///     deviation (zero category mean) fails the comparison and is dropped —
///     that is the unguarded composition, not an added guard.
/// (b) Margin review: `margin = (price - cost) / price * 100`, recommended
///     iff `margin < 15`. The division is not guarded; a zero price flows a
///     non-finite margin into the facts. Normalization defaults a missing
///     cost to 0, which lands at a 100% margin and no recommendation.
pub fn financial_recommendations(
    anomalies: &[AnomalyResult],
    products: &[Product],
) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    for result in anomalies {
        // A NaN deviation fails this comparison and drops out here.
        let large = result
            .flagged
            .iter()
            .filter(|f| f.deviation_percent > ANOMALY_DEVIATION_PCT);
        for flagged in large {
            let when = flagged
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "an unknown date".to_string());
            recs.push(Recommendation::new(
                RecommendationKind::ExpenseAnomaly,
                format!(
                    "Unusually large {} expense of {:.2} on {when} ({:.0}% above the category average of {:.2})",
                    result.category, flagged.amount, flagged.deviation_percent, result.mean
                ),
                json!({
                    "category": result.category,
                    "amount": flagged.amount,
                    "mean": result.mean,
                    "deviation_percent": flagged.deviation_percent,
                }),
            ));
        }
    }

    for product in products {
        let margin = (product.unit_price - product.unit_cost) / product.unit_price * 100.0;
        if margin < THIN_MARGIN_PCT {
            recs.push(Recommendation::new(
                RecommendationKind::ThinMargin,
                format!(
                    "{} has a thin margin ({margin:.1}%); review pricing or supplier cost",
                    product.name
                ),
                json!({
                    "product_id": product.id,
                    "unit_price": product.unit_price,
                    "unit_cost": product.unit_cost,
                    "margin_percent": margin,
                }),
            ));
        }
    }

    recs
}
