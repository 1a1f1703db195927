//! Sales recommendations: trend follow-ups and bundle suggestions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use shopsight_core::ProductId;
use shopsight_records::{Product, SaleRecord};
use shopsight_trends::{GrowthTrend, TrendResult};

use crate::recommendation::{product_name, Recommendation, RecommendationKind};

/// At most this many bundle suggestions are emitted.
const MAX_BUNDLES: usize = 5;

/// Canonical unordered pair of products, stored as (min, max) so the same
/// two products always map to the same key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductPair {
    first: ProductId,
    second: ProductId,
}

impl ProductPair {
    pub fn new(a: ProductId, b: ProductId) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub fn first(&self) -> ProductId {
        self.first
    }

    pub fn second(&self) -> ProductId {
        self.second
    }
}

/// Map growing/declining trends to product-level recommendations.
pub fn sales_recommendations(
    trends: &[TrendResult],
    products: &[Product],
) -> Vec<Recommendation> {
    trends
        .iter()
        .filter_map(|trend| {
            let name = product_name(products, trend.product_id);
            let pct = trend.percent_change.unwrap_or(0.0);
            let facts = json!({
                "product_id": trend.product_id,
                "percent_change": pct,
            });
            match trend.growth_trend {
                GrowthTrend::Growing => Some(Recommendation::new(
                    RecommendationKind::GrowingProduct,
                    format!("{name} sales are trending up ({pct:+.0}% from first to latest month); consider stocking more"),
                    facts,
                )),
                GrowthTrend::Declining => Some(Recommendation::new(
                    RecommendationKind::DecliningProduct,
                    format!("{name} sales are trending down ({pct:+.0}% from first to latest month); consider a promotion or reduced orders"),
                    facts,
                )),
                GrowthTrend::Stable | GrowthTrend::InsufficientData => None,
            }
        })
        .collect()
}

/// Suggest product bundles from co-occurrence within single sales.
///
/// Every sale with two or more distinct products increments a counter per
/// unordered product pair. Pairs rank by count descending; ties keep
/// first-seen order (stable rule). At most [`MAX_BUNDLES`] suggestions.
pub fn bundle_recommendations(
    sales: &[SaleRecord],
    products: &[Product],
) -> Vec<Recommendation> {
    let mut counts: HashMap<ProductPair, usize> = HashMap::new();
    let mut order: Vec<ProductPair> = Vec::new();

    for sale in sales {
        let mut distinct: Vec<ProductId> = Vec::new();
        for item in &sale.items {
            if !distinct.contains(&item.product_id) {
                distinct.push(item.product_id);
            }
        }
        if distinct.len() < 2 {
            continue;
        }
        for i in 0..distinct.len() {
            for j in (i + 1)..distinct.len() {
                let pair = ProductPair::new(distinct[i], distinct[j]);
                let count = counts.entry(pair).or_insert_with(|| {
                    order.push(pair);
                    0
                });
                *count += 1;
            }
        }
    }

    // Stable sort: equal counts keep first-seen order.
    let mut ranked = order;
    ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));
    ranked.truncate(MAX_BUNDLES);

    ranked
        .into_iter()
        .map(|pair| {
            let count = counts[&pair];
            let name_a = product_name(products, pair.first());
            let name_b = product_name(products, pair.second());
            Recommendation::new(
                RecommendationKind::Bundle,
                format!("{name_a} and {name_b} were bought together {count} time(s); consider offering them as a bundle"),
                json!({
                    "product_a": pair.first(),
                    "product_b": pair.second(),
                    "count": count,
                }),
            )
        })
        .collect()
}
