use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use shopsight_core::ProductId;
use shopsight_records::SaleRecord;

/// Percent change beyond which a product counts as growing/declining.
/// Exactly at the threshold is stable.
pub const DEFAULT_GROWTH_THRESHOLD_PCT: f64 = 10.0;

/// Minimum number of monthly buckets before a seasonal series is exposed.
pub const SEASONAL_MIN_MONTHS: usize = 12;

/// Calendar month key. `Ord` by (year, month), so a sorted collection of
/// keys is chronological.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn from_date(date: DateTime<Utc>) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl core::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Units of a product sold in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyQuantity {
    pub month: MonthKey,
    pub total_quantity: i64,
}

/// Qualitative growth classification from first-vs-last monthly comparison.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthTrend {
    Growing,
    Declining,
    Stable,
    InsufficientData,
}

/// Seasonal contract: with enough history, expose the chronological monthly
/// series; no decomposition is performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SeasonalPattern {
    NoPattern,
    Monthly(Vec<MonthlyQuantity>),
}

/// Per-product sales trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub product_id: ProductId,
    /// Chronological monthly buckets.
    pub monthly: Vec<MonthlyQuantity>,
    /// First-vs-last percent change. `None` with fewer than two buckets.
    /// Not guarded against a zero first bucket: the value may be non-finite.
    pub percent_change: Option<f64>,
    pub growth_trend: GrowthTrend,
}

/// Deterministic sales trend detector.
#[derive(Debug, Copy, Clone)]
pub struct TrendDetector {
    growth_threshold_pct: f64,
}

impl TrendDetector {
    pub fn new() -> Self {
        Self {
            growth_threshold_pct: DEFAULT_GROWTH_THRESHOLD_PCT,
        }
    }

    pub fn with_growth_threshold_pct(mut self, threshold: f64) -> Self {
        self.growth_threshold_pct = threshold;
        self
    }

    /// Sum a product's sale quantities per calendar month, chronologically.
    ///
    /// Sales with no parseable date contribute to no bucket.
    pub fn monthly_quantities(
        &self,
        product_id: ProductId,
        sales: &[SaleRecord],
    ) -> Vec<MonthlyQuantity> {
        let mut buckets: BTreeMap<MonthKey, i64> = BTreeMap::new();
        for sale in sales {
            let Some(date) = sale.date else { continue };
            let key = MonthKey::from_date(date);
            for item in &sale.items {
                if item.product_id == product_id {
                    *buckets.entry(key).or_insert(0) += item.quantity;
                }
            }
        }
        buckets
            .into_iter()
            .map(|(month, total_quantity)| MonthlyQuantity {
                month,
                total_quantity,
            })
            .collect()
    }

    /// First-vs-last percent change over chronological buckets.
    ///
    /// The division is intentionally not guarded: a zero first bucket yields
    /// an infinite (or, for 0 -> 0, NaN) change, matching the reference
    /// behavior this detector reproduces.
    pub fn percent_change(monthly: &[MonthlyQuantity]) -> Option<f64> {
        if monthly.len() < 2 {
            return None;
        }
        let first = monthly[0].total_quantity as f64;
        let last = monthly[monthly.len() - 1].total_quantity as f64;
        Some((last - first) / first * 100.0)
    }

    /// Classify a percent change against the growth threshold.
    ///
    /// A NaN change (zero -> zero months) fails both comparisons and lands
    /// on `Stable`.
    pub fn classify(&self, percent_change: Option<f64>) -> GrowthTrend {
        match percent_change {
            None => GrowthTrend::InsufficientData,
            Some(pct) if pct > self.growth_threshold_pct => GrowthTrend::Growing,
            Some(pct) if pct < -self.growth_threshold_pct => GrowthTrend::Declining,
            Some(_) => GrowthTrend::Stable,
        }
    }

    /// Expose the monthly series as a seasonal pattern when at least
    /// [`SEASONAL_MIN_MONTHS`] buckets exist.
    pub fn seasonal_pattern(&self, monthly: &[MonthlyQuantity]) -> SeasonalPattern {
        if monthly.len() >= SEASONAL_MIN_MONTHS {
            SeasonalPattern::Monthly(monthly.to_vec())
        } else {
            SeasonalPattern::NoPattern
        }
    }

    /// Full trend for one product.
    pub fn trend_for(&self, product_id: ProductId, sales: &[SaleRecord]) -> TrendResult {
        let monthly = self.monthly_quantities(product_id, sales);
        let percent_change = Self::percent_change(&monthly);
        let growth_trend = self.classify(percent_change);
        TrendResult {
            product_id,
            monthly,
            percent_change,
            growth_trend,
        }
    }

    /// Trend for every product appearing in a dated sale, in first-seen order.
    pub fn detect_all(&self, sales: &[SaleRecord]) -> Vec<TrendResult> {
        let mut seen: Vec<ProductId> = Vec::new();
        for sale in sales {
            if sale.date.is_none() {
                continue;
            }
            for item in &sale.items {
                if !seen.contains(&item.product_id) {
                    seen.push(item.product_id);
                }
            }
        }
        seen.into_iter()
            .map(|product_id| self.trend_for(product_id, sales))
            .collect()
    }
}

impl Default for TrendDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shopsight_core::SaleId;
    use shopsight_records::SaleLineItem;

    fn sale_in_month(
        product_id: ProductId,
        quantity: i64,
        year: i32,
        month: u32,
    ) -> SaleRecord {
        SaleRecord {
            id: SaleId::new(),
            date: Some(Utc.with_ymd_and_hms(year, month, 10, 9, 0, 0).unwrap()),
            items: vec![SaleLineItem {
                product_id,
                quantity,
                unit_price: 5.0,
            }],
            payment_method: "card".to_string(),
            customer_ref: String::new(),
        }
    }

    fn detect(product_id: ProductId, sales: &[SaleRecord]) -> TrendResult {
        TrendDetector::new().trend_for(product_id, sales)
    }

    #[test]
    fn buckets_sum_within_a_month_and_sort_chronologically() {
        let id = ProductId::new();
        let sales = vec![
            sale_in_month(id, 5, 2026, 2),
            sale_in_month(id, 7, 2026, 1),
            sale_in_month(id, 3, 2026, 2),
        ];
        let monthly = TrendDetector::new().monthly_quantities(id, &sales);
        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].month.to_string(), "2026-01");
        assert_eq!(monthly[0].total_quantity, 7);
        assert_eq!(monthly[1].month.to_string(), "2026-02");
        assert_eq!(monthly[1].total_quantity, 8);
    }

    #[test]
    fn undated_sales_contribute_to_no_bucket() {
        let id = ProductId::new();
        let mut sale = sale_in_month(id, 5, 2026, 2);
        sale.date = None;
        let monthly = TrendDetector::new().monthly_quantities(id, &[sale]);
        assert!(monthly.is_empty());
    }

    #[test]
    fn fewer_than_two_buckets_is_insufficient_data() {
        let id = ProductId::new();
        let result = detect(id, &[sale_in_month(id, 100, 2026, 1)]);
        assert_eq!(result.growth_trend, GrowthTrend::InsufficientData);
        assert_eq!(result.percent_change, None);
    }

    // 100 -> 130 grows, 100 -> 85 declines, 100 -> 105 stable.
    #[test]
    fn growth_classification_concrete_scenarios() {
        let id = ProductId::new();

        let growing = detect(
            id,
            &[sale_in_month(id, 100, 2026, 1), sale_in_month(id, 130, 2026, 2)],
        );
        assert_eq!(growing.growth_trend, GrowthTrend::Growing);
        assert_eq!(growing.percent_change, Some(30.0));

        let declining = detect(
            id,
            &[sale_in_month(id, 100, 2026, 1), sale_in_month(id, 85, 2026, 2)],
        );
        assert_eq!(declining.growth_trend, GrowthTrend::Declining);
        assert_eq!(declining.percent_change, Some(-15.0));

        let stable = detect(
            id,
            &[sale_in_month(id, 100, 2026, 1), sale_in_month(id, 105, 2026, 2)],
        );
        assert_eq!(stable.growth_trend, GrowthTrend::Stable);
        assert_eq!(stable.percent_change, Some(5.0));
    }

    #[test]
    fn exactly_threshold_percent_is_stable() {
        let id = ProductId::new();

        let plus_ten = detect(
            id,
            &[sale_in_month(id, 100, 2026, 1), sale_in_month(id, 110, 2026, 2)],
        );
        assert_eq!(plus_ten.percent_change, Some(10.0));
        assert_eq!(plus_ten.growth_trend, GrowthTrend::Stable);

        let minus_ten = detect(
            id,
            &[sale_in_month(id, 100, 2026, 1), sale_in_month(id, 90, 2026, 2)],
        );
        assert_eq!(minus_ten.percent_change, Some(-10.0));
        assert_eq!(minus_ten.growth_trend, GrowthTrend::Stable);
    }

    // The zero-first-bucket division is deliberately unguarded; these tests
    // pin the resulting classifications.
    #[test]
    fn zero_first_bucket_yields_infinite_change_and_growing() {
        let id = ProductId::new();
        let result = detect(
            id,
            &[sale_in_month(id, 0, 2026, 1), sale_in_month(id, 50, 2026, 2)],
        );
        assert_eq!(result.percent_change, Some(f64::INFINITY));
        assert_eq!(result.growth_trend, GrowthTrend::Growing);
    }

    #[test]
    fn zero_to_zero_yields_nan_change_and_stable() {
        let id = ProductId::new();
        let result = detect(
            id,
            &[sale_in_month(id, 0, 2026, 1), sale_in_month(id, 0, 2026, 2)],
        );
        assert!(result.percent_change.unwrap().is_nan());
        assert_eq!(result.growth_trend, GrowthTrend::Stable);
    }

    #[test]
    fn seasonal_series_requires_twelve_months() {
        let id = ProductId::new();
        let detector = TrendDetector::new();

        let eleven: Vec<SaleRecord> = (1..=11)
            .map(|m| sale_in_month(id, 10, 2025, m))
            .collect();
        let monthly = detector.monthly_quantities(id, &eleven);
        assert_eq!(detector.seasonal_pattern(&monthly), SeasonalPattern::NoPattern);

        let twelve: Vec<SaleRecord> = (1..=12)
            .map(|m| sale_in_month(id, 10, 2025, m))
            .collect();
        let monthly = detector.monthly_quantities(id, &twelve);
        match detector.seasonal_pattern(&monthly) {
            SeasonalPattern::Monthly(series) => {
                assert_eq!(series.len(), 12);
                assert_eq!(series[0].month.to_string(), "2025-01");
                assert_eq!(series[11].month.to_string(), "2025-12");
            }
            SeasonalPattern::NoPattern => panic!("expected a monthly series"),
        }
    }

    #[test]
    fn detect_all_reports_products_in_first_seen_order() {
        let a = ProductId::new();
        let b = ProductId::new();
        let sales = vec![
            sale_in_month(b, 4, 2026, 1),
            sale_in_month(a, 2, 2026, 1),
            sale_in_month(b, 9, 2026, 2),
        ];
        let results = TrendDetector::new().detect_all(&sales);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].product_id, b);
        assert_eq!(results[1].product_id, a);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: classification is total over finite percent changes
            /// and respects the threshold boundaries.
            #[test]
            fn classification_respects_threshold(pct in -1000.0f64..1000.0) {
                let detector = TrendDetector::new();
                let trend = detector.classify(Some(pct));
                if pct > 10.0 {
                    prop_assert_eq!(trend, GrowthTrend::Growing);
                } else if pct < -10.0 {
                    prop_assert_eq!(trend, GrowthTrend::Declining);
                } else {
                    prop_assert_eq!(trend, GrowthTrend::Stable);
                }
            }

            /// Property: every product in a dated sale shows up exactly once.
            #[test]
            fn detect_all_is_exhaustive_and_duplicate_free(
                months in proptest::collection::vec(1u32..=12, 1..8)
            ) {
                let ids: Vec<ProductId> = (0..3).map(|_| ProductId::new()).collect();
                let mut sales = Vec::new();
                for (i, m) in months.iter().enumerate() {
                    sales.push(sale_in_month(ids[i % ids.len()], 5, 2026, *m));
                }
                let results = TrendDetector::new().detect_all(&sales);
                let mut reported: Vec<ProductId> =
                    results.iter().map(|r| r.product_id).collect();
                reported.sort();
                reported.dedup();
                prop_assert_eq!(reported.len(), results.len());
                for sale in &sales {
                    for item in &sale.items {
                        prop_assert!(results.iter().any(|r| r.product_id == item.product_id));
                    }
                }
            }
        }
    }
}
