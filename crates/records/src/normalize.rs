//! Normalizer: raw store records → calculation-ready records.
//!
//! Contract: equal-length, order-preserving, never fails. Missing optional
//! numerics default to 0, missing collections to empty, missing strings to
//! `""`. Only the identifier is assumed present.

use chrono::{DateTime, NaiveDate, Utc};

use crate::raw::{RawExpense, RawProduct, RawSale, RawSaleLine};
use crate::record::{ExpenseRecord, Product, SaleLineItem, SaleRecord};

/// Parse a stored date string: RFC 3339 first, then bare `YYYY-MM-DD`
/// (interpreted as midnight UTC). Unparseable input yields `None`.
pub fn parse_date(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let s = raw?.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Normalize products, preserving count and order.
pub fn normalize_products(raw: &[RawProduct]) -> Vec<Product> {
    raw.iter()
        .map(|p| Product {
            id: p.id,
            name: p.name.clone().unwrap_or_default(),
            category: p.category.clone().unwrap_or_default(),
            unit_price: p.unit_price.unwrap_or(0.0),
            unit_cost: p.unit_cost.unwrap_or(0.0),
            current_stock: p.current_stock.unwrap_or(0),
            reorder_threshold: p.reorder_threshold.unwrap_or(0),
        })
        .collect()
}

fn normalize_line(line: &RawSaleLine) -> SaleLineItem {
    SaleLineItem {
        product_id: line.product_id,
        quantity: line.quantity.unwrap_or(0),
        unit_price: line.unit_price.unwrap_or(0.0),
    }
}

/// Normalize sales, preserving count and order.
pub fn normalize_sales(raw: &[RawSale]) -> Vec<SaleRecord> {
    raw.iter()
        .map(|s| SaleRecord {
            id: s.id,
            date: parse_date(s.date.as_deref()),
            items: s
                .items
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(normalize_line)
                .collect(),
            payment_method: s.payment_method.clone().unwrap_or_default(),
            customer_ref: s.customer_ref.clone().unwrap_or_default(),
        })
        .collect()
}

/// Normalize expenses, preserving count and order.
pub fn normalize_expenses(raw: &[RawExpense]) -> Vec<ExpenseRecord> {
    raw.iter()
        .map(|e| ExpenseRecord {
            id: e.id,
            date: parse_date(e.date.as_deref()),
            category: e.category.clone().unwrap_or_default(),
            amount: e.amount.unwrap_or(0.0),
            description: e.description.clone().unwrap_or_default(),
        })
        .collect()
}
