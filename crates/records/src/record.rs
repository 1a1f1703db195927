//! Calculation-ready records, produced by the normalizer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopsight_core::{ExpenseId, ProductId, SaleId};

/// Normalized product. Owned by the external inventory store; read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub unit_cost: f64,
    pub current_stock: i64,
    pub reorder_threshold: i64,
}

/// Normalized sale line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLineItem {
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_price: f64,
}

/// Normalized sale record. Immutable once created; the engine only reads
/// historical sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: SaleId,
    /// `None` when the stored date was missing or unparseable. Such sales
    /// never fall inside a velocity window or a monthly bucket.
    pub date: Option<DateTime<Utc>>,
    pub items: Vec<SaleLineItem>,
    pub payment_method: String,
    pub customer_ref: String,
}

/// Normalized expense record. Immutable, read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub date: Option<DateTime<Utc>>,
    pub category: String,
    pub amount: f64,
    pub description: String,
}
