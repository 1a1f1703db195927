//! Raw record shapes, as sourced from the dashboard's stores.
//!
//! Everything except the identifier is optional: persistence layers and
//! import paths routinely produce partially-filled records, and the engine
//! must accept them as-is.

use serde::{Deserialize, Serialize};

use shopsight_core::{ExpenseId, ProductId, SaleId};

/// Raw product record from the inventory store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    pub id: ProductId,
    pub name: Option<String>,
    pub category: Option<String>,
    pub unit_price: Option<f64>,
    pub unit_cost: Option<f64>,
    pub current_stock: Option<i64>,
    pub reorder_threshold: Option<i64>,
}

/// Raw sale line item: product, quantity, unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSaleLine {
    pub product_id: ProductId,
    pub quantity: Option<i64>,
    pub unit_price: Option<f64>,
}

/// Raw sale record from the sales store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSale {
    pub id: SaleId,
    /// Date as stored (RFC 3339 or `YYYY-MM-DD`); parsed during normalization.
    pub date: Option<String>,
    pub items: Option<Vec<RawSaleLine>>,
    pub payment_method: Option<String>,
    pub customer_ref: Option<String>,
}

/// Raw expense record from the expense store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawExpense {
    pub id: ExpenseId,
    pub date: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
}
