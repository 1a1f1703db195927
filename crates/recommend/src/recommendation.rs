use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use shopsight_core::ProductId;
use shopsight_records::Product;

/// Category tag for a recommendation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    CriticalStock,
    LowStock,
    Overstocked,
    GrowingProduct,
    DecliningProduct,
    Bundle,
    ExpenseAnomaly,
    ThinMargin,
}

/// A human-readable recommendation plus the numeric facts that produced it.
///
/// The facts carry the exact values behind the message so tests and host
/// layers can assert on numbers instead of parsing prose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub message: String,
    pub facts: JsonValue,
}

impl Recommendation {
    pub fn new(kind: RecommendationKind, message: impl Into<String>, facts: JsonValue) -> Self {
        Self {
            kind,
            message: message.into(),
            facts,
        }
    }
}

/// Look up a product by id. Callers build the display fallback.
pub(crate) fn find_product(products: &[Product], id: ProductId) -> Option<&Product> {
    products.iter().find(|p| p.id == id)
}

/// Display name for a product, with the documented fallback when the product
/// no longer exists in the inventory store.
pub(crate) fn product_name(products: &[Product], id: ProductId) -> String {
    match find_product(products, id) {
        Some(p) => p.name.clone(),
        None => format!("Product #{id}"),
    }
}
