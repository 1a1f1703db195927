//! Record shapes consumed by the analytics engine.
//!
//! The dashboard's stores hand over *raw* records with optional fields and
//! string dates (`raw` module). The normalizer (`normalize` module) converts
//! them into calculation-ready records with typed dates and defaulted
//! optionals, without dropping, reordering, or failing on malformed optional
//! fields.

pub mod normalize;
pub mod raw;
pub mod record;

pub use normalize::{normalize_expenses, normalize_products, normalize_sales};
pub use raw::{RawExpense, RawProduct, RawSale, RawSaleLine};
pub use record::{ExpenseRecord, Product, SaleLineItem, SaleRecord};
