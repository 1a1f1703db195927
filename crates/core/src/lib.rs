//! `shopsight-core` — analytics foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): strongly-typed record identifiers and the domain error model
//! shared by the forecasting and recommendation crates.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{ExpenseId, ProductId, SaleId};
