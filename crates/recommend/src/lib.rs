//! Recommendation synthesis: turns forecast, trend, and anomaly results into
//! ranked, templated, human-readable recommendations, plus a facade that runs
//! the whole pipeline from raw records.

pub mod financial;
pub mod insights;
pub mod inventory;
pub mod recommendation;
pub mod sales;

pub use financial::financial_recommendations;
pub use insights::{generate_insights, Insights};
pub use inventory::inventory_recommendations;
pub use recommendation::{Recommendation, RecommendationKind};
pub use sales::{bundle_recommendations, sales_recommendations, ProductPair};
