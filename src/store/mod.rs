//! Storage abstraction.
//!
//! Two seams with different audiences:
//!
//! - [`StarReader`] is the narrow read contract the aggregation path depends
//!   on: stars by user plus one bulk by-ids lookup per asset table.
//! - [`AssetStore`] extends it with the CRUD operations backing the REST
//!   routes.
//!
//! [`PostgresStore`] implements both against sea-orm; [`MemoryStore`] is the
//! in-process implementation the test suite runs on.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::entity::{audience, chart, insight, user_star};
use crate::error::Result;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Read-only contract consumed by the star aggregation.
///
/// Bulk lookups return rows in store order, one row per matching ID; callers
/// own the mapping back to their requested key order.
#[async_trait]
pub trait StarReader: Send + Sync + 'static {
    /// All star rows for one user, in store order.
    async fn find_stars_by_user(&self, user_id: i64) -> Result<Vec<user_star::Model>>;

    async fn audiences_by_ids(&self, ids: &[i64]) -> Result<Vec<audience::Model>>;
    async fn charts_by_ids(&self, ids: &[i64]) -> Result<Vec<chart::Model>>;
    async fn insights_by_ids(&self, ids: &[i64]) -> Result<Vec<insight::Model>>;
}

/// Full store contract: the read seam plus per-entity CRUD.
///
/// `create_*` ignores any ID carried by the input and returns the stored row;
/// `update_*` and `delete_*` report a missing row as `None` / `false` rather
/// than an error.
#[async_trait]
pub trait AssetStore: StarReader {
    async fn create_audience(&self, input: audience::Model) -> Result<audience::Model>;
    async fn list_audiences(&self) -> Result<Vec<audience::Model>>;
    async fn get_audience(&self, id: i64) -> Result<Option<audience::Model>>;
    async fn update_audience(
        &self,
        id: i64,
        input: audience::Model,
    ) -> Result<Option<audience::Model>>;
    async fn delete_audience(&self, id: i64) -> Result<bool>;

    async fn create_chart(&self, input: chart::Model) -> Result<chart::Model>;
    async fn list_charts(&self) -> Result<Vec<chart::Model>>;
    async fn get_chart(&self, id: i64) -> Result<Option<chart::Model>>;
    async fn update_chart(&self, id: i64, input: chart::Model) -> Result<Option<chart::Model>>;
    async fn delete_chart(&self, id: i64) -> Result<bool>;

    async fn create_insight(&self, input: insight::Model) -> Result<insight::Model>;
    async fn list_insights(&self) -> Result<Vec<insight::Model>>;
    async fn get_insight(&self, id: i64) -> Result<Option<insight::Model>>;
    async fn update_insight(
        &self,
        id: i64,
        input: insight::Model,
    ) -> Result<Option<insight::Model>>;
    async fn delete_insight(&self, id: i64) -> Result<bool>;

    async fn create_star(&self, input: user_star::Model) -> Result<user_star::Model>;
    async fn list_stars(&self) -> Result<Vec<user_star::Model>>;
    async fn get_star(&self, id: i64) -> Result<Option<user_star::Model>>;
    async fn update_star(
        &self,
        id: i64,
        input: user_star::Model,
    ) -> Result<Option<user_star::Model>>;
    async fn delete_star(&self, id: i64) -> Result<bool>;
}
