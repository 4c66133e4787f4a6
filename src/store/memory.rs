//! In-process store implementation.
//!
//! Backs the test suite; behaves like the SQL store for everything the
//! service observes: monotonically assigned IDs, rows returned in ID order,
//! bulk lookups deduplicated per ID.

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::entity::{audience, chart, insight, user_star};
use crate::error::Result;

use super::{AssetStore, StarReader};

#[derive(Default)]
struct Tables {
    audiences: BTreeMap<i64, audience::Model>,
    charts: BTreeMap<i64, chart::Model>,
    insights: BTreeMap<i64, insight::Model>,
    stars: BTreeMap<i64, user_star::Model>,
    next_id: i64,
}

impl Tables {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory [`AssetStore`].
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn by_ids<M: Clone>(table: &BTreeMap<i64, M>, ids: &[i64]) -> Vec<M> {
    let wanted: HashSet<i64> = ids.iter().copied().collect();
    table
        .iter()
        .filter(|(id, _)| wanted.contains(id))
        .map(|(_, row)| row.clone())
        .collect()
}

#[async_trait]
impl StarReader for MemoryStore {
    async fn find_stars_by_user(&self, user_id: i64) -> Result<Vec<user_star::Model>> {
        let tables = self.tables.read().await;
        Ok(tables
            .stars
            .values()
            .filter(|star| star.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn audiences_by_ids(&self, ids: &[i64]) -> Result<Vec<audience::Model>> {
        Ok(by_ids(&self.tables.read().await.audiences, ids))
    }

    async fn charts_by_ids(&self, ids: &[i64]) -> Result<Vec<chart::Model>> {
        Ok(by_ids(&self.tables.read().await.charts, ids))
    }

    async fn insights_by_ids(&self, ids: &[i64]) -> Result<Vec<insight::Model>> {
        Ok(by_ids(&self.tables.read().await.insights, ids))
    }
}

#[async_trait]
impl AssetStore for MemoryStore {
    async fn create_audience(&self, mut input: audience::Model) -> Result<audience::Model> {
        let mut tables = self.tables.write().await;
        input.id = tables.allocate_id();
        tables.audiences.insert(input.id, input.clone());
        Ok(input)
    }

    async fn list_audiences(&self) -> Result<Vec<audience::Model>> {
        Ok(self.tables.read().await.audiences.values().cloned().collect())
    }

    async fn get_audience(&self, id: i64) -> Result<Option<audience::Model>> {
        Ok(self.tables.read().await.audiences.get(&id).cloned())
    }

    async fn update_audience(
        &self,
        id: i64,
        mut input: audience::Model,
    ) -> Result<Option<audience::Model>> {
        let mut tables = self.tables.write().await;
        if !tables.audiences.contains_key(&id) {
            return Ok(None);
        }
        input.id = id;
        tables.audiences.insert(id, input.clone());
        Ok(Some(input))
    }

    async fn delete_audience(&self, id: i64) -> Result<bool> {
        Ok(self.tables.write().await.audiences.remove(&id).is_some())
    }

    async fn create_chart(&self, mut input: chart::Model) -> Result<chart::Model> {
        let mut tables = self.tables.write().await;
        input.id = tables.allocate_id();
        tables.charts.insert(input.id, input.clone());
        Ok(input)
    }

    async fn list_charts(&self) -> Result<Vec<chart::Model>> {
        Ok(self.tables.read().await.charts.values().cloned().collect())
    }

    async fn get_chart(&self, id: i64) -> Result<Option<chart::Model>> {
        Ok(self.tables.read().await.charts.get(&id).cloned())
    }

    async fn update_chart(&self, id: i64, mut input: chart::Model) -> Result<Option<chart::Model>> {
        let mut tables = self.tables.write().await;
        if !tables.charts.contains_key(&id) {
            return Ok(None);
        }
        input.id = id;
        tables.charts.insert(id, input.clone());
        Ok(Some(input))
    }

    async fn delete_chart(&self, id: i64) -> Result<bool> {
        Ok(self.tables.write().await.charts.remove(&id).is_some())
    }

    async fn create_insight(&self, mut input: insight::Model) -> Result<insight::Model> {
        let mut tables = self.tables.write().await;
        input.id = tables.allocate_id();
        tables.insights.insert(input.id, input.clone());
        Ok(input)
    }

    async fn list_insights(&self) -> Result<Vec<insight::Model>> {
        Ok(self.tables.read().await.insights.values().cloned().collect())
    }

    async fn get_insight(&self, id: i64) -> Result<Option<insight::Model>> {
        Ok(self.tables.read().await.insights.get(&id).cloned())
    }

    async fn update_insight(
        &self,
        id: i64,
        mut input: insight::Model,
    ) -> Result<Option<insight::Model>> {
        let mut tables = self.tables.write().await;
        if !tables.insights.contains_key(&id) {
            return Ok(None);
        }
        input.id = id;
        tables.insights.insert(id, input.clone());
        Ok(Some(input))
    }

    async fn delete_insight(&self, id: i64) -> Result<bool> {
        Ok(self.tables.write().await.insights.remove(&id).is_some())
    }

    async fn create_star(&self, mut input: user_star::Model) -> Result<user_star::Model> {
        let mut tables = self.tables.write().await;
        input.id = tables.allocate_id();
        tables.stars.insert(input.id, input.clone());
        Ok(input)
    }

    async fn list_stars(&self) -> Result<Vec<user_star::Model>> {
        Ok(self.tables.read().await.stars.values().cloned().collect())
    }

    async fn get_star(&self, id: i64) -> Result<Option<user_star::Model>> {
        Ok(self.tables.read().await.stars.get(&id).cloned())
    }

    async fn update_star(
        &self,
        id: i64,
        mut input: user_star::Model,
    ) -> Result<Option<user_star::Model>> {
        let mut tables = self.tables.write().await;
        if !tables.stars.contains_key(&id) {
            return Ok(None);
        }
        input.id = id;
        tables.stars.insert(id, input.clone());
        Ok(Some(input))
    }

    async fn delete_star(&self, id: i64) -> Result<bool> {
        Ok(self.tables.write().await.stars.remove(&id).is_some())
    }
}
