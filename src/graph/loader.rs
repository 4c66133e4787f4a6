//! Request-scoped batched loaders for the three asset tables.
//!
//! Each loader coalesces the `load` calls issued while one GraphQL operation
//! resolves into bulk by-ids fetches, at most [`MAX_BATCH`] keys per round
//! trip. A fresh [`StarLoaders`] must be built for every inbound request;
//! nothing is cached across completed batches, so two batches in the same
//! request observe the store independently.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_graphql::dataloader::{DataLoader, Loader};

use crate::entity::{audience, chart, insight};
use crate::error::Error;
use crate::store::StarReader;

/// Keys per bulk fetch; larger pending sets split into multiple round trips.
pub const MAX_BATCH: usize = 100;

/// How long a loader waits for more keys before dispatching a partial batch.
pub const BATCH_WINDOW: Duration = Duration::from_millis(1);

pub struct AudienceLoader {
    reader: Arc<dyn StarReader>,
}

impl Loader<i64> for AudienceLoader {
    type Value = audience::Model;
    type Error = Arc<Error>;

    async fn load(&self, keys: &[i64]) -> Result<HashMap<i64, Self::Value>, Self::Error> {
        let rows = self.reader.audiences_by_ids(keys).await.map_err(Arc::new)?;
        Ok(rows.into_iter().map(|row| (row.id, row)).collect())
    }
}

pub struct ChartLoader {
    reader: Arc<dyn StarReader>,
}

impl Loader<i64> for ChartLoader {
    type Value = chart::Model;
    type Error = Arc<Error>;

    async fn load(&self, keys: &[i64]) -> Result<HashMap<i64, Self::Value>, Self::Error> {
        let rows = self.reader.charts_by_ids(keys).await.map_err(Arc::new)?;
        Ok(rows.into_iter().map(|row| (row.id, row)).collect())
    }
}

pub struct InsightLoader {
    reader: Arc<dyn StarReader>,
}

impl Loader<i64> for InsightLoader {
    type Value = insight::Model;
    type Error = Arc<Error>;

    async fn load(&self, keys: &[i64]) -> Result<HashMap<i64, Self::Value>, Self::Error> {
        let rows = self.reader.insights_by_ids(keys).await.map_err(Arc::new)?;
        Ok(rows.into_iter().map(|row| (row.id, row)).collect())
    }
}

/// The per-request loader bundle, injected as GraphQL request data.
pub struct StarLoaders {
    pub audiences: DataLoader<AudienceLoader>,
    pub charts: DataLoader<ChartLoader>,
    pub insights: DataLoader<InsightLoader>,
}

impl StarLoaders {
    /// Build a fresh bundle over the shared reader. One bundle per request;
    /// reuse across requests would leak rows between users.
    pub fn new(reader: Arc<dyn StarReader>) -> Self {
        Self {
            audiences: DataLoader::new(
                AudienceLoader {
                    reader: reader.clone(),
                },
                tokio::spawn,
            )
            .max_batch_size(MAX_BATCH)
            .delay(BATCH_WINDOW),
            charts: DataLoader::new(
                ChartLoader {
                    reader: reader.clone(),
                },
                tokio::spawn,
            )
            .max_batch_size(MAX_BATCH)
            .delay(BATCH_WINDOW),
            insights: DataLoader::new(InsightLoader { reader }, tokio::spawn)
                .max_batch_size(MAX_BATCH)
                .delay(BATCH_WINDOW),
        }
    }
}

/// Load `ids` through the batcher, returning one slot per input ID in input
/// order. Duplicates each get their own slot; a missing row is `None` at its
/// position and never fails the surrounding batch.
pub async fn load_many_ordered<L>(
    loader: &DataLoader<L>,
    ids: &[i64],
) -> Result<Vec<Option<L::Value>>, L::Error>
where
    L: Loader<i64>,
    L::Value: Clone,
{
    let fetched = loader.load_many(ids.iter().copied()).await?;
    Ok(ids.iter().map(|id| fetched.get(id).cloned()).collect())
}
