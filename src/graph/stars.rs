//! Star index and the aggregation resolver.

use crate::entity::AssetType;
use crate::error::{Error, Result};
use crate::store::StarReader;

use super::loader::{load_many_ordered, StarLoaders};
use super::types::{Audience, Chart, Insight, UserStarred};

/// One user's starred asset IDs, bucketed by type.
///
/// Computed fresh for every aggregation request; the bucket order is the
/// order the store returned the star rows, untouched.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StarIndex {
    pub audiences: Vec<i64>,
    pub charts: Vec<i64>,
    pub insights: Vec<i64>,
}

impl StarIndex {
    pub async fn resolve(reader: &dyn StarReader, user_id: i64) -> Result<Self> {
        let stars = reader.find_stars_by_user(user_id).await?;
        let mut index = Self::default();
        for star in stars {
            match star.asset_type {
                AssetType::Audience => index.audiences.push(star.asset_id),
                AssetType::Chart => index.charts.push(star.asset_id),
                AssetType::Insight => index.insights.push(star.asset_id),
            }
        }
        Ok(index)
    }
}

/// Resolve everything one user has starred into hydrated asset lists.
///
/// The three per-type bulk loads run concurrently; they hit independent
/// tables. A star pointing at a since-deleted asset is dropped from its list
/// rather than failing the aggregation, while store-level failures and a
/// non-numeric `user_id` fail the whole request.
pub async fn resolve_user_stars(
    reader: &dyn StarReader,
    loaders: &StarLoaders,
    user_id: &str,
) -> Result<UserStarred> {
    let id: i64 = user_id
        .parse()
        .map_err(|_| Error::InvalidUserId(user_id.to_owned()))?;

    let index = StarIndex::resolve(reader, id).await?;
    tracing::debug!(
        user_id = id,
        audiences = index.audiences.len(),
        charts = index.charts.len(),
        insights = index.insights.len(),
        "resolved star index"
    );

    let (audiences, charts, insights) = tokio::try_join!(
        load_many_ordered(&loaders.audiences, &index.audiences),
        load_many_ordered(&loaders.charts, &index.charts),
        load_many_ordered(&loaders.insights, &index.insights),
    )
    .map_err(|err| Error::Upstream(err.to_string()))?;

    Ok(UserStarred {
        userid: id,
        audience: audiences.into_iter().flatten().map(Audience::from).collect(),
        chart: charts.into_iter().flatten().map(Chart::from).collect(),
        insight: insights.into_iter().flatten().map(Insight::from).collect(),
    })
}
