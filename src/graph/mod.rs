//! GraphQL schema: query root, schema builder, loaders.

pub mod loader;
pub mod stars;
pub mod types;

use std::sync::Arc;

use async_graphql::extensions::apollo_persisted_queries::{
    ApolloPersistedQueries, LruCacheStorage,
};
use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Result, Schema, ID};

use crate::store::StarReader;

pub use loader::StarLoaders;
pub use types::{Audience, Chart, Insight, UserStarred};

/// Persisted-query cache entries kept by the executor.
const APQ_CACHE_SIZE: usize = 100;

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Everything the given user has starred, grouped by asset type.
    async fn userstared(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "userID")] user_id: ID,
    ) -> Result<UserStarred> {
        let reader = ctx.data_unchecked::<Arc<dyn StarReader>>();
        let loaders = ctx.data_unchecked::<StarLoaders>();
        stars::resolve_user_stars(reader.as_ref(), loaders, &user_id)
            .await
            .map_err(|err| async_graphql::Error::new(err.to_string()))
    }
}

/// Build the executable schema over the given reader.
///
/// The reader is schema-lifetime data; the per-request [`StarLoaders`] are
/// attached to each request by the HTTP layer (or directly by tests).
pub fn build_schema(reader: Arc<dyn StarReader>) -> AppSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(reader)
        .extension(ApolloPersistedQueries::new(LruCacheStorage::new(
            APQ_CACHE_SIZE,
        )))
        .finish()
}
