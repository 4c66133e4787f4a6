//! Error types shared across the service.

/// Error type for store and resolver operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The wire-supplied user ID could not be parsed
    #[error("invalid user id {0:?}")]
    InvalidUserId(String),

    /// The persistence layer failed to respond
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),

    /// A batched bulk fetch failed
    #[error("upstream query failed: {0}")]
    Upstream(String),
}

/// Result alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;
