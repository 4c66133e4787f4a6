//! REST CRUD routes.
//!
//! Thin passthroughs to [`AssetStore`] with a uniform `{message, data}`
//! envelope; nothing here carries domain logic.

mod audience;
mod chart;
mod insight;
mod star;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::store::AssetStore;

pub fn router(store: Arc<dyn AssetStore>) -> Router {
    Router::new()
        .route("/audience", post(audience::create))
        .route("/audiences", get(audience::list))
        .route(
            "/audience/{id}",
            get(audience::fetch).put(audience::update).delete(audience::remove),
        )
        .route("/chart", post(chart::create))
        .route("/charts", get(chart::list))
        .route(
            "/chart/{id}",
            get(chart::fetch).put(chart::update).delete(chart::remove),
        )
        .route("/insight", post(insight::create))
        .route("/insights", get(insight::list))
        .route(
            "/insight/{id}",
            get(insight::fetch).put(insight::update).delete(insight::remove),
        )
        .route("/userstar", post(star::create))
        .route("/userstars", get(star::list))
        .route(
            "/userstar/{id}",
            get(star::fetch).put(star::update).delete(star::remove),
        )
        .route("/userstars/user/{userid}", get(star::list_by_user))
        .with_state(store)
}

#[derive(Serialize)]
struct Envelope<T: Serialize> {
    message: String,
    data: Option<T>,
}

/// Uniform JSON reply: `{"message": ..., "data": ...}` with the given status.
pub(crate) fn reply<T: Serialize>(status: StatusCode, message: &str, data: Option<T>) -> Response {
    (
        status,
        Json(Envelope {
            message: message.to_owned(),
            data,
        }),
    )
        .into_response()
}

/// Reply without a data payload.
pub(crate) fn message_only(status: StatusCode, message: &str) -> Response {
    reply::<()>(status, message, None)
}

/// 500 envelope for store failures; the error itself goes to the log.
pub(crate) fn store_error(err: crate::error::Error) -> Response {
    tracing::error!(error = %err, "store operation failed");
    message_only(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}
