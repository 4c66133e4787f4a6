use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use crate::entity::audience;
use crate::store::AssetStore;

use super::{message_only, reply, store_error};

pub async fn create(
    State(store): State<Arc<dyn AssetStore>>,
    payload: Result<Json<audience::Model>, JsonRejection>,
) -> Response {
    let Ok(Json(input)) = payload else {
        return message_only(StatusCode::BAD_REQUEST, "Invalid input");
    };
    match store.create_audience(input).await {
        Ok(created) => reply(
            StatusCode::CREATED,
            "Audience created successfully",
            Some(created),
        ),
        Err(err) => store_error(err),
    }
}

pub async fn list(State(store): State<Arc<dyn AssetStore>>) -> Response {
    match store.list_audiences().await {
        Ok(rows) => reply(
            StatusCode::OK,
            "Audiences retrieved successfully",
            Some(rows),
        ),
        Err(err) => store_error(err),
    }
}

pub async fn fetch(State(store): State<Arc<dyn AssetStore>>, Path(id): Path<i64>) -> Response {
    match store.get_audience(id).await {
        Ok(Some(row)) => reply(
            StatusCode::OK,
            "Audience retrieved successfully",
            Some(row),
        ),
        Ok(None) => message_only(StatusCode::NOT_FOUND, "Audience not found"),
        Err(err) => store_error(err),
    }
}

pub async fn update(
    State(store): State<Arc<dyn AssetStore>>,
    Path(id): Path<i64>,
    payload: Result<Json<audience::Model>, JsonRejection>,
) -> Response {
    let Ok(Json(input)) = payload else {
        return message_only(StatusCode::BAD_REQUEST, "Invalid input");
    };
    match store.update_audience(id, input).await {
        Ok(Some(row)) => reply(StatusCode::OK, "Audience updated successfully", Some(row)),
        Ok(None) => message_only(StatusCode::NOT_FOUND, "Audience not found"),
        Err(err) => store_error(err),
    }
}

pub async fn remove(State(store): State<Arc<dyn AssetStore>>, Path(id): Path<i64>) -> Response {
    match store.delete_audience(id).await {
        Ok(true) => message_only(StatusCode::OK, "Audience deleted successfully"),
        Ok(false) => message_only(StatusCode::NOT_FOUND, "Audience not found"),
        Err(err) => store_error(err),
    }
}
