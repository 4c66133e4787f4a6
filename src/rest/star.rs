use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use crate::entity::user_star;
use crate::store::AssetStore;

use super::{message_only, reply, store_error};

pub async fn create(
    State(store): State<Arc<dyn AssetStore>>,
    payload: Result<Json<user_star::Model>, JsonRejection>,
) -> Response {
    let Ok(Json(input)) = payload else {
        return message_only(StatusCode::BAD_REQUEST, "Invalid input");
    };
    match store.create_star(input).await {
        Ok(created) => reply(
            StatusCode::CREATED,
            "UserStar created successfully",
            Some(created),
        ),
        Err(err) => store_error(err),
    }
}

pub async fn list(State(store): State<Arc<dyn AssetStore>>) -> Response {
    match store.list_stars().await {
        Ok(rows) => reply(
            StatusCode::OK,
            "UserStars retrieved successfully",
            Some(rows),
        ),
        Err(err) => store_error(err),
    }
}

pub async fn fetch(State(store): State<Arc<dyn AssetStore>>, Path(id): Path<i64>) -> Response {
    match store.get_star(id).await {
        Ok(Some(row)) => reply(StatusCode::OK, "UserStar retrieved successfully", Some(row)),
        Ok(None) => message_only(StatusCode::NOT_FOUND, "UserStar not found"),
        Err(err) => store_error(err),
    }
}

/// All star rows for one user; a non-numeric user ID is rejected before any
/// data access.
pub async fn list_by_user(
    State(store): State<Arc<dyn AssetStore>>,
    Path(user_id): Path<String>,
) -> Response {
    let Ok(user_id) = user_id.parse::<i64>() else {
        return message_only(StatusCode::BAD_REQUEST, "Invalid user ID");
    };
    match store.find_stars_by_user(user_id).await {
        Ok(rows) => reply(
            StatusCode::OK,
            "UserStars retrieved successfully",
            Some(rows),
        ),
        Err(err) => store_error(err),
    }
}

pub async fn update(
    State(store): State<Arc<dyn AssetStore>>,
    Path(id): Path<i64>,
    payload: Result<Json<user_star::Model>, JsonRejection>,
) -> Response {
    let Ok(Json(input)) = payload else {
        return message_only(StatusCode::BAD_REQUEST, "Invalid input");
    };
    match store.update_star(id, input).await {
        Ok(Some(row)) => reply(StatusCode::OK, "UserStar updated successfully", Some(row)),
        Ok(None) => message_only(StatusCode::NOT_FOUND, "UserStar not found"),
        Err(err) => store_error(err),
    }
}

pub async fn remove(State(store): State<Arc<dyn AssetStore>>, Path(id): Path<i64>) -> Response {
    match store.delete_star(id).await {
        Ok(true) => message_only(StatusCode::OK, "UserStar deleted successfully"),
        Ok(false) => message_only(StatusCode::NOT_FOUND, "UserStar not found"),
        Err(err) => store_error(err),
    }
}
