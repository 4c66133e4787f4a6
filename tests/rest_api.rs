//! REST route tests over the in-memory store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use starboard::app;
use starboard::store::MemoryStore;

fn test_app() -> Router {
    let store = Arc::new(MemoryStore::new());
    app::build(store.clone(), store)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(payload) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn audience_crud_round_trip() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/audience",
        Some(json!({
            "gender": "Male",
            "birthcountry": "USA",
            "agegroup": "25-34",
            "dailyhours": 5,
            "noofpurchases": 10
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Audience created successfully");
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/audience/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["birthcountry"], "USA");

    let (status, body) = send(&app, "GET", "/audiences", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/audience/{id}"),
        Some(json!({
            "gender": "Female",
            "birthcountry": "Canada",
            "agegroup": "35-44",
            "dailyhours": 2,
            "noofpurchases": 4
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["gender"], "Female");
    assert_eq!(body["data"]["id"], id);

    let (status, _) = send(&app, "DELETE", &format!("/audience/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", &format!("/audience/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Audience not found");
}

#[tokio::test]
async fn missing_rows_yield_404_envelopes() {
    let app = test_app();
    for uri in ["/audience/42", "/chart/42", "/insight/42", "/userstar/42"] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri}");
        assert!(body["message"].as_str().unwrap().ends_with("not found"));
        assert_eq!(body["data"], Value::Null);
    }
}

#[tokio::test]
async fn star_create_validates_asset_type() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/userstar",
        Some(json!({"userid": 1, "type": "Audience", "assetid": 7})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["type"], "Audience");

    for bad in ["audience", "Random", ""] {
        let (status, body) = send(
            &app,
            "POST",
            "/userstar",
            Some(json!({"userid": 1, "type": bad, "assetid": 7})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "type {bad:?}");
        assert_eq!(body["message"], "Invalid input");
    }
}

#[tokio::test]
async fn stars_list_by_user_filters_and_validates() {
    let app = test_app();
    for (user, asset) in [(1, 10), (2, 20), (1, 30)] {
        let (status, _) = send(
            &app,
            "POST",
            "/userstar",
            Some(json!({"userid": user, "type": "Chart", "assetid": asset})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, "GET", "/userstars/user/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row["userid"] == 1));

    let (status, body) = send(&app, "GET", "/userstars/user/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid user ID");
}

#[tokio::test]
async fn graphql_endpoint_serves_the_aggregation() {
    let app = test_app();

    let (status, created) = send(
        &app,
        "POST",
        "/insight",
        Some(json!({"text": "Revenue increased by 20% this quarter"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let insight_id = created["data"]["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        "POST",
        "/userstar",
        Some(json!({"userid": 1, "type": "Insight", "assetid": insight_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let query = r#"
        query GetUserStared($userID: ID!) {
            userstared(userID: $userID) {
                userid
                insight { id text }
            }
        }
    "#;
    let (status, body) = send(
        &app,
        "POST",
        "/graphql",
        Some(json!({"query": query, "variables": {"userID": "1"}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("errors").is_none(), "unexpected errors: {body}");
    assert_eq!(
        body["data"]["userstared"],
        json!({
            "userid": 1,
            "insight": [{
                "id": insight_id.to_string(),
                "text": "Revenue increased by 20% this quarter"
            }]
        })
    );
}
