//! End-to-end GraphQL tests for the star aggregation, running the real
//! schema over the in-memory store.

use std::sync::Arc;

use async_graphql::{Request, Variables};
use serde_json::json;

use starboard::entity::{audience, chart, insight, user_star, AssetType};
use starboard::graph::{build_schema, StarLoaders};
use starboard::store::{AssetStore, MemoryStore, StarReader};

const USER_STARED_QUERY: &str = r#"
    query GetUserStared($userID: ID!) {
        userstared(userID: $userID) {
            userid
            audience {
                id
                gender
                birthcountry
                agegroup
                dailyhours
                noofpurchases
            }
            chart {
                id
                title
                xaxistitle
                yaxistitle
            }
            insight {
                id
                text
            }
        }
    }
"#;

async fn execute(
    store: &Arc<MemoryStore>,
    query: &str,
    variables: serde_json::Value,
) -> async_graphql::Response {
    let reader: Arc<dyn StarReader> = store.clone();
    let schema = build_schema(reader.clone());
    let request = Request::new(query)
        .variables(Variables::from_json(variables))
        .data(StarLoaders::new(reader));
    schema.execute(request).await
}

fn star(user_id: i64, asset_type: AssetType, asset_id: i64) -> user_star::Model {
    user_star::Model {
        id: 0,
        user_id,
        asset_type,
        asset_id,
    }
}

fn audience_row(gender: &str, country: &str) -> audience::Model {
    audience::Model {
        id: 0,
        gender: gender.into(),
        birth_country: country.into(),
        age_group: "25-34".into(),
        daily_hours: 5,
        no_of_purchases: 10,
    }
}

#[tokio::test]
async fn user_with_no_stars_gets_empty_lists() {
    let store = Arc::new(MemoryStore::new());

    let resp = execute(&store, USER_STARED_QUERY, json!({"userID": "999"})).await;
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

    let data = resp.data.into_json().unwrap();
    assert_eq!(
        data,
        json!({
            "userstared": {
                "userid": 999,
                "audience": [],
                "chart": [],
                "insight": []
            }
        })
    );
}

#[tokio::test]
async fn user_with_one_star_of_each_type() {
    let store = Arc::new(MemoryStore::new());
    let a = store
        .create_audience(audience_row("Male", "USA"))
        .await
        .unwrap();
    let c = store
        .create_chart(chart::Model {
            id: 0,
            title: "Sales Chart".into(),
            x_axis_title: "Month".into(),
            y_axis_title: "Revenue".into(),
        })
        .await
        .unwrap();
    let i = store
        .create_insight(insight::Model {
            id: 0,
            text: "Revenue increased by 20% this quarter".into(),
        })
        .await
        .unwrap();
    store
        .create_star(star(1, AssetType::Audience, a.id))
        .await
        .unwrap();
    store.create_star(star(1, AssetType::Chart, c.id)).await.unwrap();
    store
        .create_star(star(1, AssetType::Insight, i.id))
        .await
        .unwrap();

    let resp = execute(&store, USER_STARED_QUERY, json!({"userID": "1"})).await;
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

    let data = resp.data.into_json().unwrap();
    assert_eq!(
        data,
        json!({
            "userstared": {
                "userid": 1,
                "audience": [{
                    "id": a.id.to_string(),
                    "gender": "Male",
                    "birthcountry": "USA",
                    "agegroup": "25-34",
                    "dailyhours": 5,
                    "noofpurchases": 10
                }],
                "chart": [{
                    "id": c.id.to_string(),
                    "title": "Sales Chart",
                    "xaxistitle": "Month",
                    "yaxistitle": "Revenue"
                }],
                "insight": [{
                    "id": i.id.to_string(),
                    "text": "Revenue increased by 20% this quarter"
                }]
            }
        })
    );
}

#[tokio::test]
async fn user_with_two_audiences_gets_both() {
    let store = Arc::new(MemoryStore::new());
    let first = store
        .create_audience(audience_row("Male", "USA"))
        .await
        .unwrap();
    let second = store
        .create_audience(audience_row("Female", "Canada"))
        .await
        .unwrap();
    store
        .create_star(star(2, AssetType::Audience, first.id))
        .await
        .unwrap();
    store
        .create_star(star(2, AssetType::Audience, second.id))
        .await
        .unwrap();

    let resp = execute(&store, USER_STARED_QUERY, json!({"userID": "2"})).await;
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

    let data = resp.data.into_json().unwrap();
    let audiences = data["userstared"]["audience"].as_array().unwrap();
    assert_eq!(audiences.len(), 2);

    let pairs: Vec<(&str, &str)> = audiences
        .iter()
        .map(|a| {
            (
                a["gender"].as_str().unwrap(),
                a["birthcountry"].as_str().unwrap(),
            )
        })
        .collect();
    assert!(pairs.contains(&("Male", "USA")));
    assert!(pairs.contains(&("Female", "Canada")));
}

#[tokio::test]
async fn star_pointing_at_deleted_asset_is_omitted() {
    let store = Arc::new(MemoryStore::new());
    let kept = store
        .create_audience(audience_row("Male", "USA"))
        .await
        .unwrap();
    let doomed = store
        .create_audience(audience_row("Female", "Canada"))
        .await
        .unwrap();
    store
        .create_star(star(1, AssetType::Audience, kept.id))
        .await
        .unwrap();
    store
        .create_star(star(1, AssetType::Audience, doomed.id))
        .await
        .unwrap();
    assert!(store.delete_audience(doomed.id).await.unwrap());

    let resp = execute(&store, USER_STARED_QUERY, json!({"userID": "1"})).await;
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

    let data = resp.data.into_json().unwrap();
    let audiences = data["userstared"]["audience"].as_array().unwrap();
    assert_eq!(audiences.len(), 1);
    assert_eq!(audiences[0]["gender"], "Male");
}

#[tokio::test]
async fn invalid_user_id_is_a_request_error_with_no_data() {
    let store = Arc::new(MemoryStore::new());

    let resp = execute(&store, USER_STARED_QUERY, json!({"userID": "invalid"})).await;
    assert_eq!(resp.errors.len(), 1);
    assert!(resp.errors[0].message.contains("invalid user id"));
    assert_eq!(resp.data, async_graphql::Value::Null);
}
