use axum::http::StatusCode;
use serde_json::json;

use super::{error_codes, TestApi};

#[tokio::test]
async fn empty_list_is_not_found() {
    let api = TestApi::empty().await;

    let response = api.get("/api/superpowers").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(error_codes(&response.json()), vec!["NOT_FOUND"]);
}

#[tokio::test]
async fn seeded_store_lists_default_powers() {
    let api = TestApi::seeded().await;

    let body = api.get("/api/superpowers").await.json();

    let names: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|power| power["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        vec!["Super Strength", "Flight", "Invulnerability", "Super Speed", "Telepathy"]
    );
}

#[tokio::test]
async fn create_returns_location_and_envelope() {
    let api = TestApi::empty().await;

    let response = api
        .post(
            "/api/superpowers",
            json!({ "name": " Flight ", "description": "Can fly" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.location(), Some("/api/superpowers/1"));
    let body = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Operation completed successfully");
    assert_eq!(body["data"], json!({ "id": 1, "name": "Flight", "description": "Can fly" }));
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn create_rejects_long_name_and_description() {
    let api = TestApi::empty().await;

    let response = api
        .post(
            "/api/superpowers",
            json!({ "name": "n".repeat(51), "description": "d".repeat(251) }),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_codes(&response.json()), vec!["name", "description"]);
}

#[tokio::test]
async fn update_then_get_reflects_changes() {
    let api = TestApi::empty().await;
    let id = api.create_super_power("Flight", Some("Can fly")).await;

    let response = api
        .put(
            &format!("/api/superpowers/{id}"),
            json!({ "name": "Flight", "description": "Can fly very fast" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let body = api.get(&format!("/api/superpowers/{id}")).await.json();
    assert_eq!(body["data"]["description"], "Can fly very fast");
}

#[tokio::test]
async fn update_unknown_is_not_found() {
    let api = TestApi::empty().await;

    let response = api
        .put("/api/superpowers/12", json!({ "name": "Flight" }))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unlinks_from_heroes() {
    let api = TestApi::empty().await;
    let flight = api.create_super_power("Flight", None).await;
    let strength = api.create_super_power("Super Strength", None).await;
    let created = api
        .post(
            "/api/heroes",
            json!({
                "name": "Clark Kent",
                "codename": "Superman",
                "superpowerIds": [flight, strength],
                "height": 1.90,
                "weight": 107.0
            }),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let response = api.delete(&format!("/api/superpowers/{flight}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["data"]["name"], "Flight");

    let hero = api.get("/api/heroes/1").await.json();
    assert_eq!(hero["data"]["superPower"], json!([{ "id": strength, "name": "Super Strength" }]));
    assert_eq!(
        api.get(&format!("/api/superpowers/{flight}")).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn delete_with_non_positive_id_is_rejected() {
    let api = TestApi::empty().await;

    let response = api.delete("/api/superpowers/-1").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_codes(&response.json()), vec!["id"]);
}
