use axum::http::StatusCode;
use serde_json::{json, Value};

use super::{error_codes, TestApi};

fn superman(superpower_ids: Value) -> Value {
    json!({
        "name": "Clark Kent",
        "codename": "Superman",
        "superpowerIds": superpower_ids,
        "dateBirth": null,
        "height": 1.90,
        "weight": 107.0
    })
}

#[tokio::test]
async fn empty_list_is_not_found() {
    let api = TestApi::empty().await;

    let response = api.get("/api/heroes").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let body = response.json();
    assert_eq!(body["success"], false);
    assert!(body.get("data").is_none());
    assert_eq!(error_codes(&body), vec!["NOT_FOUND"]);
}

#[tokio::test]
async fn create_update_and_reconcile_superpowers() {
    let api = TestApi::empty().await;
    let flight = api.create_super_power("Flight", Some("Can fly")).await;

    let created = api.post("/api/heroes", superman(json!([flight]))).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.location(), Some("/api/heroes/1"));
    let body = created.json();
    assert_eq!(
        body["data"]["superPower"],
        json!([{ "id": flight, "name": "Flight", "description": "Can fly" }])
    );
    assert!(body["data"].get("dateBirth").is_none());

    let emptied = api.put("/api/heroes/1", superman(json!([]))).await;
    assert_eq!(emptied.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_codes(&emptied.json()), vec!["superpowerIds"]);

    let strength = api.create_super_power("Super Strength", None).await;
    let updated = api.put("/api/heroes/1", superman(json!([strength]))).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(
        updated.json()["data"]["superPower"],
        json!([{ "id": strength, "name": "Super Strength" }])
    );
}

#[tokio::test]
async fn duplicate_ids_in_request_are_rejected() {
    let api = TestApi::empty().await;
    let flight = api.create_super_power("Flight", None).await;

    let response = api.post("/api/heroes", superman(json!([flight, flight]))).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_codes(&response.json()), vec!["superpowerIds"]);
}

#[tokio::test]
async fn unknown_superpower_ids_are_rejected() {
    let api = TestApi::empty().await;
    let flight = api.create_super_power("Flight", None).await;

    let response = api.post("/api/heroes", superman(json!([flight, 41, 42]))).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json();
    assert_eq!(body["error"][0]["code"], "superpowerIds");
    assert_eq!(
        body["error"][0]["message"],
        "superpowerIds is invalid: superpowers not found: 41, 42"
    );
}

#[tokio::test]
async fn long_lists_of_unknown_superpower_ids_are_rejected() {
    let api = TestApi::empty().await;
    let ids: Vec<i64> = (1..=40_000).collect();

    let response = api.post("/api/heroes", superman(json!(ids))).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json();
    assert_eq!(error_codes(&body), vec!["superpowerIds"]);
    let message = body["error"][0]["message"].as_str().unwrap();
    assert!(message.starts_with("superpowerIds is invalid: superpowers not found: 1, 2, 3,"));
    assert!(message.ends_with("39999, 40000"));
}

#[tokio::test]
async fn long_distinct_id_lists_validate_quickly() {
    let api = TestApi::empty().await;
    let mut ids: Vec<i64> = (1..=200_000).collect();
    ids.push(1);

    let started = std::time::Instant::now();
    let response = api.post("/api/heroes", superman(json!(ids))).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_codes(&response.json()), vec!["superpowerIds"]);
    assert!(started.elapsed() < std::time::Duration::from_secs(5));
}

#[tokio::test]
async fn codename_must_be_unique_except_for_self() {
    let api = TestApi::empty().await;
    let flight = api.create_super_power("Flight", None).await;
    assert_eq!(
        api.post("/api/heroes", superman(json!([flight]))).await.status,
        StatusCode::CREATED
    );

    let duplicate = api.post("/api/heroes", superman(json!([flight]))).await;
    assert_eq!(duplicate.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_codes(&duplicate.json()), vec!["codename"]);

    let mut same = superman(json!([flight]));
    same["weight"] = json!(110.0);
    let updated = api.put("/api/heroes/1", same).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.json()["data"]["weight"], 110.0);
}

#[tokio::test]
async fn height_boundaries() {
    let api = TestApi::empty().await;
    let flight = api.create_super_power("Flight", None).await;

    for (height, expected) in [
        (0.0, StatusCode::UNPROCESSABLE_ENTITY),
        (3.0, StatusCode::UNPROCESSABLE_ENTITY),
        (2.99, StatusCode::CREATED),
    ] {
        let mut body = superman(json!([flight]));
        body["height"] = json!(height);
        body["codename"] = json!(format!("Superman {height}"));

        let response = api.post("/api/heroes", body).await;

        assert_eq!(response.status, expected, "height {height}");
        if expected != StatusCode::CREATED {
            assert_eq!(error_codes(&response.json()), vec!["height"]);
        }
    }
}

#[tokio::test]
async fn every_failed_field_is_reported_once() {
    let api = TestApi::empty().await;

    let response = api
        .post(
            "/api/heroes",
            json!({
                "name": "",
                "codename": " ",
                "superpowerIds": null,
                "dateBirth": "2020-01-01",
                "height": -1.0,
                "weight": 600.0
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        error_codes(&response.json()),
        vec!["name", "codename", "superpowerIds", "dateBirth", "height", "weight"]
    );
}

#[tokio::test]
async fn date_birth_accepts_timestamps_and_is_emitted_as_date() {
    let api = TestApi::empty().await;
    let flight = api.create_super_power("Flight", None).await;
    let mut body = superman(json!([flight]));
    body["dateBirth"] = json!("1978-06-18T00:00:00");

    let response = api.post("/api/heroes", body).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json()["data"]["dateBirth"], "1978-06-18");
}

#[tokio::test]
async fn too_young_hero_is_rejected() {
    let api = TestApi::empty().await;
    let flight = api.create_super_power("Flight", None).await;
    let mut body = superman(json!([flight]));
    body["dateBirth"] = json!("2009-05-21");

    let response = api.post("/api/heroes", body).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_codes(&response.json()), vec!["dateBirth"]);
}

#[tokio::test]
async fn update_unknown_hero_is_not_found() {
    let api = TestApi::empty().await;

    let response = api.put("/api/heroes/99", superman(json!([]))).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(error_codes(&response.json()), vec!["NOT_FOUND"]);
}

#[tokio::test]
async fn delete_returns_hero_then_it_is_gone() {
    let api = TestApi::empty().await;
    let flight = api.create_super_power("Flight", None).await;
    api.post("/api/heroes", superman(json!([flight]))).await;

    let deleted = api.delete("/api/heroes/1").await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.json()["data"]["codename"], "Superman");

    assert_eq!(api.get("/api/heroes/1").await.status, StatusCode::NOT_FOUND);
    assert_eq!(api.delete("/api/heroes/1").await.status, StatusCode::NOT_FOUND);
    assert_eq!(
        api.get(&format!("/api/superpowers/{flight}")).await.status,
        StatusCode::OK
    );
}

#[tokio::test]
async fn delete_with_zero_id_is_rejected() {
    let api = TestApi::empty().await;

    let response = api.delete("/api/heroes/0").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_codes(&response.json()), vec!["id"]);
}

#[tokio::test]
async fn list_returns_heroes_in_id_order() {
    let api = TestApi::empty().await;
    let flight = api.create_super_power("Flight", None).await;
    api.post("/api/heroes", superman(json!([flight]))).await;
    let mut batman = superman(json!([flight]));
    batman["codename"] = json!("Batman");
    batman["name"] = json!("Bruce Wayne");
    api.post("/api/heroes", batman).await;

    let body = api.get("/api/heroes").await.json();

    let codenames: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|hero| hero["codename"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(codenames, vec!["Superman", "Batman"]);
}
