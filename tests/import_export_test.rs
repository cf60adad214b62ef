use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{create_match, login_admin, sample_match_form, spawn_app};

fn import_payload() -> serde_json::Value {
    json!([
        {
            "id": "import-1",
            "teamA": { "name": "SA", "score": 201, "wickets": 4, "overs": 20.0 },
            "teamB": { "name": "NZ", "score": 160, "wickets": 7, "overs": 18.3 },
            "status": "SA cruising to a win."
        },
        {
            "id": "import-2",
            "teamA": { "name": "PAK", "score": 95, "wickets": 9, "overs": 14.2 },
            "teamB": { "name": "SL", "score": 0, "wickets": 0, "overs": 0.0 },
            "status": "SL yet to bat."
        }
    ])
}

#[tokio::test]
async fn export_returns_the_full_store() {
    let app = spawn_app().await;
    let token = login_admin(&app).await;
    let client = Client::new();

    let record = create_match(&app, &token, sample_match_form()).await;

    let exported: serde_json::Value = client
        .get(&format!("{}/admin/matches/export", app.address))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let records = exported.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], record["id"]);
    assert_eq!(records[0]["teamA"]["name"], "IND");
}

#[tokio::test]
async fn import_replaces_the_entire_store() {
    let app = spawn_app().await;
    let token = login_admin(&app).await;
    let client = Client::new();

    create_match(&app, &token, sample_match_form()).await;

    let response = client
        .post(&format!("{}/admin/matches/import", app.address))
        .bearer_auth(&token)
        .body(import_payload().to_string())
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let matches: serde_json::Value = client
        .get(&format!("{}/matches", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let records = matches.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], "import-1");
    assert_eq!(records[1]["id"], "import-2");
}

#[tokio::test]
async fn a_structurally_invalid_import_leaves_the_store_unchanged() {
    let app = spawn_app().await;
    let token = login_admin(&app).await;
    let client = Client::new();

    let seeded = create_match(&app, &token, sample_match_form()).await;

    // Second record is missing its teamB block
    let mut payload = import_payload();
    payload[1].as_object_mut().unwrap().remove("teamB");

    let response = client
        .post(&format!("{}/admin/matches/import", app.address))
        .bearer_auth(&token)
        .body(payload.to_string())
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["errors"]["_form"][0].as_str().unwrap().contains("teamB"));

    // All-or-nothing: the seeded record is still the only one there
    let matches: serde_json::Value = client
        .get(&format!("{}/matches", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let records = matches.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], seeded["id"]);
}

#[tokio::test]
async fn an_import_with_out_of_range_wickets_is_rejected_whole() {
    let app = spawn_app().await;
    let token = login_admin(&app).await;
    let client = Client::new();

    let mut payload = import_payload();
    payload[0]["teamA"]["wickets"] = json!(11);

    let response = client
        .post(&format!("{}/admin/matches/import", app.address))
        .bearer_auth(&token)
        .body(payload.to_string())
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);

    let matches: serde_json::Value = client
        .get(&format!("{}/matches", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(matches.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn a_non_array_import_payload_is_rejected() {
    let app = spawn_app().await;
    let token = login_admin(&app).await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/admin/matches/import", app.address))
        .bearer_auth(&token)
        .body(r#"{"not": "an array"}"#)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["errors"]["_form"][0]
        .as_str()
        .unwrap()
        .contains("Invalid match data payload"));
}
