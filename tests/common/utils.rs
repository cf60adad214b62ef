use std::net::TcpListener;
use std::sync::Arc;

use once_cell::sync::Lazy;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tempfile::TempDir;

use criclive_backend::run;
use criclive_backend::config::settings::{get_config, get_jwt_settings, NarratorSettings};
use criclive_backend::db::{FileMatchStore, MatchStore};
use criclive_backend::services::NarratorService;
use criclive_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub store: Arc<dyn MatchStore>,
    pub admin_username: String,
    pub admin_password: String,
    // Keeps the per-test store directory alive until the test ends
    _data_dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let configuration = get_config().expect("Failed to read configuration.");
    let jwt_settings = get_jwt_settings(&configuration);
    let admin = configuration.application.admin_credentials();

    // Every test gets its own throwaway store file
    let data_dir = TempDir::new().expect("Failed to create temp dir");
    let store: Arc<dyn MatchStore> =
        Arc::new(FileMatchStore::new(data_dir.path().join("matches.json")));

    // Nothing listens on this port, so every narration request fails fast
    // and the handlers fall back to the fixed status sentence.
    let narrator = NarratorService::new(&NarratorSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        api_key: SecretString::new("test-narrator-key".to_string().into_boxed_str()),
        timeout_secs: 1,
        total_overs: 20,
    });

    let server = run(
        listener,
        store.clone(),
        jwt_settings,
        admin.clone(),
        narrator,
    )
    .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp {
        address,
        store,
        admin_username: admin.username.clone(),
        admin_password: admin.password.expose_secret().to_string(),
        _data_dir: data_dir,
    }
}

pub async fn login_admin(app: &TestApp) -> String {
    let client = Client::new();

    let response = client
        .post(&format!("{}/auth/login", app.address))
        .json(&json!({
            "username": app.admin_username,
            "password": app.admin_password,
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success(), "Admin login failed");

    let body: serde_json::Value = response.json().await.expect("Login response is not JSON.");
    body["token"]
        .as_str()
        .expect("No token in login response")
        .to_string()
}

/// The standard seed form used by the tests: IND 185/5 (19.2) vs AUS 120/8 (17.0).
pub fn sample_match_form() -> serde_json::Value {
    json!({
        "teamAName": "IND",
        "teamAScore": "185",
        "teamAWickets": "5",
        "teamAOvers": "19.2",
        "teamBName": "AUS",
        "teamBScore": "120",
        "teamBWickets": "8",
        "teamBOvers": "17.0",
        "status": "IND needs 15 runs in 4 balls to win."
    })
}

/// Create a match through the admin API and return the stored record.
pub async fn create_match(
    app: &TestApp,
    token: &str,
    form: serde_json::Value,
) -> serde_json::Value {
    let client = Client::new();

    let response = client
        .post(&format!("{}/admin/matches", app.address))
        .bearer_auth(token)
        .json(&form)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201, "Match creation failed");

    let body: serde_json::Value = response.json().await.expect("Create response is not JSON.");
    body["data"].clone()
}
