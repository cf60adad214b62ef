use std::net::TcpListener;
use std::sync::Arc;

use criclive_backend::run;
use criclive_backend::config::settings::{get_config, get_jwt_settings};
use criclive_backend::db::{FileMatchStore, MatchStore};
use criclive_backend::services::NarratorService;
use criclive_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "criclive-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let jwt_settings = get_jwt_settings(&config);
    let admin = config.application.admin_credentials();
    let narrator = NarratorService::new(&config.narrator);

    let store: Arc<dyn MatchStore> = Arc::new(FileMatchStore::new(&config.storage.data_file));

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Listening on {}", address);

    run(listener, store, jwt_settings, admin, narrator)?.await
}
