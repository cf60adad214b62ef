use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use actix_cors::Cors;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub mod config;
pub mod db;
mod handlers;
mod middleware;
pub mod models;
mod routes;
pub mod scoring;
pub mod services;
pub mod telemetry;

use crate::config::jwt::JwtSettings;
use crate::config::settings::AdminCredentials;
use crate::db::MatchStore;
use crate::routes::init_routes;
use crate::services::NarratorService;

pub fn run(
    listener: TcpListener,
    store: Arc<dyn MatchStore>,
    jwt_settings: JwtSettings,
    admin: AdminCredentials,
    narrator: NarratorService,
) -> Result<Server, std::io::Error> {
    // web::Data wraps an Arc; Data::from reuses the one we already own so
    // every worker shares the same store.
    let store_data: web::Data<dyn MatchStore> = web::Data::from(store);
    let jwt_settings = web::Data::new(jwt_settings);
    let admin = web::Data::new(admin);
    let narrator = web::Data::new(narrator);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("https://criclive.fly.dev")
            .allowed_methods(vec!["GET", "POST", "PUT"])
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(store_data.clone())
            .app_data(jwt_settings.clone())
            .app_data(admin.clone())
            .app_data(narrator.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
