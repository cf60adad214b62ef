use actix_web::web;

pub mod auth;
pub mod backend_health;

use crate::handlers::admin::{data_handler, match_handler};
use crate::handlers::scoreboard_handler;
use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health)
        .service(auth::login);

    // Public scoreboard (read-only)
    cfg.service(
        web::scope("/matches")
            .route("", web::get().to(scoreboard_handler::list_matches))
            .route("/{id}", web::get().to(scoreboard_handler::get_match)),
    );

    // Admin routes (require authentication)
    cfg.service(
        web::scope("/admin")
            .wrap(AuthMiddleware)
            .route("/matches", web::post().to(match_handler::create_match))
            .route("/matches/export", web::get().to(data_handler::export_matches))
            .route("/matches/import", web::post().to(data_handler::import_matches))
            .route("/matches/{id}", web::put().to(match_handler::update_match))
            .route("/matches/{id}/live", web::post().to(match_handler::live_update)),
    );
}
