use actix_web::{web, HttpResponse};

use crate::db::{MatchStore, StoreError};
use crate::models::common::ApiResponse;

// GET /matches - full scoreboard, public
pub async fn list_matches(store: web::Data<dyn MatchStore>) -> HttpResponse {
    match store.list().await {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => {
            tracing::error!("Failed to read match data: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to load match data."))
        }
    }
}

// GET /matches/{id} - one match, public
pub async fn get_match(store: web::Data<dyn MatchStore>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    match store.get_by_id(&id).await {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(StoreError::NotFound) => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error("Match not found"))
        }
        Err(e) => {
            tracing::error!("Failed to read match data: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to load match data."))
        }
    }
}
