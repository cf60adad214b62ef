use actix_web::{web, HttpResponse};

use crate::db::MatchStore;
use crate::models::common::ApiResponse;
use crate::scoring::validation::parse_import_payload;

// GET /admin/matches/export - the raw record list, suitable for re-import
pub async fn export_matches(store: web::Data<dyn MatchStore>) -> HttpResponse {
    match store.list().await {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => {
            tracing::error!("Failed to read match data for export: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to load match data."))
        }
    }
}

// POST /admin/matches/import - wholesale replacement of the store from a
// JSON payload. All-or-nothing: any structural or per-record failure leaves
// the existing records untouched.
pub async fn import_matches(store: web::Data<dyn MatchStore>, body: web::Bytes) -> HttpResponse {
    let raw = match std::str::from_utf8(&body) {
        Ok(raw) => raw,
        Err(_) => {
            return HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error("Import payload is not valid UTF-8."));
        }
    };

    let records = match parse_import_payload(raw) {
        Ok(records) => records,
        Err(errors) => {
            tracing::info!("Rejected match import: {:?}", errors);
            return HttpResponse::BadRequest().json(serde_json::json!({ "errors": errors }));
        }
    };

    let count = records.len();
    match store.replace_all(records).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::success_message(format!(
            "Imported {} matches.",
            count
        ))),
        Err(e) => {
            tracing::error!("Failed to persist imported matches: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to save match data."))
        }
    }
}
