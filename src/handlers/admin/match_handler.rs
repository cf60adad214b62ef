use actix_web::{web, HttpResponse};

use crate::db::{MatchStore, StoreError};
use crate::models::common::ApiResponse;
use crate::models::match_data::{LiveUpdateRequest, MatchForm, MatchRecord};
use crate::scoring::live_update::apply_live_update;
use crate::scoring::validation::{validate_match_form, ValidationErrors, ValidationOptions};
use crate::services::NarratorService;

fn validation_failure(errors: ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "errors": errors }))
}

fn save_failure(e: StoreError) -> HttpResponse {
    tracing::error!("Failed to persist match data: {}", e);
    HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Failed to save match data."))
}

// POST /admin/matches - create a match from a form submission. A blank
// status is allowed here; the narrator fills it before anything is stored.
pub async fn create_match(
    store: web::Data<dyn MatchStore>,
    narrator: web::Data<NarratorService>,
    form: web::Json<MatchForm>,
) -> HttpResponse {
    let options = ValidationOptions {
        require_status: false,
        ..Default::default()
    };
    let mut payload = match validate_match_form(&form, &options) {
        Ok(payload) => payload,
        Err(errors) => return validation_failure(errors),
    };

    if payload.status.trim().is_empty() {
        payload.status = narrator
            .generate_status(&payload.team_a, &payload.team_b)
            .await;
    }

    match store.insert(payload).await {
        Ok(record) => {
            tracing::info!("Created match {}", record.id);
            HttpResponse::Created().json(ApiResponse::success("Match created", record))
        }
        Err(e) => save_failure(e),
    }
}

// PUT /admin/matches/{id} - full-field edit. Direct edits must carry a
// status line of their own.
pub async fn update_match(
    store: web::Data<dyn MatchStore>,
    path: web::Path<String>,
    form: web::Json<MatchForm>,
) -> HttpResponse {
    let id = path.into_inner();
    let payload = match validate_match_form(&form, &ValidationOptions::default()) {
        Ok(payload) => payload,
        Err(errors) => return validation_failure(errors),
    };

    match store.replace_by_id(&id, payload).await {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success("Match updated", record)),
        Err(StoreError::NotFound) => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error("Match not found"))
        }
        Err(e) => save_failure(e),
    }
}

// POST /admin/matches/{id}/live - incremental scoreboard delta. Out-of-range
// results are clamped by the engine, not rejected; `narrate: true` refreshes
// the status line afterwards (falling back to a fixed sentence if the
// narrator is down).
#[tracing::instrument(
    name = "Live scoreboard update",
    skip(store, narrator, path, body),
    fields(team = ?body.team, field = ?body.field, delta = %body.delta)
)]
pub async fn live_update(
    store: web::Data<dyn MatchStore>,
    narrator: web::Data<NarratorService>,
    path: web::Path<String>,
    body: web::Json<LiveUpdateRequest>,
) -> HttpResponse {
    let id = path.into_inner();

    let record = match store.get_by_id(&id).await {
        Ok(record) => record,
        Err(StoreError::NotFound) => {
            return HttpResponse::NotFound().json(ApiResponse::<()>::error("Match not found"));
        }
        Err(e) => return save_failure(e),
    };

    let mut updated: MatchRecord = apply_live_update(&record, body.team, body.field, body.delta);

    if body.narrate {
        updated.status = narrator
            .generate_status(&updated.team_a, &updated.team_b)
            .await;
    }

    match store.replace_by_id(&id, updated.into_payload()).await {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success("Match updated", record)),
        Err(StoreError::NotFound) => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error("Match not found"))
        }
        Err(e) => save_failure(e),
    }
}
