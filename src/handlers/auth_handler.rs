// src/handlers/auth_handler.rs
use actix_web::{web, HttpResponse};
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::ExposeSecret;

use crate::config::jwt::JwtSettings;
use crate::config::settings::AdminCredentials;
use crate::middleware::auth::Claims;
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::models::common::ApiResponse;

#[tracing::instrument(
    name = "Admin login attempt",
    skip(login_form, admin, jwt_settings),
    fields(
        username = %login_form.username
    )
)]
pub async fn login_admin(
    login_form: web::Json<LoginRequest>,
    admin: web::Data<AdminCredentials>,
    jwt_settings: web::Data<JwtSettings>,
) -> HttpResponse {
    if login_form.username != admin.username
        || login_form.password.expose_secret() != admin.password.expose_secret()
    {
        tracing::info!("Invalid username or password");
        return HttpResponse::Unauthorized()
            .json(ApiResponse::<()>::error("Invalid username or password"));
    }

    let claims = Claims {
        sub: admin.username.clone(),
        username: admin.username.clone(),
        exp: jwt_settings.expiry_timestamp(),
    };

    let token = match encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_settings.secret.expose_secret().as_bytes()),
    ) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("Error generating JWT token: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    HttpResponse::Ok().json(LoginResponse { token })
}
