// src/routes/auth.rs
use actix_web::{post, web, HttpResponse};

use crate::config::jwt::JwtSettings;
use crate::config::settings::AdminCredentials;
use crate::handlers::auth_handler::login_admin;
use crate::models::auth::LoginRequest;

#[post("/auth/login")]
async fn login(
    login_form: web::Json<LoginRequest>,
    admin: web::Data<AdminCredentials>,
    jwt_settings: web::Data<JwtSettings>,
) -> HttpResponse {
    login_admin(login_form, admin, jwt_settings).await
}
