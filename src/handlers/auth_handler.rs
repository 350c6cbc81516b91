// src/handlers/auth_handler.rs
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

use crate::models::auth::LoginRequest;

/// Echoes the submitted login form back in the `LoginPO` record format the
/// legacy clients parse. Credentials are not checked here.
#[tracing::instrument(
    name = "Login attempt",
    skip(login_form),
    fields(
        username = %login_form.username
    )
)]
pub async fn handle_login(login_form: web::Json<LoginRequest>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(login_form.to_string())
}
