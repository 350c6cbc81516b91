// src/routes/auth.rs
use actix_web::{post, web, HttpResponse};

use crate::handlers::auth_handler::handle_login;
use crate::models::auth::LoginRequest;

#[post("/authLogin")]
pub async fn auth_login(login_form: web::Json<LoginRequest>) -> HttpResponse {
    handle_login(login_form).await
}
