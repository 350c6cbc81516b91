use actix_web::{post, web, HttpResponse};
use sqlx::SqlitePool;

use crate::handlers::registration_handler::register_customer;
use crate::models::user::RegistrationRequest;

#[post("/register")]
pub async fn register(
    form: web::Json<RegistrationRequest>,
    pool: web::Data<SqlitePool>,
) -> HttpResponse {
    register_customer(form, pool).await
}
