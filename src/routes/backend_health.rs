use actix_web::{get, HttpResponse};

use crate::handlers::backend_health_handler::backend_health_check;

#[get("/backend_health")]
pub async fn backend_health() -> HttpResponse {
    backend_health_check().await
}
