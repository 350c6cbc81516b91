use actix_web::{get, post, web, HttpResponse};
use sqlx::SqlitePool;

use crate::handlers::account::{
    dashboard_handler, deposit_handler, payment_handler, transfer_handler,
};
use crate::models::transaction::{DepositRequest, PaymentRequest, TransferRequest};
use crate::services::LedgerService;

#[post("/deposit")]
pub async fn deposit(
    payload: web::Json<DepositRequest>,
    ledger: web::Data<LedgerService>,
) -> HttpResponse {
    deposit_handler::deposit(payload, ledger).await
}

#[post("/transfer")]
pub async fn transfer(
    payload: web::Json<TransferRequest>,
    ledger: web::Data<LedgerService>,
) -> HttpResponse {
    transfer_handler::transfer(payload, ledger).await
}

#[post("/payment")]
pub async fn payment(
    payload: web::Json<PaymentRequest>,
    ledger: web::Data<LedgerService>,
) -> HttpResponse {
    payment_handler::payment(payload, ledger).await
}

#[get("/dashboard/{username}")]
pub async fn dashboard(username: web::Path<String>, pool: web::Data<SqlitePool>) -> HttpResponse {
    dashboard_handler::dashboard(username, pool).await
}
