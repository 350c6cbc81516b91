use actix_web::{web, HttpResponse};

use crate::handlers::account::helper::ledger_error_response;
use crate::models::common::ApiResponse;
use crate::models::transaction::DepositRequest;
use crate::services::LedgerService;

#[tracing::instrument(
    name = "Depositing funds",
    skip(payload, ledger),
    fields(
        account_number = %payload.account_number,
        officer = %payload.officer
    )
)]
pub async fn deposit(
    payload: web::Json<DepositRequest>,
    ledger: web::Data<LedgerService>,
) -> HttpResponse {
    match ledger
        .deposit(&payload.account_number, payload.amount, &payload.officer)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::success_message("Deposit successful")),
        Err(e) => ledger_error_response(e),
    }
}
