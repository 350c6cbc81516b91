use actix_web::{web, HttpResponse};

use crate::handlers::account::helper::ledger_error_response;
use crate::models::common::ApiResponse;
use crate::models::transaction::TransferRequest;
use crate::services::LedgerService;

#[tracing::instrument(
    name = "Transferring funds",
    skip(payload, ledger),
    fields(
        sender_account = %payload.sender_account,
        receiver_account = %payload.receiver_account
    )
)]
pub async fn transfer(
    payload: web::Json<TransferRequest>,
    ledger: web::Data<LedgerService>,
) -> HttpResponse {
    match ledger
        .transfer(
            &payload.sender_account,
            &payload.receiver_account,
            payload.amount,
        )
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::success_message(
            "Transfer completed successfully",
        )),
        Err(e) => ledger_error_response(e),
    }
}
