use actix_web::{web, HttpResponse};

use crate::handlers::account::helper::ledger_error_response;
use crate::models::common::ApiResponse;
use crate::models::transaction::PaymentRequest;
use crate::services::LedgerService;

// The debit card number never goes into the logs.
#[tracing::instrument(name = "Processing card payment", skip(payload, ledger))]
pub async fn payment(
    payload: web::Json<PaymentRequest>,
    ledger: web::Data<LedgerService>,
) -> HttpResponse {
    match ledger
        .purchase(&payload.debit_card_number, payload.amount)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::success_message("Payment successful")),
        Err(e) => ledger_error_response(e),
    }
}
