use actix_web::HttpResponse;

use crate::models::common::ApiResponse;
use crate::services::ledger::LedgerError;

/// Map a ledger failure to its HTTP response. Missing parties are 404,
/// rejected amounts are 400, a revoked deposit permission is 403.
pub fn ledger_error_response(error: LedgerError) -> HttpResponse {
    match &error {
        LedgerError::AccountNotFound(_)
        | LedgerError::CardNotFound
        | LedgerError::OfficerNotFound(_) => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(error.to_string()))
        }
        LedgerError::DepositNotPermitted(_) => {
            HttpResponse::Forbidden().json(ApiResponse::<()>::error(error.to_string()))
        }
        LedgerError::InsufficientFunds | LedgerError::NonPositiveAmount => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(error.to_string()))
        }
        LedgerError::Database(e) => {
            tracing::error!("Database error during ledger operation: {:?}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Database error"))
        }
    }
}
