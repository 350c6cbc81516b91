use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::db;
use crate::db::helpers::db_result;
use crate::models::common::ApiResponse;
use crate::ok_or_return;

// GET /admin/transactions - The full ledger with customer names, newest first
pub async fn list_transactions(pool: web::Data<SqlitePool>) -> HttpResponse {
    let transactions = ok_or_return!(db_result(
        db::transactions::ledger_with_customer_names(&pool).await
    ));
    HttpResponse::Ok().json(ApiResponse::success("Transactions loaded", transactions))
}
