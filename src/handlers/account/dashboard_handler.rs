use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::db;
use crate::db::helpers::{db_result, require_record};
use crate::models::account::{AccountDetails, DashboardResponse};
use crate::models::common::ApiResponse;
use crate::ok_or_return;

#[tracing::instrument(name = "Loading customer dashboard", skip(pool), fields(username = %username))]
pub async fn dashboard(username: web::Path<String>, pool: web::Data<SqlitePool>) -> HttpResponse {
    let username = username.into_inner();

    let customer = ok_or_return!(require_record(
        db::customers::find_by_username(&pool, &username).await,
        "Customer not found"
    ));
    let account = ok_or_return!(require_record(
        db::accounts::find_by_customer(&pool, customer.id).await,
        "No account found for the user"
    ));

    let transactions = ok_or_return!(db_result(
        db::transactions::history_for_account(&pool, &account.account_number).await
    ));

    let account_type = match customer.account_type_id {
        Some(category_id) => {
            ok_or_return!(db_result(
                db::accounts::category_name(&pool, category_id).await
            ))
            .unwrap_or_else(|| "Not Available".to_string())
        }
        None => "Not Available".to_string(),
    };

    let last_transaction = transactions.first().cloned();

    let response = DashboardResponse {
        username: customer.username,
        account: AccountDetails {
            name: customer.name,
            balance: account.balance,
            account_number: account.account_number,
            debit_card: account.debit_card,
            address: customer.address,
            ssn: customer.ssn,
            account_type,
        },
        transactions,
        last_transaction,
    };

    HttpResponse::Ok().json(ApiResponse::success("Dashboard loaded", response))
}
