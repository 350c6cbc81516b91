use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::db;
use crate::db::helpers::ensure_not_exists;
use crate::models::common::ApiResponse;
use crate::models::user::RegistrationRequest;
use crate::ok_or_return;
use crate::utils::account_numbers::{generate_account_number, generate_debit_card_number};

#[tracing::instrument(
    name = "Registering a new customer",
    // Don't show arguments
    skip(form, pool),
    fields(
        username = %form.username
    )
)]
pub async fn register_customer(
    form: web::Json<RegistrationRequest>,
    pool: web::Data<SqlitePool>,
) -> HttpResponse {
    ok_or_return!(ensure_not_exists(
        db::customers::find_by_username(&pool, &form.username).await,
        "Username already taken"
    ));

    let account_number = generate_account_number();
    let debit_card = generate_debit_card_number();

    match db::customers::insert_customer_with_account(&pool, &form, &account_number, &debit_card)
        .await
    {
        Ok(registration) => HttpResponse::Ok().json(ApiResponse::success(
            "Registration received, awaiting approval",
            registration,
        )),
        Err(e) => {
            tracing::error!("Failed to register customer: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to register customer"))
        }
    }
}
