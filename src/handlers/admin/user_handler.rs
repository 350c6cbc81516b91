use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::db;
use crate::db::helpers::{db_result, ensure_not_exists, require_record};
use crate::models::common::ApiResponse;
use crate::models::user::{ApproveCustomerRequest, UpdateCustomerRequest};
use crate::ok_or_return;

// GET /admin/users - List all customers
pub async fn get_customers(pool: web::Data<SqlitePool>) -> HttpResponse {
    let customers = ok_or_return!(db_result(db::customers::list_all(&pool).await));
    HttpResponse::Ok().json(ApiResponse::success("Customers loaded", customers))
}

// GET /admin/users/pending - Customers still waiting for approval
pub async fn get_pending_customers(pool: web::Data<SqlitePool>) -> HttpResponse {
    let customers = ok_or_return!(db_result(db::customers::list_pending(&pool).await));
    HttpResponse::Ok().json(ApiResponse::success("Pending customers loaded", customers))
}

// POST /admin/users/{id}/approve - Activate a customer and assign their account type
#[tracing::instrument(
    name = "Approving customer",
    skip(pool, payload),
    fields(customer_id = %path)
)]
pub async fn approve_customer(
    path: web::Path<Uuid>,
    payload: web::Json<ApproveCustomerRequest>,
    pool: web::Data<SqlitePool>,
) -> HttpResponse {
    let customer_id = path.into_inner();

    ok_or_return!(require_record(
        db::accounts::find_category(&pool, payload.account_type_id).await,
        "Account type not found"
    ));

    let approved = ok_or_return!(db_result(
        db::customers::approve(&pool, customer_id, payload.account_type_id).await
    ));
    if !approved {
        return HttpResponse::NotFound().json(ApiResponse::<()>::error("Customer not found"));
    }

    HttpResponse::Ok().json(ApiResponse::<()>::success_message("Customer approved"))
}

// PUT /admin/users/{id} - Update customer master data
#[tracing::instrument(
    name = "Updating customer",
    skip(pool, payload),
    fields(customer_id = %path)
)]
pub async fn update_customer(
    path: web::Path<Uuid>,
    payload: web::Json<UpdateCustomerRequest>,
    pool: web::Data<SqlitePool>,
) -> HttpResponse {
    let customer_id = path.into_inner();

    let customer = ok_or_return!(require_record(
        db::customers::find_by_id(&pool, customer_id).await,
        "Customer not found"
    ));

    // A renamed customer must not collide with an existing username
    if customer.username != payload.username {
        ok_or_return!(ensure_not_exists(
            db::customers::find_by_username(&pool, &payload.username).await,
            "Username already taken"
        ));
    }

    ok_or_return!(db_result(
        db::customers::update(&pool, customer_id, &payload).await
    ));

    HttpResponse::Ok().json(ApiResponse::<()>::success_message("Customer updated"))
}

// DELETE /admin/users/{id} - Remove a customer and their accounts
#[tracing::instrument(name = "Deleting customer", skip(pool), fields(customer_id = %path))]
pub async fn delete_customer(path: web::Path<Uuid>, pool: web::Data<SqlitePool>) -> HttpResponse {
    let customer_id = path.into_inner();

    let deleted = ok_or_return!(db_result(
        db::customers::delete_with_accounts(&pool, customer_id).await
    ));
    if !deleted {
        return HttpResponse::NotFound().json(ApiResponse::<()>::error("Customer not found"));
    }

    HttpResponse::Ok().json(ApiResponse::<()>::success_message("Customer deleted"))
}

// GET /admin/account-types - The categories offered when approving a customer
pub async fn list_account_types(pool: web::Data<SqlitePool>) -> HttpResponse {
    let categories = ok_or_return!(db_result(db::accounts::list_categories(&pool).await));
    HttpResponse::Ok().json(ApiResponse::success("Account types loaded", categories))
}
