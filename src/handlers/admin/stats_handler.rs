use actix_web::{web, HttpResponse};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::db::helpers::db_result;
use crate::models::common::ApiResponse;
use crate::ok_or_return;

#[derive(Serialize)]
pub struct AdminDashboardStats {
    pub total_customers: i64,
    pub bank_officers: i64,
    pub total_transactions: i64,
}

// GET /admin/dashboard - Headline totals for the admin landing page
pub async fn dashboard_stats(pool: web::Data<SqlitePool>) -> HttpResponse {
    let total_customers = ok_or_return!(db_result(db::customers::count(&pool).await));
    let bank_officers = ok_or_return!(db_result(db::staff::count_officers(&pool).await));
    let total_transactions = ok_or_return!(db_result(db::transactions::count(&pool).await));

    HttpResponse::Ok().json(ApiResponse::success(
        "Dashboard stats loaded",
        AdminDashboardStats {
            total_customers,
            bank_officers,
            total_transactions,
        },
    ))
}
