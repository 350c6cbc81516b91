use actix_web::{web, HttpResponse};
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::db;
use crate::db::helpers::ensure_not_exists;
use crate::models::common::ApiResponse;
use crate::models::user::CreateStaffRequest;
use crate::ok_or_return;

#[derive(Serialize)]
pub struct CreatedStaff {
    pub id: Uuid,
    pub username: String,
    pub role: String,
}

// POST /admin/staff - Create an admin or bank officer account
#[tracing::instrument(
    name = "Creating staff account",
    skip(payload, pool),
    fields(
        username = %payload.username,
        role = %payload.role
    )
)]
pub async fn create_staff(
    payload: web::Json<CreateStaffRequest>,
    pool: web::Data<SqlitePool>,
) -> HttpResponse {
    ok_or_return!(ensure_not_exists(
        db::staff::find_by_username(&pool, &payload.username).await,
        "Username already taken"
    ));

    match db::staff::insert(&pool, &payload).await {
        Ok(staff_id) => HttpResponse::Ok().json(ApiResponse::success(
            "Staff account created",
            CreatedStaff {
                id: staff_id,
                username: payload.username.clone(),
                role: payload.role.to_string(),
            },
        )),
        Err(e) => {
            tracing::error!("Failed to create staff account: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to create staff account"))
        }
    }
}
