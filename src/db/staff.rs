use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::user::{CreateStaffRequest, StaffMember, StaffRole};

pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<StaffMember>, sqlx::Error> {
    sqlx::query_as::<_, StaffMember>(
        r#"
        SELECT id, name, username, password, role, can_deposit, created_at
        FROM staff
        WHERE username = ?1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub async fn insert(pool: &SqlitePool, form: &CreateStaffRequest) -> Result<Uuid, sqlx::Error> {
    let staff_id = Uuid::new_v4();
    let can_deposit = form.role == StaffRole::BankOfficer;

    sqlx::query(
        r#"
        INSERT INTO staff (id, name, username, password, role, can_deposit, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
    )
    .bind(staff_id)
    .bind(&form.name)
    .bind(&form.username)
    .bind(&form.password)
    .bind(form.role.to_string())
    .bind(can_deposit)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(staff_id)
}

pub async fn count_officers(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM staff WHERE role = 'bankofficer'")
        .fetch_one(pool)
        .await
}
