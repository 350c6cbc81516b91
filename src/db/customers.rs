use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::user::{
    Customer, CustomerResponse, NewRegistration, RegistrationRequest, UpdateCustomerRequest,
};

pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<Customer>, sqlx::Error> {
    sqlx::query_as::<_, Customer>(
        r#"
        SELECT id, name, address, contact, ssn, username, password,
               is_active, account_type_id, created_at, updated_at
        FROM customers
        WHERE username = ?1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_id(
    pool: &SqlitePool,
    customer_id: Uuid,
) -> Result<Option<Customer>, sqlx::Error> {
    sqlx::query_as::<_, Customer>(
        r#"
        SELECT id, name, address, contact, ssn, username, password,
               is_active, account_type_id, created_at, updated_at
        FROM customers
        WHERE id = ?1
        "#,
    )
    .bind(customer_id)
    .fetch_optional(pool)
    .await
}

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<CustomerResponse>, sqlx::Error> {
    sqlx::query_as::<_, CustomerResponse>(
        r#"
        SELECT id, name, address, contact, ssn, username, is_active, created_at
        FROM customers
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn list_pending(pool: &SqlitePool) -> Result<Vec<CustomerResponse>, sqlx::Error> {
    sqlx::query_as::<_, CustomerResponse>(
        r#"
        SELECT id, name, address, contact, ssn, username, is_active, created_at
        FROM customers
        WHERE is_active = 0
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Create the customer and their account in one transaction. New customers
/// start inactive with no account type; both are set on approval.
pub async fn insert_customer_with_account(
    pool: &SqlitePool,
    form: &RegistrationRequest,
    account_number: &str,
    debit_card: &str,
) -> Result<NewRegistration, sqlx::Error> {
    let customer_id = Uuid::new_v4();
    let now = Utc::now();

    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO customers (id, name, address, contact, ssn, username, password,
                               is_active, account_type_id, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0, NULL, ?8, ?8)
        "#,
    )
    .bind(customer_id)
    .bind(&form.name)
    .bind(&form.address)
    .bind(&form.contact)
    .bind(&form.ssn)
    .bind(&form.username)
    .bind(&form.password)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO accounts (id, account_number, customer_id, balance, debit_card, created_at)
        VALUES (?1, ?2, ?3, 0, ?4, ?5)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(account_number)
    .bind(customer_id)
    .bind(debit_card)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(NewRegistration {
        customer_id,
        account_number: account_number.to_string(),
        debit_card: debit_card.to_string(),
    })
}

pub async fn approve(
    pool: &SqlitePool,
    customer_id: Uuid,
    account_type_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE customers
        SET is_active = 1, account_type_id = ?1, updated_at = ?2
        WHERE id = ?3
        "#,
    )
    .bind(account_type_id)
    .bind(Utc::now())
    .bind(customer_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn update(
    pool: &SqlitePool,
    customer_id: Uuid,
    form: &UpdateCustomerRequest,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE customers
        SET name = ?1, address = ?2, contact = ?3, ssn = ?4, username = ?5, updated_at = ?6
        WHERE id = ?7
        "#,
    )
    .bind(&form.name)
    .bind(&form.address)
    .bind(&form.contact)
    .bind(&form.ssn)
    .bind(&form.username)
    .bind(Utc::now())
    .bind(customer_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Remove the customer and their accounts together. Ledger rows are kept;
/// the admin transactions view falls back to "Unknown" for them.
pub async fn delete_with_accounts(
    pool: &SqlitePool,
    customer_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM accounts WHERE customer_id = ?1")
        .bind(customer_id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM customers WHERE id = ?1")
        .bind(customer_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(result.rows_affected() > 0)
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
        .fetch_one(pool)
        .await
}
