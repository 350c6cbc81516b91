use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::account::{Account, AccountCategory};

pub async fn find_by_number(
    pool: &SqlitePool,
    account_number: &str,
) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        r#"
        SELECT id, account_number, customer_id, balance, debit_card, created_at
        FROM accounts
        WHERE account_number = ?1
        "#,
    )
    .bind(account_number)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_customer(
    pool: &SqlitePool,
    customer_id: Uuid,
) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        r#"
        SELECT id, account_number, customer_id, balance, debit_card, created_at
        FROM accounts
        WHERE customer_id = ?1
        "#,
    )
    .bind(customer_id)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_debit_card(
    pool: &SqlitePool,
    debit_card: &str,
) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        r#"
        SELECT id, account_number, customer_id, balance, debit_card, created_at
        FROM accounts
        WHERE debit_card = ?1
        "#,
    )
    .bind(debit_card)
    .fetch_optional(pool)
    .await
}

pub async fn find_category(
    pool: &SqlitePool,
    category_id: Uuid,
) -> Result<Option<AccountCategory>, sqlx::Error> {
    sqlx::query_as::<_, AccountCategory>(
        "SELECT id, name FROM account_categories WHERE id = ?1",
    )
    .bind(category_id)
    .fetch_optional(pool)
    .await
}

pub async fn category_name(
    pool: &SqlitePool,
    category_id: Uuid,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT name FROM account_categories WHERE id = ?1")
        .bind(category_id)
        .fetch_optional(pool)
        .await
}

pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<AccountCategory>, sqlx::Error> {
    sqlx::query_as::<_, AccountCategory>(
        "SELECT id, name FROM account_categories ORDER BY name",
    )
    .fetch_all(pool)
    .await
}
