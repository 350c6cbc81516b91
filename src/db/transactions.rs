use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

use crate::models::transaction::{LedgerEntry, TransactionKind, TransactionRecord};

/// A ledger row about to be written. `account_number` is the account the
/// row is filed under.
pub struct NewTransaction<'a> {
    pub account_number: &'a str,
    pub sender_account: Option<String>,
    pub receiver_account: Option<String>,
    pub amount: f64,
    pub kind: TransactionKind,
}

/// Takes a connection rather than a pool so money movements can write
/// their ledger rows inside the same transaction as the balance updates.
pub async fn insert(
    conn: &mut SqliteConnection,
    entry: NewTransaction<'_>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO transactions (id, account_number, sender_account, receiver_account,
                                  amount, kind, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(entry.account_number)
    .bind(entry.sender_account)
    .bind(entry.receiver_account)
    .bind(entry.amount)
    .bind(entry.kind.to_string())
    .bind(Utc::now())
    .execute(conn)
    .await?;

    Ok(())
}

/// Everything filed under the account plus transfers addressed to it,
/// newest first.
pub async fn history_for_account(
    pool: &SqlitePool,
    account_number: &str,
) -> Result<Vec<TransactionRecord>, sqlx::Error> {
    sqlx::query_as::<_, TransactionRecord>(
        r#"
        SELECT id, account_number, sender_account, receiver_account, amount, kind, created_at
        FROM transactions
        WHERE account_number = ?1 OR receiver_account = ?1
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .bind(account_number)
    .fetch_all(pool)
    .await
}

/// Full ledger for the admin view, each row joined with the owning
/// customer's name. Accounts that no longer resolve show as "Unknown".
pub async fn ledger_with_customer_names(
    pool: &SqlitePool,
) -> Result<Vec<LedgerEntry>, sqlx::Error> {
    sqlx::query_as::<_, LedgerEntry>(
        r#"
        SELECT t.id, t.account_number, COALESCE(c.name, 'Unknown') AS account_name,
               t.sender_account, t.receiver_account, t.amount, t.kind, t.created_at
        FROM transactions t
        LEFT JOIN accounts a ON a.account_number = t.account_number
        LEFT JOIN customers c ON c.id = a.customer_id
        ORDER BY t.created_at DESC, t.rowid DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM transactions")
        .fetch_one(pool)
        .await
}
