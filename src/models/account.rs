use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::transaction::TransactionRecord;

#[derive(Debug, sqlx::FromRow)]
pub struct Account {
    pub id: Uuid,
    pub account_number: String,
    pub customer_id: Uuid,
    pub balance: f64,
    pub debit_card: String,
    pub created_at: DateTime<Utc>,
}

/// One of the seeded account types a customer gets assigned on approval.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct AccountCategory {
    pub id: Uuid,
    pub name: String,
}

/// Everything the customer dashboard shows about the account itself.
#[derive(Debug, Serialize)]
pub struct AccountDetails {
    pub name: String,
    pub balance: f64,
    pub account_number: String,
    pub debit_card: String,
    pub address: String,
    pub ssn: String,
    pub account_type: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub username: String,
    pub account: AccountDetails,
    pub transactions: Vec<TransactionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transaction: Option<TransactionRecord>,
}
