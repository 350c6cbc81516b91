use std::fmt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ledger row labels. These exact strings are stored in the `kind` column
/// and shown on customer statements, so they are renamed rather than
/// derived from the variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Deposit,
    #[serde(rename = "Transfer Debit")]
    TransferDebit,
    #[serde(rename = "Transfer Credit")]
    TransferCredit,
    #[serde(rename = "Debit Card Purchase")]
    DebitCardPurchase,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::TransferDebit => "Transfer Debit",
            TransactionKind::TransferCredit => "Transfer Credit",
            TransactionKind::DebitCardPurchase => "Debit Card Purchase",
        };
        write!(f, "{}", label)
    }
}

/// A ledger row as stored and as shown in dashboards. `account_number` is
/// the account the row is filed under; transfers additionally carry the
/// counterparty account.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub account_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_account: Option<String>,
    pub amount: f64,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

/// Admin ledger view: a transaction joined with the owning customer's name.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub account_number: String,
    pub account_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_account: Option<String>,
    pub amount: f64,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct DepositRequest {
    pub account_number: String,
    pub amount: f64,
    pub officer: String,
}

#[derive(Deserialize)]
pub struct TransferRequest {
    pub sender_account: String,
    pub receiver_account: String,
    pub amount: f64,
}

#[derive(Deserialize)]
pub struct PaymentRequest {
    pub debit_card_number: String,
    pub amount: f64,
}
