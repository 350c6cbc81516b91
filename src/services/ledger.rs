use sqlx::SqlitePool;

use crate::db;
use crate::db::transactions::NewTransaction;
use crate::models::transaction::TransactionKind;
use crate::utils::money::round_cents;

/// All money movement goes through this service: it validates the parties,
/// applies balance changes and writes the matching ledger rows in one
/// database transaction.
#[derive(Clone)]
pub struct LedgerService {
    pool: SqlitePool,
}

impl LedgerService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Credit an account on behalf of a bank officer. The recorded row
    /// carries the officer as "Bank Officer - <username>" and the amount
    /// rounded to cents.
    pub async fn deposit(
        &self,
        account_number: &str,
        amount: f64,
        officer: &str,
    ) -> Result<(), LedgerError> {
        if amount <= 0.0 {
            return Err(LedgerError::NonPositiveAmount);
        }

        let staff = db::staff::find_by_username(&self.pool, officer)
            .await?
            .ok_or_else(|| LedgerError::OfficerNotFound(officer.to_string()))?;
        if !staff.can_deposit {
            return Err(LedgerError::DepositNotPermitted(officer.to_string()));
        }

        db::accounts::find_by_number(&self.pool, account_number)
            .await?
            .ok_or_else(|| LedgerError::AccountNotFound(account_number.to_string()))?;

        let rounded = round_cents(amount);
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE accounts SET balance = balance + ?1 WHERE account_number = ?2")
            .bind(rounded)
            .bind(account_number)
            .execute(&mut *tx)
            .await?;

        db::transactions::insert(
            &mut *tx,
            NewTransaction {
                account_number,
                sender_account: Some(format!("Bank Officer - {}", officer)),
                receiver_account: None,
                amount: rounded,
                kind: TransactionKind::Deposit,
            },
        )
        .await?;

        tx.commit().await?;

        tracing::info!("Recorded deposit to account {}", account_number);
        Ok(())
    }

    /// Move funds between two accounts. Writes both ledger legs: a debit
    /// filed under the sender and a credit filed under the receiver.
    pub async fn transfer(
        &self,
        sender_account: &str,
        receiver_account: &str,
        amount: f64,
    ) -> Result<(), LedgerError> {
        if amount <= 0.0 {
            return Err(LedgerError::NonPositiveAmount);
        }

        let sender = db::accounts::find_by_number(&self.pool, sender_account)
            .await?
            .ok_or_else(|| LedgerError::AccountNotFound(sender_account.to_string()))?;
        db::accounts::find_by_number(&self.pool, receiver_account)
            .await?
            .ok_or_else(|| LedgerError::AccountNotFound(receiver_account.to_string()))?;

        if sender.balance < amount {
            return Err(LedgerError::InsufficientFunds);
        }

        let rounded = round_cents(amount);
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE accounts SET balance = balance - ?1 WHERE account_number = ?2")
            .bind(rounded)
            .bind(sender_account)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE accounts SET balance = balance + ?1 WHERE account_number = ?2")
            .bind(rounded)
            .bind(receiver_account)
            .execute(&mut *tx)
            .await?;

        db::transactions::insert(
            &mut *tx,
            NewTransaction {
                account_number: sender_account,
                sender_account: None,
                receiver_account: Some(receiver_account.to_string()),
                amount: -rounded,
                kind: TransactionKind::TransferDebit,
            },
        )
        .await?;

        db::transactions::insert(
            &mut *tx,
            NewTransaction {
                account_number: receiver_account,
                sender_account: Some(sender_account.to_string()),
                receiver_account: None,
                amount: rounded,
                kind: TransactionKind::TransferCredit,
            },
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Transferred funds from account {} to account {}",
            sender_account,
            receiver_account
        );
        Ok(())
    }

    /// Debit card purchase. The card resolves to an account; the charge is
    /// recorded as submitted, without rounding.
    pub async fn purchase(&self, debit_card: &str, amount: f64) -> Result<(), LedgerError> {
        if amount <= 0.0 {
            return Err(LedgerError::NonPositiveAmount);
        }

        let account = db::accounts::find_by_debit_card(&self.pool, debit_card)
            .await?
            .ok_or(LedgerError::CardNotFound)?;

        if account.balance < amount {
            return Err(LedgerError::InsufficientFunds);
        }

        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE accounts SET balance = balance - ?1 WHERE account_number = ?2")
            .bind(amount)
            .bind(&account.account_number)
            .execute(&mut *tx)
            .await?;

        db::transactions::insert(
            &mut *tx,
            NewTransaction {
                account_number: &account.account_number,
                sender_account: None,
                receiver_account: None,
                amount: -amount,
                kind: TransactionKind::DebitCardPurchase,
            },
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Recorded card purchase against account {}",
            account.account_number
        );
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Debit card not recognized")]
    CardNotFound,

    #[error("Bank officer not found: {0}")]
    OfficerNotFound(String),

    #[error("Officer is not permitted to take deposits: {0}")]
    DepositNotPermitted(String),

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
