use reqwest::Client;
use serde_json::json;

mod common;
use common::bank_helpers::{fund_account, register_customer};
use common::utils::spawn_app;

#[tokio::test]
async fn transfer_moves_funds_and_writes_both_ledger_legs() {
    // Arrange
    let test_app = spawn_app().await;
    let client = Client::new();
    let sender = register_customer(&test_app.address).await;
    let receiver = register_customer(&test_app.address).await;
    fund_account(&test_app.address, &sender.account_number, 500.0).await;

    let transfer_request = json!({
        "sender_account": sender.account_number,
        "receiver_account": receiver.account_number,
        "amount": 120.5
    });

    // Act
    let response = client
        .post(&format!("{}/account/transfer", &test_app.address))
        .json(&transfer_request)
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(200, response.status().as_u16());

    let sender_balance: f64 =
        sqlx::query_scalar("SELECT balance FROM accounts WHERE account_number = ?1")
            .bind(&sender.account_number)
            .fetch_one(&test_app.db_pool)
            .await
            .expect("Failed to fetch sender account.");
    assert_eq!(sender_balance, 379.5);

    let receiver_balance: f64 =
        sqlx::query_scalar("SELECT balance FROM accounts WHERE account_number = ?1")
            .bind(&receiver.account_number)
            .fetch_one(&test_app.db_pool)
            .await
            .expect("Failed to fetch receiver account.");
    assert_eq!(receiver_balance, 120.5);

    // The debit leg is filed under the sender and points at the receiver
    let (amount, kind, counterparty): (f64, String, Option<String>) = sqlx::query_as(
        r#"
        SELECT amount, kind, receiver_account
        FROM transactions
        WHERE account_number = ?1 AND kind = 'Transfer Debit'
        "#,
    )
    .bind(&sender.account_number)
    .fetch_one(&test_app.db_pool)
    .await
    .expect("Failed to fetch debit leg.");
    assert_eq!(amount, -120.5);
    assert_eq!(kind, "Transfer Debit");
    assert_eq!(counterparty, Some(receiver.account_number.clone()));

    // The credit leg is filed under the receiver and points back at the sender
    let (amount, kind, counterparty): (f64, String, Option<String>) = sqlx::query_as(
        r#"
        SELECT amount, kind, sender_account
        FROM transactions
        WHERE account_number = ?1 AND kind = 'Transfer Credit'
        "#,
    )
    .bind(&receiver.account_number)
    .fetch_one(&test_app.db_pool)
    .await
    .expect("Failed to fetch credit leg.");
    assert_eq!(amount, 120.5);
    assert_eq!(kind, "Transfer Credit");
    assert_eq!(counterparty, Some(sender.account_number.clone()));
}

#[tokio::test]
async fn transfer_with_insufficient_funds_is_rejected() {
    // Arrange
    let test_app = spawn_app().await;
    let client = Client::new();
    let sender = register_customer(&test_app.address).await;
    let receiver = register_customer(&test_app.address).await;
    fund_account(&test_app.address, &sender.account_number, 50.0).await;

    let transfer_request = json!({
        "sender_account": sender.account_number,
        "receiver_account": receiver.account_number,
        "amount": 100.0
    });

    // Act
    let response = client
        .post(&format!("{}/account/transfer", &test_app.address))
        .json(&transfer_request)
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(400, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Insufficient funds");

    // Balances are untouched
    let sender_balance: f64 =
        sqlx::query_scalar("SELECT balance FROM accounts WHERE account_number = ?1")
            .bind(&sender.account_number)
            .fetch_one(&test_app.db_pool)
            .await
            .expect("Failed to fetch sender account.");
    assert_eq!(sender_balance, 50.0);

    let receiver_balance: f64 =
        sqlx::query_scalar("SELECT balance FROM accounts WHERE account_number = ?1")
            .bind(&receiver.account_number)
            .fetch_one(&test_app.db_pool)
            .await
            .expect("Failed to fetch receiver account.");
    assert_eq!(receiver_balance, 0.0);
}

#[tokio::test]
async fn transfer_to_an_unknown_account_moves_nothing() {
    // Arrange
    let test_app = spawn_app().await;
    let client = Client::new();
    let sender = register_customer(&test_app.address).await;
    fund_account(&test_app.address, &sender.account_number, 500.0).await;

    let transfer_request = json!({
        "sender_account": sender.account_number,
        "receiver_account": "ffffffffff",
        "amount": 100.0
    });

    // Act
    let response = client
        .post(&format!("{}/account/transfer", &test_app.address))
        .json(&transfer_request)
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(404, response.status().as_u16());

    // The sender keeps their money and no transfer legs were written
    let sender_balance: f64 =
        sqlx::query_scalar("SELECT balance FROM accounts WHERE account_number = ?1")
            .bind(&sender.account_number)
            .fetch_one(&test_app.db_pool)
            .await
            .expect("Failed to fetch sender account.");
    assert_eq!(sender_balance, 500.0);

    let transfer_legs: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM transactions WHERE kind LIKE 'Transfer%'")
            .fetch_one(&test_app.db_pool)
            .await
            .expect("Failed to count transactions.");
    assert_eq!(transfer_legs, 0);
}

#[tokio::test]
async fn transfer_from_an_unknown_account_returns_404() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let receiver = register_customer(&test_app.address).await;

    let transfer_request = json!({
        "sender_account": "ffffffffff",
        "receiver_account": receiver.account_number,
        "amount": 100.0
    });

    let response = client
        .post(&format!("{}/account/transfer", &test_app.address))
        .json(&transfer_request)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn non_positive_transfer_amounts_are_rejected() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let sender = register_customer(&test_app.address).await;
    let receiver = register_customer(&test_app.address).await;
    fund_account(&test_app.address, &sender.account_number, 100.0).await;

    let transfer_request = json!({
        "sender_account": sender.account_number,
        "receiver_account": receiver.account_number,
        "amount": -10.0
    });

    let response = client
        .post(&format!("{}/account/transfer", &test_app.address))
        .json(&transfer_request)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
}
