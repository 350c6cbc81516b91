use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

/// What the registration endpoint handed back for a freshly created customer.
pub struct RegisteredCustomer {
    pub customer_id: String,
    pub username: String,
    pub account_number: String,
    pub debit_card: String,
}

/// Helper function to register a customer through the API
pub async fn register_customer(app_address: &str) -> RegisteredCustomer {
    let client = Client::new();
    let username = format!("customer{}", Uuid::new_v4());

    let registration_request = json!({
        "name": "Test Customer",
        "address": "1 Test Street",
        "contact": "555-0100",
        "ssn": "123-45-6789",
        "username": username,
        "password": "password123"
    });

    let response = client
        .post(&format!("{}/register", app_address))
        .json(&registration_request)
        .send()
        .await
        .expect("Failed to register customer");

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response
        .json()
        .await
        .expect("Failed to parse registration response");

    RegisteredCustomer {
        customer_id: body["data"]["customer_id"]
            .as_str()
            .expect("Customer ID not found")
            .to_string(),
        username,
        account_number: body["data"]["account_number"]
            .as_str()
            .expect("Account number not found")
            .to_string(),
        debit_card: body["data"]["debit_card"]
            .as_str()
            .expect("Debit card not found")
            .to_string(),
    }
}

/// Helper function to create a bank officer, returns the officer's username
pub async fn create_bank_officer(app_address: &str) -> String {
    let client = Client::new();
    let username = format!("officer{}", Uuid::new_v4());

    let staff_request = json!({
        "username": username,
        "password": "password123",
        "role": "bankofficer",
        "name": "Test Officer"
    });

    let response = client
        .post(&format!("{}/admin/staff", app_address))
        .json(&staff_request)
        .send()
        .await
        .expect("Failed to create bank officer");

    assert_eq!(200, response.status().as_u16());

    username
}

/// Helper function to put money on an account via an officer deposit
pub async fn fund_account(app_address: &str, account_number: &str, amount: f64) {
    let client = Client::new();
    let officer = create_bank_officer(app_address).await;

    let deposit_request = json!({
        "account_number": account_number,
        "amount": amount,
        "officer": officer
    });

    let response = client
        .post(&format!("{}/account/deposit", app_address))
        .json(&deposit_request)
        .send()
        .await
        .expect("Failed to fund account");

    assert_eq!(200, response.status().as_u16());
}

/// Helper function to look up the id of a seeded account type by name
pub async fn account_type_id(app_address: &str, name: &str) -> String {
    let client = Client::new();

    let response = client
        .get(&format!("{}/admin/account-types", app_address))
        .send()
        .await
        .expect("Failed to fetch account types");

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response
        .json()
        .await
        .expect("Failed to parse account types response");

    body["data"]
        .as_array()
        .expect("Account types not found")
        .iter()
        .find(|category| category["name"] == name)
        .unwrap_or_else(|| panic!("No account type named {}", name))["id"]
        .as_str()
        .expect("Account type ID not found")
        .to_string()
}
