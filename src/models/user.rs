use std::fmt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer row as stored. The password never leaves the database layer;
/// API-facing views go through [`CustomerResponse`].
#[derive(Debug, sqlx::FromRow)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub contact: String,
    pub ssn: String,
    pub username: String,
    pub password: String,
    pub is_active: bool,
    pub account_type_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Customer view returned by the admin endpoints.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub contact: String,
    pub ssn: String,
    pub username: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub address: String,
    pub contact: String,
    pub ssn: String,
    pub username: String,
    pub password: String,
}

impl fmt::Display for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Username: {}, Name: {}", self.username, self.name)
    }
}

/// Returned to the caller after a successful registration.
#[derive(Debug, Serialize)]
pub struct NewRegistration {
    pub customer_id: Uuid,
    pub account_number: String,
    pub debit_card: String,
}

#[derive(Deserialize)]
pub struct UpdateCustomerRequest {
    pub name: String,
    pub address: String,
    pub contact: String,
    pub ssn: String,
    pub username: String,
}

#[derive(Deserialize)]
pub struct ApproveCustomerRequest {
    pub account_type_id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Admin,
    BankOfficer,
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaffRole::Admin => write!(f, "admin"),
            StaffRole::BankOfficer => write!(f, "bankofficer"),
        }
    }
}

/// A staff row as stored. Bank officers carry the deposit permission,
/// admins manage customers and staff.
#[derive(Debug, sqlx::FromRow)]
pub struct StaffMember {
    pub id: Uuid,
    pub name: Option<String>,
    pub username: String,
    pub password: String,
    pub role: String,
    pub can_deposit: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateStaffRequest {
    pub username: String,
    pub password: String,
    pub role: StaffRole,
    #[serde(default)]
    pub name: Option<String>,
}
