// src/models/auth.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload of the legacy `/authLogin` endpoint.
///
/// Fields left out of the request body deserialize to empty strings, so the
/// rendered record is identical for absent and explicitly-empty values.
#[derive(Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Display for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The `LoginPO` tag is the wire format consumed by the old clients.
        write!(
            f,
            "LoginPO{{username='{}', password='{}'}}",
            self.username, self.password
        )
    }
}
