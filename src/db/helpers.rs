//! Database query helper functions to reduce boilerplate error handling.
//!
//! These helpers simplify common patterns like:
//! - Fetching a required record (NotFound if missing)
//! - Ensuring a record doesn't exist (Conflict if it does)
//!
//! # Usage
//!
//! ```ignore
//! let customer = ok_or_return!(require_record(
//!     db::customers::find_by_username(pool, &username).await,
//!     "Customer not found"
//! ));
//! ```

use actix_web::HttpResponse;
use serde_json::json;

/// Macro for handlers returning `HttpResponse`.
/// Unwraps a `DbResult<T>`, returning the error response on failure.
///
/// # Example
/// ```ignore
/// let account = ok_or_return!(require_record(
///     db::accounts::find_by_number(pool, &payload.account_number).await,
///     "Account not found"
/// ));
/// ```
#[macro_export]
macro_rules! ok_or_return {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(response) => return response,
        }
    };
}

/// Result type for database operations that return an HttpResponse on error
pub type DbResult<T> = Result<T, HttpResponse>;

/// Unwrap an optional database result, returning NotFound if None.
///
/// # Example
/// ```ignore
/// let customer = require_record(
///     sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = ?1")
///         .bind(customer_id)
///         .fetch_optional(pool)
///         .await,
///     "Customer not found"
/// )?;
/// ```
pub fn require_record<T>(
    result: Result<Option<T>, sqlx::Error>,
    not_found_message: &str,
) -> DbResult<T> {
    match result {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": not_found_message
        }))),
        Err(e) => {
            tracing::error!("Database error: {}", e);
            Err(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Database error"
            })))
        }
    }
}

/// Ensure a record does NOT exist, returning Conflict if it does.
///
/// # Example
/// ```ignore
/// ensure_not_exists(
///     sqlx::query("SELECT id FROM customers WHERE username = ?1")
///         .bind(&form.username)
///         .fetch_optional(pool)
///         .await,
///     "Username already taken"
/// )?;
/// ```
pub fn ensure_not_exists<T>(
    result: Result<Option<T>, sqlx::Error>,
    conflict_message: &str,
) -> DbResult<()> {
    match result {
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(json!({
            "success": false,
            "message": conflict_message
        }))),
        Ok(None) => Ok(()),
        Err(e) => {
            tracing::error!("Database error: {}", e);
            Err(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Database error"
            })))
        }
    }
}

/// Unwrap a database result, returning InternalServerError on error.
/// Use this when you just need to handle the Err case.
///
/// # Example
/// ```ignore
/// let customers = db_result(db::customers::list_all(pool).await)?;
/// ```
pub fn db_result<T>(result: Result<T, sqlx::Error>) -> DbResult<T> {
    result.map_err(|e| {
        tracing::error!("Database error: {}", e);
        HttpResponse::InternalServerError().json(json!({
            "success": false,
            "message": "Database error"
        }))
    })
}
