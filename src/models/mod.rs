pub mod account;
pub mod auth;
pub mod common;
pub mod transaction;
pub mod user;
