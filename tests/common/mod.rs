pub mod bank_helpers;
pub mod utils;
