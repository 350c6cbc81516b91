pub mod staff_handler;
pub mod stats_handler;
pub mod transaction_handler;
pub mod user_handler;
