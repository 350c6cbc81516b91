pub mod dashboard_handler;
pub mod deposit_handler;
pub mod helper;
pub mod payment_handler;
pub mod transfer_handler;
