pub mod accounts;
pub mod customers;
pub mod helpers;
pub mod staff;
pub mod transactions;
