pub mod account_numbers;
pub mod money;
