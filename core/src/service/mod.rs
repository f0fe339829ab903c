pub mod account;
pub mod aggregate;
