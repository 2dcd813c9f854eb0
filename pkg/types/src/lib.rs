pub mod config;
pub mod page;
pub mod query;
pub mod service_account;
pub mod validate;
