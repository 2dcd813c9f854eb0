//! Client for the SSO service-accounts REST API.
//!
//! The backend has no count endpoint; [`ServiceAccountsClient::fetch_service_accounts`]
//! asks for one item more than the page size and uses the surplus to tell
//! whether another page exists.

pub mod client;
pub mod error;
pub mod query;

pub use client::ServiceAccountsClient;
pub use error::{ClientError, Result};
pub use query::{QueryOptions, build_query_params};
