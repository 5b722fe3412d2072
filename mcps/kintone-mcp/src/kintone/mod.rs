//! kintone REST API wrapper
//!
//! Authentication, typed payloads, the HTTP client and the query clause
//! extractor used by the record tools.

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod query;

pub use auth::Auth;
pub use client::KintoneClient;
pub use error::{KintoneError, KintoneResult};
pub use query::{parse_query, ParsedQuery};
