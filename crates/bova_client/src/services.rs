//! Transport and request execution

pub mod api;

pub use api::client::{ApiClient, LoggingApiClient, ReqwestApiClient, Response};
