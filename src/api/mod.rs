use serde_json::Value;

use crate::error::CliError;

pub mod client;
pub mod handlers;
pub mod models;

pub use client::ApiClient;
pub use models::{ApiRequest, Endpoint};

/// Seam between command dispatch and the network. Implemented by [`ApiClient`]
/// and by recording stubs in tests.
#[allow(async_fn_in_trait)]
pub trait TavilyApi {
    /// Performs exactly one call and returns the payload untouched.
    async fn send(&self, request: &ApiRequest) -> Result<Value, CliError>;
}
