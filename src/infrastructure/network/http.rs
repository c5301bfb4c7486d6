// HTTP client utilities
use crate::domain::error::VoxError;
use reqwest::Client;
use std::time::Duration;

/// Create an HTTP client with the given request timeout
pub fn create_client(timeout_secs: u64) -> Result<Client, VoxError> {
    Ok(Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(5))
        .timeout(Duration::from_secs(timeout_secs.max(1)))
        .user_agent(concat!("voxlate/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Join a base endpoint and a path without doubling slashes
pub fn join_url(endpoint: &str, path: &str) -> String {
    format!(
        "{}/{}",
        endpoint.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
