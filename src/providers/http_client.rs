use reqwest::Client;
use std::time::Duration;

/// Shared client settings for LLM providers. `timeout_secs` bounds the whole
/// request, since completions can take a while to generate.
pub fn build_provider_client(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .unwrap_or_else(|_| Client::new())
}
