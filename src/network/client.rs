//! HTTP client wrapper - delivers contact requests and classifies outcomes

use std::time::Instant;

use crate::config::Config;
use crate::messages::NetworkResponse;
use crate::models::ContactRequest;

/// POST the payload to the configured endpoint.
///
/// A 2xx status is the only success; a reachable server answering with
/// any other status is reported as a failure, same as a transport error.
pub async fn submit_contact(
    client: &reqwest::Client,
    config: &Config,
    payload: ContactRequest,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();

    let result = client
        .post(&config.api_url)
        .header("X-Api-Key", &config.api_key)
        .json(&payload)
        .send()
        .await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(resp) if resp.status().is_success() => NetworkResponse::Accepted {
            id: request_id,
            status: resp.status().as_u16(),
            time_ms: elapsed,
        },
        Ok(resp) => NetworkResponse::Failed {
            id: request_id,
            message: format!("server returned HTTP {}", resp.status().as_u16()),
            time_ms: elapsed,
        },
        Err(e) => {
            let msg = if e.is_timeout() {
                "request timed out (30s)".to_string()
            } else if e.is_connect() {
                format!("connection failed: {}", e)
            } else {
                format!("request failed: {}", e)
            };
            NetworkResponse::Failed {
                id: request_id,
                message: msg,
                time_ms: elapsed,
            }
        }
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
