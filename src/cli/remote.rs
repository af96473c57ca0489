//! Client for a running inbox server.

use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

use crate::domain::{Entry, InboxResponse};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8787";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Returns the inbox endpoint for an API base URL.
pub fn inbox_endpoint(api_url: &str) -> String {
    format!("{}/v1/inbox", api_url.trim_end_matches('/'))
}

/// Posts an entry to the inbox endpoint.
///
/// Transport problems are reported as a failed `InboxResponse`, the same
/// shape the server returns, so callers handle one type.
pub fn post_entry(entry: &Entry, endpoint: &str) -> InboxResponse {
    debug!(endpoint, "posting entry");
    let client = match Client::builder().timeout(REQUEST_TIMEOUT).build() {
        Ok(client) => client,
        Err(err) => return InboxResponse::failure(format!("Request failed: {err}")),
    };

    let response = match client
        .post(endpoint)
        .json(entry)
        .send()
        .and_then(|r| r.error_for_status())
    {
        Ok(response) => response,
        Err(err) => return InboxResponse::failure(describe_send_error(&err)),
    };

    match response.json::<InboxResponse>() {
        Ok(body) => body,
        Err(err) if err.is_timeout() => InboxResponse::failure("Request timed out"),
        Err(_) => InboxResponse::failure("Invalid response from server"),
    }
}

fn describe_send_error(err: &reqwest::Error) -> String {
    if err.is_connect() {
        "Could not connect to API server. Is it running?".to_string()
    } else if err.is_timeout() {
        "Request timed out".to_string()
    } else {
        format!("Request failed: {err}")
    }
}
