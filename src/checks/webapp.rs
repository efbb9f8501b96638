//! Web application probe
//!
//! The web app is served at its base URL; a reachable deployment answers the
//! root document with HTTP 200 and usually carries an identifying marker
//! string somewhere in the body.

use std::time::Duration;

use reqwest::Client;

use crate::error::{ProbeError, ProbeResult};

/// Fetch the web app root document
///
/// Returns the body text on HTTP success. Non-success statuses, timeouts and
/// transport errors become `ProbeError`s.
pub async fn probe_webapp(client: &Client, url: &str, timeout: Duration) -> ProbeResult<String> {
    let response = client.get(url).timeout(timeout).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProbeError::Status {
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ProbeError::InvalidResponse(format!("failed to read body: {}", e)))?;

    Ok(body)
}

/// Find the first marker string present in the body.
///
/// Marker absence is not an error; the caller downgrades it to a warning.
pub fn find_marker<'a>(body: &str, markers: &'a [String]) -> Option<&'a str> {
    markers
        .iter()
        .find(|marker| body.contains(marker.as_str()))
        .map(|marker| marker.as_str())
}
