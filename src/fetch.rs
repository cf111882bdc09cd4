use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::Settings;

/// HTTP client used for every page; no retries, no extra headers.
pub fn client(settings: &Settings) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()
        .context("Failed to create HTTP client")
}

/// GET one wiki page and return its decoded body.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String> {
    info!("Fetching {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Bad status from {}", url))?;

    let body = response
        .text()
        .await
        .with_context(|| format!("Failed to read body of {}", url))?;
    debug!("Fetched {} ({} bytes)", url, body.len());
    Ok(body)
}
