mod basic;
mod client;
pub mod auth;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use tracing::warn;

fn get_request(url: &str) -> Result<reqwest::Request> {
    Ok(reqwest::Request::new(reqwest::Method::GET, url.parse()?))
}

/// Executes a GET and deserializes the JSON body.
///
/// Transport errors are retried once before giving up; a non-success
/// status is an error carrying the response body.
pub async fn fetch_json<C, T>(client: &C, url: &str) -> Result<T>
where
    C: HttpClient + ?Sized,
    T: DeserializeOwned,
{
    let resp = match client.execute(get_request(url)?).await {
        Ok(resp) => resp,
        Err(e) => {
            warn!(url, error = %e, "Request failed, retrying once");
            client
                .execute(get_request(url)?)
                .await
                .with_context(|| format!("GET {url} failed after retry"))?
        }
    };

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        bail!("GET {url} returned HTTP {status}: {body}");
    }

    resp.json::<T>()
        .await
        .with_context(|| format!("Invalid JSON from {url}"))
}
