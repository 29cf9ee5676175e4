// src/integrations/http.rs
//
// Shared HTTP plumbing for the museum clients.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::config::CuratorConfig;
use crate::domain::SourceKind;
use crate::error::{AppError, AppResult};

/// Build the HTTP client shared by both museum clients
pub fn build_http_client(config: &CuratorConfig) -> AppResult<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .build()?;

    Ok(client)
}

/// Parse a configured base URL, making sure relative joins append to it
pub fn parse_base_url(raw: &str, museum: SourceKind) -> AppResult<Url> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Url::parse(&normalized)
        .map_err(|e| AppError::InvalidRequest(format!("{} base URL '{}': {}", museum, raw, e)))
}

/// GET a URL and decode the JSON body
pub async fn get_json<T>(client: &Client, url: Url, museum: SourceKind) -> AppResult<T>
where
    T: DeserializeOwned,
{
    log::debug!("GET {} ({})", url, museum);

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(AppError::Upstream {
            museum,
            status: response.status().as_u16(),
        });
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| AppError::Decode {
        museum,
        message: e.to_string(),
    })
}
