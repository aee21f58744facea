//! # OVH zone client
//!
//! This crate implements [`ZoneClient`] against the OVH API 1.0, covering
//! exactly the five zone operations the tool needs:
//!
//! - `GET    /domain/zone/{domain}/record?fieldType=A[&subDomain=..]`
//! - `GET    /domain/zone/{domain}/record/{id}`
//! - `POST   /domain/zone/{domain}/record`
//! - `DELETE /domain/zone/{domain}/record/{id}`
//! - `POST   /domain/zone/{domain}/refresh`
//!
//! Authentication uses the OVH application key / application secret /
//! consumer key triple with per-request SHA-1 signing (see [`sign`]). Clock
//! skew against the API is compensated once per process via `GET /auth/time`.
//!
//! The client performs a single attempt per call: no retries, no caching,
//! no background tasks. Failures are mapped onto the core error taxonomy
//! and surfaced to the operations layer.

mod sign;

use async_trait::async_trait;
use reqwest::{Method, StatusCode, header::CONTENT_TYPE};
use std::net::Ipv4Addr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use subsync_core::record::ZoneRecord;
use subsync_core::{Credentials, Error, Result, ZoneClient};
use tokio::sync::OnceCell;

/// HTTP timeout for API requests
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Known OVH API endpoints, by the names the OVH console uses
const ENDPOINTS: &[(&str, &str)] = &[
    ("ovh-eu", "https://eu.api.ovh.com/1.0"),
    ("ovh-ca", "https://ca.api.ovh.com/1.0"),
    ("ovh-us", "https://api.us.ovhcloud.com/1.0"),
    ("kimsufi-eu", "https://eu.api.kimsufi.com/1.0"),
    ("kimsufi-ca", "https://ca.api.kimsufi.com/1.0"),
    ("soyoustart-eu", "https://eu.api.soyoustart.com/1.0"),
    ("soyoustart-ca", "https://ca.api.soyoustart.com/1.0"),
];

/// Resolve an endpoint name to its API base URL
fn endpoint_base(name: &str) -> Result<&'static str> {
    ENDPOINTS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, base)| *base)
        .ok_or_else(|| {
            Error::config(format!(
                "unknown endpoint '{}' (known: {})",
                name,
                ENDPOINTS
                    .iter()
                    .map(|(n, _)| *n)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })
}

/// Build the record listing path with its filter query
fn record_query(domain: &str, sub_domain: Option<&str>) -> String {
    match sub_domain {
        Some(sub) => format!("/domain/zone/{}/record?fieldType=A&subDomain={}", domain, sub),
        None => format!("/domain/zone/{}/record?fieldType=A", domain),
    }
}

/// OVH zone API client
pub struct OvhClient {
    client: reqwest::Client,
    base_url: &'static str,
    app_key: String,
    app_secret: String,
    consumer_key: String,

    /// Signed requests need the server's clock; the delta against the local
    /// clock is fetched from `/auth/time` once and cached for the process.
    time_delta: OnceCell<i64>,
}

// The application secret and consumer key never appear in Debug output.
impl std::fmt::Debug for OvhClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OvhClient")
            .field("base_url", &self.base_url)
            .field("app_key", &self.app_key)
            .field("app_secret", &"<REDACTED>")
            .field("consumer_key", &"<REDACTED>")
            .finish()
    }
}

impl OvhClient {
    /// Create a client from validated credentials
    pub fn new(credentials: &Credentials) -> Result<Self> {
        credentials.validate()?;
        let base_url = endpoint_base(&credentials.endpoint)?;

        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            app_key: credentials.app_key.clone(),
            app_secret: credentials.app_secret.clone(),
            consumer_key: credentials.consumer_key.clone(),
            time_delta: OnceCell::new(),
        })
    }

    /// Current time according to the API server
    async fn server_time(&self) -> Result<i64> {
        let delta = self
            .time_delta
            .get_or_try_init(|| async {
                let url = format!("{}/auth/time", self.base_url);
                let response = self
                    .client
                    .get(&url)
                    .send()
                    .await
                    .map_err(|e| Error::http(format!("GET {} failed: {}", url, e)))?;
                let text = response
                    .text()
                    .await
                    .map_err(|e| Error::http(format!("failed to read {}: {}", url, e)))?;
                let server: i64 = text.trim().parse().map_err(|_| {
                    Error::http(format!("invalid /auth/time answer: {}", text.trim()))
                })?;

                let delta = server - local_unix_time()?;
                tracing::debug!("clock delta against {}: {}s", url, delta);
                Ok::<i64, Error>(delta)
            })
            .await?;

        Ok(local_unix_time()? + delta)
    }

    /// Issue one signed request and return the response body on success
    async fn call(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<String> {
        let url = format!("{}{}", self.base_url, path_and_query);
        let body_text = match body {
            Some(value) => serde_json::to_string(value)?,
            None => String::new(),
        };

        let timestamp = self.server_time().await?;
        let signature = sign::sign_request(
            &self.app_secret,
            &self.consumer_key,
            method.as_str(),
            &url,
            &body_text,
            timestamp,
        );

        tracing::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("X-Ovh-Application", &self.app_key)
            .header("X-Ovh-Consumer", &self.consumer_key)
            .header("X-Ovh-Timestamp", timestamp.to_string())
            .header("X-Ovh-Signature", signature);
        if body.is_some() {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body_text);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::http(format!("{} {} failed: {}", method, url, e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::http(format!("failed to read response of {}: {}", url, e)))?;

        if !status.is_success() {
            return Err(status_error(status, &text));
        }
        Ok(text)
    }
}

/// Map an API error response onto the core taxonomy
fn status_error(status: StatusCode, body: &str) -> Error {
    // OVH error bodies are JSON objects with a "message" field.
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.trim().to_string());

    match status.as_u16() {
        401 | 403 => Error::auth(message),
        404 => Error::not_found(message),
        429 => Error::rate_limited(message),
        code => Error::api(code, message),
    }
}

fn local_unix_time() -> Result<i64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .map_err(|e| Error::Other(format!("system clock before epoch: {}", e)))
}

#[async_trait]
impl ZoneClient for OvhClient {
    async fn list_record_ids(
        &self,
        domain: &str,
        sub_domain: Option<&str>,
    ) -> Result<Vec<u64>> {
        let path = record_query(domain, sub_domain);
        let body = self.call(Method::GET, &path, None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_record(&self, domain: &str, id: u64) -> Result<ZoneRecord> {
        let path = format!("/domain/zone/{}/record/{}", domain, id);
        let body = self.call(Method::GET, &path, None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn create_record(
        &self,
        domain: &str,
        sub_domain: &str,
        target: Ipv4Addr,
    ) -> Result<ZoneRecord> {
        let path = format!("/domain/zone/{}/record", domain);
        let payload = serde_json::json!({
            "fieldType": "A",
            "subDomain": sub_domain,
            "target": target.to_string(),
        });
        let body = self.call(Method::POST, &path, Some(&payload)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn delete_record(&self, domain: &str, id: u64) -> Result<()> {
        let path = format!("/domain/zone/{}/record/{}", domain, id);
        self.call(Method::DELETE, &path, None).await?;
        Ok(())
    }

    async fn refresh_zone(&self, domain: &str) -> Result<()> {
        let path = format!("/domain/zone/{}/refresh", domain);
        self.call(Method::POST, &path, None).await?;
        Ok(())
    }
}
