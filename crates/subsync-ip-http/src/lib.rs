//! # HTTP public-IP resolver
//!
//! Implements [`IpResolver`] by asking an external plain-text service
//! (ipify-style) for the caller's current public address. Used when the
//! user did not supply an explicit target IP.
//!
//! One lookup per invocation, no caching. The tool only manages "A"
//! records, so an IPv6 answer is rejected rather than silently accepted.

use async_trait::async_trait;
use std::net::Ipv4Addr;
use std::time::Duration;
use subsync_core::{Error, IpResolver, Result};

/// Default IP check service (returns the plain-text address)
pub const DEFAULT_IP_SERVICE: &str = "https://api.ipify.org";

/// Alternative services, should the default misbehave
#[allow(dead_code)]
const FALLBACK_IP_SERVICES: &[&str] = &["https://ifconfig.me/ip", "https://icanhazip.com"];

/// HTTP timeout for the lookup
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Public IPv4 resolver backed by an HTTP service
#[derive(Debug, Clone)]
pub struct HttpIpResolver {
    url: String,
    client: reqwest::Client,
}

impl HttpIpResolver {
    /// Create a resolver against the default service
    pub fn new() -> Self {
        Self::with_url(DEFAULT_IP_SERVICE)
    }

    /// Create a resolver against a custom service URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::builder()
                .timeout(DEFAULT_HTTP_TIMEOUT)
                .build()
                .unwrap_or_default(),
        }
    }
}

impl Default for HttpIpResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IpResolver for HttpIpResolver {
    async fn resolve_v4(&self) -> Result<Ipv4Addr> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::ip_resolve(format!("GET {} failed: {}", self.url, e)))?;

        if !response.status().is_success() {
            return Err(Error::ip_resolve(format!(
                "{} answered {}",
                self.url,
                response.status()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::ip_resolve(format!("failed to read {}: {}", self.url, e)))?;

        let ip = parse_ipv4(&text)?;
        tracing::debug!("public IPv4 resolved to {}", ip);
        Ok(ip)
    }
}

/// Parse a service answer into an IPv4 address
///
/// The services answer with the bare address and optional surrounding
/// whitespace. Anything else, including an IPv6 address, is an error.
fn parse_ipv4(text: &str) -> Result<Ipv4Addr> {
    let text = text.trim();
    text.parse::<Ipv4Addr>()
        .map_err(|_| Error::ip_resolve(format!("service answered with non-IPv4 value: '{}'", text)))
}
