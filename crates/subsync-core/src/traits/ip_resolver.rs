//! IP resolver trait
//!
//! Defines the interface for resolving the caller's current public IPv4
//! address, used as the default record target when no explicit IP is given.
//! The HTTP-based implementation lives in `subsync-ip-http`.

use crate::error::Result;
use async_trait::async_trait;
use std::net::Ipv4Addr;

/// Trait for public IP resolution
///
/// One lookup per invocation when needed; implementations do not cache.
#[async_trait]
pub trait IpResolver: Send + Sync {
    /// Resolve the current public IPv4 address
    ///
    /// Fails if the resolution service is unreachable or answers with
    /// something that is not an IPv4 address.
    async fn resolve_v4(&self) -> Result<Ipv4Addr>;
}
