//! Zone client trait
//!
//! Defines the interface to the remote zone-management API. The concrete
//! implementation lives in `subsync-provider-ovh`; the operations in
//! [`crate::ops`] and the test suite only see this trait.
//!
//! Every call maps to a single API request and may fail with a
//! remote-service error (network failure, authentication failure, validation
//! rejection). Implementations surface the failure without retry; there is
//! no retry policy anywhere in this tool.

use crate::error::Result;
use crate::record::ZoneRecord;
use async_trait::async_trait;
use std::net::Ipv4Addr;

/// Trait for zone-management API implementations
///
/// Implementations must be thread-safe; calls within a batch are issued
/// concurrently. They must not retry, cache, or spawn background tasks.
#[async_trait]
pub trait ZoneClient: Send + Sync {
    /// List identifiers of all "A" records, optionally filtered by subdomain
    ///
    /// An empty result is not an error; callers decide whether zero matches
    /// is acceptable.
    async fn list_record_ids(
        &self,
        domain: &str,
        sub_domain: Option<&str>,
    ) -> Result<Vec<u64>>;

    /// Fetch the detail of a single record by identifier
    async fn get_record(&self, domain: &str, id: u64) -> Result<ZoneRecord>;

    /// Create an "A" record pointing `sub_domain` at `target`
    ///
    /// Duplicate records are not deduplicated here; whether duplicates are
    /// allowed is the remote API's responsibility.
    async fn create_record(
        &self,
        domain: &str,
        sub_domain: &str,
        target: Ipv4Addr,
    ) -> Result<ZoneRecord>;

    /// Delete a record by identifier
    async fn delete_record(&self, domain: &str, id: u64) -> Result<()>;

    /// Trigger zone propagation so staged changes go live
    async fn refresh_zone(&self, domain: &str) -> Result<()>;
}
