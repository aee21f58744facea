//! Subdomain operations
//!
//! Each operation is a small orchestration over a [`ZoneClient`]:
//!
//! - [`list_records`]: all "A" records of a zone, details fetched concurrently
//! - [`add_subdomain`]: create one "A" record
//! - [`remove_subdomain`]: delete one or all records matching a subdomain
//! - [`refresh_zone`]: trigger propagation
//! - [`apply`]: fan out a batch of adds/removes, let every sibling settle,
//!   then refresh the zone unconditionally
//!
//! There is no shared mutable state between concurrent operations (each
//! targets a distinct subdomain or record), no retries, and no cancellation
//! of in-flight siblings: once issued, requests run to completion or failure
//! and their outcomes are aggregated.

use crate::error::{Error, Result};
use crate::record::{Action, MutationOutcome, SyncReport, SyncRequest, ZoneRecord};
use crate::traits::ZoneClient;
use futures::future::{join, join_all};
use std::net::Ipv4Addr;
use tracing::{debug, info, warn};

/// List all "A" records of a zone
///
/// Fetches record identifiers, then every record detail concurrently. Any
/// underlying failure fails the whole listing; the first error (in API
/// return order) wins.
pub async fn list_records(client: &dyn ZoneClient, domain: &str) -> Result<Vec<ZoneRecord>> {
    let ids = client.list_record_ids(domain, None).await?;
    debug!("zone {} has {} A record(s)", domain, ids.len());

    let details = join_all(ids.iter().map(|&id| client.get_record(domain, id))).await;
    details.into_iter().collect()
}

/// Create one "A" record pointing `sub_domain` at `ip`
///
/// A remote rejection (e.g. a conflicting existing record) is surfaced
/// as-is. Duplicate records are never deduplicated by this tool.
pub async fn add_subdomain(
    client: &dyn ZoneClient,
    domain: &str,
    ip: Ipv4Addr,
    sub_domain: &str,
) -> Result<ZoneRecord> {
    if sub_domain.is_empty() {
        return Err(Error::invalid_input("subdomain cannot be empty"));
    }

    let record = client.create_record(domain, sub_domain, ip).await?;
    info!("created {}.{} -> {}", sub_domain, domain, ip);
    Ok(record)
}

/// Remove the record(s) matching `sub_domain`
///
/// Zero matching records is a [`Error::NotFound`]; no delete is issued.
/// With `remove_all` every matching record is deleted concurrently.
/// Otherwise only the first identifier returned by the API is deleted:
/// when duplicates exist, which record is removed is implementation-defined.
///
/// Returns the number of records deleted.
pub async fn remove_subdomain(
    client: &dyn ZoneClient,
    domain: &str,
    sub_domain: &str,
    remove_all: bool,
) -> Result<usize> {
    if sub_domain.is_empty() {
        return Err(Error::invalid_input("subdomain cannot be empty"));
    }

    let ids = client.list_record_ids(domain, Some(sub_domain)).await?;
    if ids.is_empty() {
        return Err(Error::not_found(format!(
            "no A record for '{}' in zone {}",
            sub_domain, domain
        )));
    }

    let ids = if remove_all { ids } else { ids[..1].to_vec() };

    let results = join_all(ids.iter().map(|&id| client.delete_record(domain, id))).await;
    let deleted = results.len();
    results.into_iter().collect::<Result<Vec<_>>>()?;

    info!("removed {} record(s) for {}.{}", deleted, sub_domain, domain);
    Ok(deleted)
}

/// Trigger zone propagation so staged changes go live
pub async fn refresh_zone(client: &dyn ZoneClient, domain: &str) -> Result<()> {
    client.refresh_zone(domain).await?;
    info!("zone {} refreshed", domain);
    Ok(())
}

/// Apply a mutating request: fan out all adds and removes, then refresh
///
/// All operations are issued concurrently and every one settles; a failing
/// sibling neither aborts nor cancels the others. The zone refresh runs
/// exactly once after the batch settles, regardless of individual failures,
/// so successfully applied changes still propagate. Failures are recorded on
/// the returned [`SyncReport`] rather than short-circuiting.
pub async fn apply(client: &dyn ZoneClient, request: &SyncRequest, ip: Ipv4Addr) -> SyncReport {
    let domain = request.domain.as_str();

    let adds = request.add.iter().map(|sub| async move {
        let result = add_subdomain(client, domain, ip, sub).await.map(|_| 1);
        if let Err(ref e) = result {
            warn!("add '{}' failed: {}", sub, e);
        }
        MutationOutcome {
            action: Action::Add,
            sub_domain: sub.clone(),
            result,
        }
    });

    let removes = request.remove.iter().map(|sub| async move {
        let result = remove_subdomain(client, domain, sub, request.remove_all).await;
        if let Err(ref e) = result {
            warn!("remove '{}' failed: {}", sub, e);
        }
        MutationOutcome {
            action: Action::Remove,
            sub_domain: sub.clone(),
            result,
        }
    });

    let (mut outcomes, remove_outcomes) = join(join_all(adds), join_all(removes)).await;
    outcomes.extend(remove_outcomes);

    let refresh = refresh_zone(client, domain).await;
    if let Err(ref e) = refresh {
        warn!("zone refresh failed: {}", e);
    }

    SyncReport { outcomes, refresh }
}
