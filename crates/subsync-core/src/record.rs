//! Data model for zone records and sync invocations
//!
//! [`ZoneRecord`] mirrors the zone API's wire shape. [`SyncRequest`] captures
//! one invocation's validated intent and is immutable once built.
//! [`MutationOutcome`] and [`SyncReport`] aggregate per-subdomain results of
//! a mutating run.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// A DNS record as stored in the remote zone
///
/// The identifier is an opaque handle assigned by the zone API; this tool
/// only requests creation/deletion and reads existing state. Field names
/// follow the API's JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRecord {
    /// Record identifier assigned by the zone API
    pub id: u64,

    /// Subdomain name; empty for the bare domain
    #[serde(default)]
    pub sub_domain: String,

    /// Record target (dotted-quad IPv4 for "A" records)
    pub target: String,

    /// Record field type; always "A" for this tool
    pub field_type: String,
}

impl fmt::Display for ZoneRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.sub_domain, self.target)
    }
}

/// One invocation's intent, built once from command-line arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    /// Target DNS zone
    pub domain: String,

    /// Explicit target IP; `None` means resolve via the public-IP service
    pub ip: Option<Ipv4Addr>,

    /// Subdomains to create, pointing at the target IP
    pub add: Vec<String>,

    /// Subdomains to remove
    pub remove: Vec<String>,

    /// Remove every matching record per subdomain instead of one
    pub remove_all: bool,
}

impl SyncRequest {
    /// Build a request, normalizing the add/remove sets
    ///
    /// Subdomain entries are trimmed and empty entries discarded. Fails if
    /// the domain is empty after trimming.
    pub fn new(
        domain: impl Into<String>,
        ip: Option<Ipv4Addr>,
        add: Vec<String>,
        remove: Vec<String>,
        remove_all: bool,
    ) -> Result<Self> {
        let domain = domain.into().trim().to_string();
        if domain.is_empty() {
            return Err(Error::invalid_input("domain cannot be empty"));
        }

        Ok(Self {
            domain,
            ip,
            add: normalize_subdomains(add),
            remove: normalize_subdomains(remove),
            remove_all,
        })
    }

    /// True when no mutation was requested (list mode)
    pub fn is_listing(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

/// Trim entries and discard the empty ones
fn normalize_subdomains(subs: Vec<String>) -> Vec<String> {
    subs.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Which mutation a [`MutationOutcome`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Record creation
    Add,
    /// Record deletion
    Remove,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Add => write!(f, "add"),
            Action::Remove => write!(f, "remove"),
        }
    }
}

/// Result of a single add or remove within a batch
#[derive(Debug)]
pub struct MutationOutcome {
    /// Whether this was an add or a remove
    pub action: Action,

    /// The subdomain the operation targeted
    pub sub_domain: String,

    /// `Ok` carries the number of records touched (1 for adds)
    pub result: Result<usize>,
}

impl MutationOutcome {
    /// True if the underlying operation succeeded
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Aggregated outcome of a mutating invocation
///
/// Every fan-out sibling settles and is recorded here; the refresh result
/// is tracked separately since it runs once per batch, unconditionally.
#[derive(Debug)]
pub struct SyncReport {
    /// Per-subdomain outcomes, adds first, in request order
    pub outcomes: Vec<MutationOutcome>,

    /// Result of the post-batch zone refresh
    pub refresh: Result<()>,
}

impl SyncReport {
    /// True when every operation and the refresh succeeded
    pub fn is_success(&self) -> bool {
        self.refresh.is_ok() && self.outcomes.iter().all(MutationOutcome::is_success)
    }

    /// Iterate over failed outcomes
    pub fn failures(&self) -> impl Iterator<Item = &MutationOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}
