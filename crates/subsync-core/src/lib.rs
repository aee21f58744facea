//! # subsync-core
//!
//! Core library for the subsync tool: synchronizing DNS "A" records for
//! subdomains of a managed domain against a remote zone API.
//!
//! This crate provides:
//! - [`ZoneClient`]: trait over the remote zone-management API
//! - [`IpResolver`]: trait for resolving the caller's public IPv4 address
//! - [`ops`]: the subdomain operations (list, add, remove, refresh) and the
//!   batch [`ops::apply`] flow that fans them out and refreshes the zone
//! - [`SyncRequest`]: one invocation's validated intent
//! - [`Credentials`]: zone API credentials loaded from a local file
//!
//! Concrete integrations live in sibling crates (`subsync-provider-ovh`,
//! `subsync-ip-http`); everything here drives trait objects so the test
//! suite can substitute doubles.

pub mod config;
pub mod error;
pub mod ops;
pub mod record;
pub mod traits;

pub use config::Credentials;
pub use error::{Error, Result};
pub use record::{Action, MutationOutcome, SyncReport, SyncRequest, ZoneRecord};
pub use traits::{IpResolver, ZoneClient};
