//! Core traits for the subsync system
//!
//! This module defines the abstract interfaces the operations drive.
//!
//! - [`ZoneClient`]: remote zone-management API
//! - [`IpResolver`]: public IPv4 address lookup

pub mod ip_resolver;
pub mod zone_client;

pub use ip_resolver::IpResolver;
pub use zone_client::ZoneClient;
