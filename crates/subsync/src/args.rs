//! Command-line argument definitions

use clap::Parser;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use subsync_core::config::{CREDENTIALS_PATH_ENV, DEFAULT_CREDENTIALS_PATH};
use subsync_core::{Result, SyncRequest};

/// Synchronize DNS "A" records for subdomains of an OVH-managed domain
///
/// Without --add or --remove the tool lists the zone's existing "A" records
/// as `subdomain -> target`, one per line. With them it creates/deletes the
/// requested records (target defaults to the caller's public IPv4 address)
/// and then triggers a zone refresh.
#[derive(Parser, Debug)]
#[command(
    name = "subsync",
    version,
    about,
    after_help = "Example: subsync -d example.com --ip 8.8.8.8 -a dns -r dev\n\
                  Creates the subdomain \"dns\" targeting 8.8.8.8 and deletes \"dev\"."
)]
pub struct Args {
    /// Domain name (DNS zone) to modify
    #[arg(short = 'd', long = "domain")]
    pub domain: String,

    /// Explicit IPv4 target; resolved from the public-IP service when omitted
    #[arg(short = 'i', long = "ip")]
    pub ip: Option<Ipv4Addr>,

    /// Subdomain to add (repeatable)
    #[arg(short = 'a', long = "add", value_name = "SUBDOMAIN")]
    pub add: Vec<String>,

    /// Subdomain to remove (repeatable)
    #[arg(short = 'r', long = "remove", value_name = "SUBDOMAIN")]
    pub remove: Vec<String>,

    /// Remove every record matching each --remove subdomain, not just one
    #[arg(long = "all", requires = "remove")]
    pub all: bool,

    /// Path to the credentials JSON file
    #[arg(long = "credentials", value_name = "PATH")]
    pub credentials: Option<PathBuf>,
}

impl Args {
    /// Credentials file path: flag, then environment, then default
    pub fn credentials_path(&self) -> PathBuf {
        self.credentials.clone().unwrap_or_else(|| {
            std::env::var(CREDENTIALS_PATH_ENV)
                .unwrap_or_else(|_| DEFAULT_CREDENTIALS_PATH.to_string())
                .into()
        })
    }

    /// Convert parsed arguments into a normalized request
    pub fn into_request(self) -> Result<SyncRequest> {
        SyncRequest::new(self.domain, self.ip, self.add, self.remove, self.all)
    }
}
