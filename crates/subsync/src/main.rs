//! # subsync
//!
//! Command-line entry point. Responsibilities:
//!
//! 1. Parse arguments into a [`SyncRequest`]
//! 2. Load credentials and build the zone client
//! 3. List mode: print existing "A" records
//! 4. Mutate mode: resolve the target IP, apply the batch, report outcomes
//!
//! All operation logic lives in `subsync-core`; this binary only wires the
//! concrete client and resolver to it and maps results to exit codes.
//!
//! Logging goes to stderr via `tracing`, level taken from `SUBSYNC_LOG`
//! (default `warn` so list output stays clean).

mod args;

use args::Args;
use clap::Parser;
use std::process::ExitCode;
use subsync_core::{Credentials, Error, IpResolver, SyncRequest, ops};
use subsync_ip_http::HttpIpResolver;
use subsync_provider_ovh::OvhClient;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for the different failure classes
///
/// - 0: success
/// - 1: configuration or validation error (nothing was attempted remotely)
/// - 2: remote failure (IP resolution, zone API, or a failed sub-operation)
#[derive(Debug, Clone, Copy)]
enum CliExitCode {
    Success = 0,
    ConfigError = 1,
    RemoteError = 2,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

fn main() -> ExitCode {
    // Usage errors (missing --domain, malformed --ip) are handled by clap
    // before anything else runs, including any network call.
    let args = Args::parse();

    init_tracing();

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("failed to create tokio runtime: {}", e);
            return CliExitCode::RemoteError.into();
        }
    };

    match rt.block_on(run(args)) {
        Ok(()) => CliExitCode::Success.into(),
        Err(e) => {
            eprintln!("{}", e);
            exit_code_for(&e).into()
        }
    }
}

/// Classify an error into an exit code
fn exit_code_for(error: &Error) -> CliExitCode {
    match error {
        Error::Config(_) | Error::InvalidInput(_) => CliExitCode::ConfigError,
        _ => CliExitCode::RemoteError,
    }
}

fn init_tracing() {
    let level = match std::env::var("SUBSYNC_LOG")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    // A failure here only means a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

async fn run(args: Args) -> Result<(), Error> {
    let credentials_path = args.credentials_path();
    let request = args.into_request()?;

    let credentials = Credentials::from_file(&credentials_path)?;
    let client = OvhClient::new(&credentials)?;

    if request.is_listing() {
        let records = ops::list_records(&client, &request.domain).await?;
        for record in &records {
            println!("{}", record);
        }
        return Ok(());
    }

    mutate(&client, &request).await
}

async fn mutate(client: &OvhClient, request: &SyncRequest) -> Result<(), Error> {
    // Resolution failure aborts the whole invocation before any mutation.
    let ip = match request.ip {
        Some(ip) => ip,
        None => HttpIpResolver::new().resolve_v4().await?,
    };
    info!("target IP for zone {}: {}", request.domain, ip);

    let report = ops::apply(client, request, ip).await;

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(count) => println!(
                "{} {}: ok ({} record{})",
                outcome.action,
                outcome.sub_domain,
                count,
                if *count == 1 { "" } else { "s" }
            ),
            Err(e) => eprintln!("{} {}: {}", outcome.action, outcome.sub_domain, e),
        }
    }
    if let Err(e) = &report.refresh {
        eprintln!("refresh {}: {}", request.domain, e);
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(Error::Other(format!(
            "{} of {} operation(s) failed",
            report.failures().count() + usize::from(report.refresh.is_err()),
            report.outcomes.len() + 1
        )))
    }
}
