//! `lota` -- OTA build catalog generator.
//!
//! Aggregates release-artifact metadata from the configured GitHub
//! repositories into normalized build records, then publishes one JSON
//! manifest per (device model, channel) pair.
//!
//! Invocation: `lota` re-fetches every listing; `lota -b` reuses buffered
//! listings and asks before refreshing them.
//!
//! # Environment variables
//!
//! | Variable          | Required | Default       | Description                       |
//! |-------------------|----------|---------------|-----------------------------------|
//! | `LOTA_CONFIG`     | no       | `github.json` | Repository list config file       |
//! | `LOTA_BUFFER_DIR` | no       | `buffer`      | Buffered release listings         |
//! | `LOTA_OUTPUT_DIR` | no       | `api/v1`      | Manifest output directory         |

mod args;

use std::io::Write;
use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lota_core::buffer::{refresh_decision, BufferPolicy, RefreshDecision};
use lota_github::buffer::{ReleaseBuffer, DEFAULT_BUFFER_DIR};
use lota_github::client::GithubClient;
use lota_github::config::{load_repositories, DEFAULT_CONFIG_PATH};
use lota_github::GithubReleaseSource;
use lota_pipeline::assembler::assemble_all;
use lota_pipeline::source::ReleaseSource;
use lota_pipeline::writer::{ManifestWriter, DEFAULT_OUTPUT_DIR};
use lota_pipeline::PipelineError;

use crate::args::{parse_args, Invocation, USAGE};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lota=info,lota_github=info,lota_pipeline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let policy = match parse_args(&args) {
        Invocation::Run(policy) => policy,
        Invocation::Usage => {
            eprint!("{USAGE}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(policy).await {
        tracing::error!(error = %e, "Catalog run failed");
        std::process::exit(1);
    }
}

async fn run(policy: BufferPolicy) -> Result<(), PipelineError> {
    let config_path = env_or("LOTA_CONFIG", DEFAULT_CONFIG_PATH);
    let buffer_dir = env_or("LOTA_BUFFER_DIR", DEFAULT_BUFFER_DIR);
    let output_dir = env_or("LOTA_OUTPUT_DIR", DEFAULT_OUTPUT_DIR);

    let source = GithubReleaseSource::with_parts(
        GithubClient::new(),
        ReleaseBuffer::new(&buffer_dir),
        policy == BufferPolicy::Enabled,
    );

    let has_buffered = source.buffer().has_entries().await?;
    match refresh_decision(has_buffered, policy) {
        RefreshDecision::Clear => source.buffer().clear().await?,
        RefreshDecision::Confirm => {
            if confirm_refresh()? {
                source.buffer().clear().await?;
            }
        }
        RefreshDecision::Keep => {}
    }

    let repos = load_repositories(Path::new(&config_path)).await?;
    if repos.is_empty() {
        tracing::warn!("No repositories configured; no manifests will be written");
    }

    let mut records = Vec::new();
    for repo in &repos {
        match source.releases(&repo.name).await {
            Ok(releases) => {
                tracing::info!(repo = %repo.name, releases = releases.len(), "Loaded release listing");
                records.extend(assemble_all(&source, &releases).await);
            }
            Err(e) => {
                tracing::error!(repo = %repo.name, error = %e, "Failed to load release listing");
            }
        }
    }

    let written = ManifestWriter::new(&output_dir).write_all(&records).await?;
    tracing::info!(builds = records.len(), manifests = written, "Catalog complete");
    Ok(())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Ask on stdin whether to refresh buffered listings. Defaults to no.
fn confirm_refresh() -> Result<bool, std::io::Error> {
    print!("Refresh buffered releases? [y/N] ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}
