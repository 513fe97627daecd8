//! CRP timetable CLI.
//!
//! Feeds a JSON request through the scheduling engine against a catalog
//! snapshot on disk and prints the response. Meant for development and
//! support work; the production transport lives in the platform's API
//! service, not here.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin crp-plan -- catalog.json request.json
//! ```
//!
//! `catalog.json` is a JSON array of normalized course records;
//! `request.json` holds `selected_course_ids` and optional `preferences`.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (default: info)
//! - `CRP_CONFIG`: Path to a TOML engine config file
//! - `SOLVE_TIMEOUT_MS`: Per-solve wall-clock budget override
//! - `MAX_PARALLEL_SOLVES`: Solve concurrency override

use std::env;
use std::fs;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crp_rust::api::ScheduleRequest;
use crp_rust::catalog::LocalCatalogProvider;
use crp_rust::config::EngineConfig;
use crp_rust::services::{schedule_request, RequestTracker};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let mut args = env::args().skip(1);
    let usage = "usage: crp-plan <catalog.json> <request.json>";
    let catalog_path = args.next().context(usage)?;
    let request_path = args.next().context(usage)?;

    let provider = LocalCatalogProvider::from_file(&catalog_path)
        .with_context(|| format!("loading catalog from {}", catalog_path))?;
    tracing::info!(courses = provider.len(), "catalog loaded");

    let request: ScheduleRequest = serde_json::from_str(
        &fs::read_to_string(&request_path)
            .with_context(|| format!("reading request from {}", request_path))?,
    )
    .context("parsing request JSON")?;

    let config = EngineConfig::from_env().map_err(anyhow::Error::msg)?;
    let tracker = RequestTracker::new();

    let response = schedule_request(&provider, &request, &config, &tracker).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
