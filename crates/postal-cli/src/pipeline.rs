//! The cleaning pipeline, composed from the library crates.
//!
//! Stages, in order:
//! 1. **Read**: load the whole input file into memory
//! 2. **Ingest**: strip NULs, decode lossily, parse CSV rows by header name
//! 3. **Route**: normalize, repair, extract, and validate every row
//! 4. **Output**: write the accepted and rejected CSV streams

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use postal_core::{CleanedRows, clean_records};
use postal_ingest::parse_records;
use postal_output::{CleanedStreams, write_outputs};

/// Input and output locations for one run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub input: PathBuf,
    pub accepted_path: PathBuf,
    pub rejected_path: PathBuf,
}

/// Counts and locations reported after a run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub input_rows: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub accepted_path: PathBuf,
    pub rejected_path: PathBuf,
}

/// Route raw table bytes through ingestion and validation.
///
/// This is the in-memory core of [`run`], kept separate so tests can feed
/// byte buffers instead of files.
///
/// # Errors
///
/// Fails only when the CSV structure cannot be parsed.
pub fn clean_bytes(raw: &[u8]) -> Result<CleanedRows> {
    let rows = parse_records(raw).context("parse input table")?;
    Ok(clean_records(&rows))
}

/// Run the full pipeline: read the input file, route every row, and write
/// both output streams.
///
/// # Errors
///
/// Fails when the input cannot be read or either output cannot be written.
/// Row-level problems are routed to the rejected stream instead.
pub fn run(request: &RunRequest) -> Result<RunSummary> {
    let span = info_span!("clean", input = %request.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let raw = fs::read(&request.input)
        .with_context(|| format!("read input {}", request.input.display()))?;
    debug!(bytes = raw.len(), "input loaded");

    let cleaned = clean_bytes(&raw)?;
    let input_rows = cleaned.total();

    write_outputs(
        &request.accepted_path,
        &request.rejected_path,
        &CleanedStreams {
            accepted: &cleaned.accepted,
            rejected: &cleaned.rejected,
        },
    )?;

    info!(
        input_rows,
        accepted = cleaned.accepted.len(),
        rejected = cleaned.rejected.len(),
        duration_ms = start.elapsed().as_millis(),
        "cleaning complete"
    );

    Ok(RunSummary {
        input_rows,
        accepted: cleaned.accepted.len(),
        rejected: cleaned.rejected.len(),
        accepted_path: request.accepted_path.clone(),
        rejected_path: request.rejected_path.clone(),
    })
}
