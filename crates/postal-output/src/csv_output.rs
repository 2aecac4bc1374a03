//! CSV writers for the two output streams.
//!
//! Writers are generic over [`io::Write`] so tests can target in-memory
//! buffers; [`write_outputs`] is the path-based wrapper used by the CLI.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;
use tracing::info;

use postal_model::{ACCEPTED_HEADER, CleanRecord, REJECTED_HEADER, RejectedRecord};

use crate::CleanedStreams;

/// Write the accepted stream: fixed header, six-decimal coordinates.
pub fn write_accepted<W: io::Write>(sink: W, records: &[CleanRecord]) -> Result<()> {
    let mut writer = Writer::from_writer(sink);
    writer
        .write_record(ACCEPTED_HEADER)
        .context("write accepted header")?;
    for record in records {
        writer
            .write_record([
                record.postal_code.as_str(),
                record.area.as_str(),
                record.district.as_str(),
                &record.latitude_text(),
                &record.longitude_text(),
            ])
            .context("write accepted row")?;
    }
    writer.flush().context("flush accepted stream")?;
    Ok(())
}

/// Write the rejected stream: the five record fields plus the reason column.
pub fn write_rejected<W: io::Write>(sink: W, records: &[RejectedRecord]) -> Result<()> {
    let mut writer = Writer::from_writer(sink);
    writer
        .write_record(REJECTED_HEADER)
        .context("write rejected header")?;
    for record in records {
        writer
            .write_record([
                record.postal_code.as_str(),
                record.area.as_str(),
                record.district.as_str(),
                record.latitude.as_str(),
                record.longitude.as_str(),
                record.reason.as_str(),
            ])
            .context("write rejected row")?;
    }
    writer.flush().context("flush rejected stream")?;
    Ok(())
}

/// Write both streams to disk, creating parent directories as needed.
///
/// # Errors
///
/// Fails when either output file cannot be created or written; row-level
/// data never fails.
pub fn write_outputs(
    accepted_path: &Path,
    rejected_path: &Path,
    streams: &CleanedStreams<'_>,
) -> Result<()> {
    for path in [accepted_path, rejected_path] {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
    }

    let accepted_file = File::create(accepted_path)
        .with_context(|| format!("create {}", accepted_path.display()))?;
    write_accepted(accepted_file, streams.accepted)
        .with_context(|| format!("write {}", accepted_path.display()))?;

    let rejected_file = File::create(rejected_path)
        .with_context(|| format!("create {}", rejected_path.display()))?;
    write_rejected(rejected_file, streams.rejected)
        .with_context(|| format!("write {}", rejected_path.display()))?;

    info!(
        accepted = streams.accepted.len(),
        rejected = streams.rejected.len(),
        accepted_path = %accepted_path.display(),
        rejected_path = %rejected_path.display(),
        "outputs written"
    );
    Ok(())
}
