//! Writing serialized grids to disk

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use log::info;
use super::errors::GridResult;
use crate::utils::progress::ProgressTracker;

// Rows written between progress bar updates
const PROGRESS_CHUNK: usize = 4096;

/// Write text rows to a file, each terminated by a newline
///
/// The destination is created or truncated. A failure partway through can
/// leave a partial file behind.
///
/// # Arguments
/// * `path` - Destination file
/// * `rows` - Rows as produced by `materialize`, header first
/// * `show_progress` - Draw a progress bar while writing
pub fn write_rows<P: AsRef<Path>>(path: P, rows: &[String], show_progress: bool) -> GridResult<()> {
    let path = path.as_ref();
    info!("Writing {} rows to {}", rows.len(), path.display());

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let progress = if show_progress {
        ProgressTracker::new(rows.len() as u64, "Writing grid")
    } else {
        ProgressTracker::hidden(rows.len() as u64)
    };

    for chunk in rows.chunks(PROGRESS_CHUNK) {
        for row in chunk {
            writer.write_all(row.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        progress.increment(chunk.len() as u64);
    }

    writer.flush()?;
    progress.finish();

    Ok(())
}
