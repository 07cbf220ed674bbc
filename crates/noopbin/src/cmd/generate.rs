//! Binary generation: open the output, fill, write.

use std::path::PathBuf;

use anyhow::{Context, Result};
use noopbin_core::{ByteOrder, FillRequest, OutputSink, PatternFiller, Platform};

#[derive(Debug, Clone)]
pub struct Generate {
    pub order: ByteOrder,
    pub size: u64,
    pub path: PathBuf,
    pub platform: Platform,
}

/// Returns the number of bytes written.
pub fn run(job: &Generate) -> Result<u64> {
    let request = FillRequest::new(job.size, job.order).context("invalid size")?;

    tracing::info!(
        platform = %job.platform,
        order = %job.order,
        requested = job.size,
        effective = request.effective_len(),
        path = %job.path.display(),
        "generating NOOP binary"
    );

    // Opened (and truncated) before the buffer exists, as the tool always has.
    let sink = OutputSink::create(&job.path)?;
    let buffer = PatternFiller::try_fill(&request)?;
    let written = sink.write(&buffer)?;
    Ok(written)
}
