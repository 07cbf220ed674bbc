//! `--list-platforms`.

use std::io::Write;

use anyhow::{Context, Result};
use noopbin_core::{Platform, PLATFORMS};

pub fn run(out: &mut impl Write, json: bool) -> Result<()> {
    if json {
        let text =
            serde_json::to_string_pretty(PLATFORMS).context("failed to serialize platforms")?;
        writeln!(out, "{text}").context("failed to write platform list")?;
        return Ok(());
    }

    let width = Platform::all().map(|p| p.name.len()).max().unwrap_or(0);
    writeln!(out, "Platforms:").context("failed to write platform list")?;
    for p in Platform::all() {
        writeln!(
            out,
            "  {:<width$}  0x{:08X}  {}",
            p.name,
            p.noop,
            p.description,
            width = width
        )
        .context("failed to write platform list")?;
    }
    Ok(())
}
