//! noopbin — create a binary of some size filled with NOOPs.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};

use noopbin_core::config::NoopbinConfig;
use noopbin_core::fill::effective_len;
use noopbin_core::{ByteOrder, Platform};

mod cmd;
mod logging;

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "noopbin",
    version,
    about = "Create a binary of some size filled with NOOPs!",
    after_help = "The size is rounded up with (size | 3) + 1, so a size that is \
                  already a multiple of 4 gains one extra 4-byte group."
)]
struct Args {
    /// Endianness of the pattern: 'little' or 'big'
    #[arg(
        short,
        long,
        value_name = "little|big",
        required_unless_present = "list_platforms"
    )]
    endian: Option<ByteOrder>,

    /// Size of the binary in bytes
    #[arg(
        short,
        long,
        value_name = "BYTES",
        value_parser = parse_size,
        required_unless_present = "list_platforms"
    )]
    size: Option<u64>,

    /// Name of the output binary file
    #[arg(
        short,
        long,
        value_name = "PATH",
        required_unless_present = "list_platforms"
    )]
    file: Option<PathBuf>,

    /// Target platform (see --list-platforms)
    #[arg(short, long, value_name = "NAME")]
    platform: Option<Platform>,

    /// Print the known platforms and exit
    #[arg(long)]
    list_platforms: bool,

    /// Print the platform listing as JSON
    #[arg(long, requires = "list_platforms")]
    json: bool,

    /// Increase verbosity of output (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_size(s: &str) -> Result<u64, String> {
    let size: u64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a positive number of bytes"))?;
    if size == 0 {
        return Err("size must be greater than zero".to_string());
    }
    if effective_len(size).is_none() {
        return Err(format!("size {size} is too large"));
    }
    Ok(size)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let args = Args::parse();

    let (config, config_err) = match NoopbinConfig::load() {
        Ok(c) => (c, None),
        Err(e) => (NoopbinConfig::default(), Some(e)),
    };
    logging::init(args.verbose, &config.log.filter);
    if let Some(e) = config_err {
        tracing::warn!(error = %e, "failed to load config, using defaults");
    }

    if let Err(e) = run(args, &config) {
        eprintln!("noopbin: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args, config: &NoopbinConfig) -> Result<()> {
    if args.list_platforms {
        return cmd::platforms::run(&mut std::io::stdout().lock(), args.json);
    }

    // clap enforces presence unless --list-platforms was given.
    let (Some(order), Some(size), Some(path)) = (args.endian, args.size, args.file) else {
        anyhow::bail!("missing arguments");
    };

    let platform = match args.platform {
        Some(p) => p,
        None => config.default_platform().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring configured platform");
            Platform::default()
        }),
    };

    cmd::generate::run(&cmd::generate::Generate {
        order,
        size,
        path,
        platform,
    })?;
    Ok(())
}
