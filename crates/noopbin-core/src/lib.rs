//! noopbin-core — NOOP-pattern binary generation.
//! The noopbin CLI is a thin shell over this crate.

pub mod config;
pub mod fill;
pub mod output;
pub mod pattern;
pub mod platform;

pub use fill::{FillBuffer, FillError, FillRequest, PatternFiller, RequestError};
pub use output::{OutputError, OutputSink};
pub use pattern::{pattern_group, ByteOrder, NOOP_PATTERN};
pub use platform::{Platform, PlatformInfo, PLATFORMS};
