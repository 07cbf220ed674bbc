use crate::*;

use noopbin_core::config::{ConfigError, NoopbinConfig};
use noopbin_core::Platform;

#[test]
fn test_config_file_selects_platform_and_filter() {
    let scratch = Scratch::new("config-full");
    let path = scratch.path("config.toml");
    std::fs::write(
        &path,
        "[defaults]\nplatform = \"X86\"\n\n[log]\nfilter = \"noopbin_core=debug\"\n",
    )
    .unwrap();

    let config = NoopbinConfig::load_file(&path).unwrap();
    assert_eq!(config.default_platform().unwrap(), Platform::X86);
    assert_eq!(config.log.filter, "noopbin_core=debug");
}

#[test]
fn test_config_with_unknown_platform_loads_but_does_not_resolve() {
    let scratch = Scratch::new("config-unknown");
    let path = scratch.path("config.toml");
    std::fs::write(&path, "[defaults]\nplatform = \"m68k\"\n").unwrap();

    let config = NoopbinConfig::load_file(&path).unwrap();
    assert!(matches!(
        config.default_platform(),
        Err(ConfigError::Platform(_))
    ));
}

#[test]
fn test_config_with_wrong_types_is_rejected() {
    let scratch = Scratch::new("config-types");
    let path = scratch.path("config.toml");
    std::fs::write(&path, "[log]\nfilter = 3\n").unwrap();

    assert!(matches!(
        NoopbinConfig::load_file(&path),
        Err(ConfigError::ParseFailed(..))
    ));
}
