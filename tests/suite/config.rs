//! Configuration file loading

use std::io::Write;

use welfare_config::{ConfigError, Settings};

#[test]
fn settings_load_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[logging]\nfilter = \"debug\"\n\n[simulation]\nseed = 3\ndraws = 10"
    )
    .unwrap();

    let settings = Settings::load_from(file.path()).unwrap();
    assert_eq!(settings.log_filter, "debug");
    assert_eq!(settings.simulation.seed, Some(3));
    assert_eq!(settings.simulation.draws.get(), 10);
}

#[test]
fn invalid_settings_are_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[simulation]\ndraws = 0").unwrap();
    assert!(matches!(
        Settings::load_from(file.path()),
        Err(ConfigError::InvalidDraws)
    ));
}
