//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed cwd and env var manipulation.

use std::path::{Path, PathBuf};

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use luty_config::{ConfigError, LutyConfig};
use luty_core::Sector;

#[test]
fn loads_scan_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[scan]
output = "out/sector.png"
center = [5, -5, 10]
radius = 25
width = 640
height = 480
supersample = 2
"#,
        )?;

        let config: LutyConfig = Figment::from(Serialized::defaults(LutyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.scan.output, PathBuf::from("out/sector.png"));
        assert_eq!(config.scan.sector(), Sector::new([5, -5, 10], 25));
        assert_eq!(config.scan.width, 640);
        assert_eq!(config.scan.height, 480);
        assert_eq!(config.scan.supersample, 2);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[scan]\nradius = 10\n")?;

        let config: LutyConfig = Figment::from(Serialized::defaults(LutyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.scan.radius, 10);
        assert_eq!(config.scan.supersample, 4);
        assert_eq!(config.galaxy.path, PathBuf::from("galaxy-001.json"));
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "lutymaps.toml",
            r#"
[galaxy]
path = "galaxy-002.json"

[accounts]
path = "data/accounts.json"
"#,
        )?;

        let config = LutyConfig::load(None).expect("config loads");
        assert_eq!(config.galaxy.path, PathBuf::from("galaxy-002.json"));
        assert_eq!(config.accounts.path, PathBuf::from("data/accounts.json"));
        Ok(())
    });
}

#[test]
fn explicit_file_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file("lutymaps.toml", "[scan]\nradius = 10\n")?;
        jail.create_file("custom.toml", "[scan]\nradius = 30\n")?;

        let config = LutyConfig::load(Some(Path::new("custom.toml"))).expect("config loads");
        assert_eq!(config.scan.radius, 30);
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let err = LutyConfig::load(Some(Path::new("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile { .. }));
        Ok(())
    });
}

#[test]
fn negative_radius_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file("lutymaps.toml", "[scan]\nradius = -1\n")?;
        let err = LutyConfig::load(None).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

#[test]
fn invalid_size_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file("lutymaps.toml", "[scan]\nwidth = 0\n")?;
        let err = LutyConfig::load(None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}
