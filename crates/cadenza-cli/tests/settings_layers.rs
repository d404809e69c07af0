//! Layered settings: defaults < TOML file < environment < flags.

use cadenza_cli::settings::{
	ConfigSource, DefaultSource, EnvSource, OverrideSource, SettingsBuilder, SettingsError,
	TomlFileSource,
};
use rstest::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[fixture]
fn config_dir() -> TempDir {
	let dir = TempDir::new().unwrap();
	fs::write(
		dir.path().join("cadenza.toml"),
		r#"
delay_ms = 300
trailing_newline = false
log_filter = "cadenza=debug"
input = "trees/home.json"
"#,
	)
	.unwrap();
	dir
}

#[rstest]
fn test_toml_overrides_defaults(config_dir: TempDir) {
	let settings = SettingsBuilder::new()
		.add_source(DefaultSource::demo())
		.add_source(TomlFileSource::new(config_dir.path().join("cadenza.toml")))
		.build()
		.unwrap();

	assert_eq!(settings.delay_ms, 300);
	assert!(!settings.trailing_newline);
	assert_eq!(settings.log_filter.as_deref(), Some("cadenza=debug"));
	assert_eq!(settings.input, Some(PathBuf::from("trees/home.json")));
}

#[rstest]
fn test_full_precedence(config_dir: TempDir) {
	let builder = SettingsBuilder::new()
		.add_source(TomlFileSource::new(config_dir.path().join("cadenza.toml")))
		.add_source(DefaultSource::demo())
		.add_source(
			EnvSource::new().with_vars([("CADENZA_DELAY_MS", "20"), ("CADENZA_TRACE_FRAGMENTS", "true")]),
		)
		.add_source(OverrideSource::new().with_value("input", "flag.json".into()));

	let settings = builder.build().unwrap();
	assert_eq!(settings.delay_ms, 20);
	assert!(settings.trace_fragments);
	assert!(!settings.trailing_newline);
	assert_eq!(settings.input, Some(PathBuf::from("flag.json")));
}

#[rstest]
fn test_optional_missing_file_is_empty() {
	let dir = TempDir::new().unwrap();
	let source = TomlFileSource::new(dir.path().join("absent.toml"));
	assert!(source.load().unwrap().is_empty());
}

#[rstest]
fn test_required_missing_file_fails() {
	let dir = TempDir::new().unwrap();
	let err = SettingsBuilder::new()
		.add_source(TomlFileSource::new(dir.path().join("absent.toml")).required(true))
		.build()
		.unwrap_err();
	assert!(matches!(err, SettingsError::Io { .. }));
}

#[rstest]
fn test_malformed_toml_fails() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("broken.toml");
	fs::write(&path, "delay_ms = [").unwrap();

	let err = TomlFileSource::new(&path).load().unwrap_err();
	assert!(matches!(err, SettingsError::Toml { .. }));
	assert!(err.to_string().contains("broken.toml"));
}

#[rstest]
fn test_sources_describe_themselves() {
	assert_eq!(DefaultSource::demo().description(), "Default values");
	assert_eq!(
		EnvSource::new().description(),
		"Environment variables (prefix: CADENZA_)"
	);
	assert!(
		TomlFileSource::new("cadenza.toml")
			.description()
			.ends_with("cadenza.toml")
	);
}
