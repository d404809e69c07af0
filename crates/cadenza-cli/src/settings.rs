//! Layered settings for the demo driver
//!
//! Sources are merged in priority order (flags > environment > TOML file >
//! defaults). Each source produces a flat map of JSON values; the merged map
//! is deserialized into [`DemoSettings`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Prefix of the environment variables read by [`EnvSource`].
pub const ENV_PREFIX: &str = "CADENZA_";

/// Settings of the demo driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
	/// Pause after each fragment, in milliseconds.
	pub delay_ms: u64,
	/// JSON tree to render instead of the built-in demo.
	pub input: Option<PathBuf>,
	/// Print a newline after the last fragment.
	pub trailing_newline: bool,
	/// `tracing` filter directive used when `-v` is not given.
	pub log_filter: Option<String>,
	/// Emit a trace event per fragment.
	pub trace_fragments: bool,
}

impl Default for DemoSettings {
	fn default() -> Self {
		Self {
			delay_ms: 1000,
			input: None,
			trailing_newline: true,
			log_filter: None,
			trace_fragments: false,
		}
	}
}

impl DemoSettings {
	/// Returns the pause between fragments.
	pub fn delay(&self) -> Duration {
		Duration::from_millis(self.delay_ms)
	}
}

/// Error type for settings loading
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("invalid TOML in {path}: {source}")]
	Toml {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("environment variable {key} is not valid UTF-8 (got {value:?})")]
	Env { key: String, value: String },

	#[error("invalid settings: {0}")]
	Invalid(#[from] serde_json::Error),
}

/// A source of settings values.
pub trait ConfigSource: Send + Sync {
	/// Loads this source's values.
	fn load(&self) -> Result<IndexMap<String, Value>, SettingsError>;

	/// Priority of this source (higher wins).
	fn priority(&self) -> u8;

	/// Human-readable description, used in logs.
	fn description(&self) -> String;
}

/// Fixed default values.
#[derive(Debug, Clone, Default)]
pub struct DefaultSource {
	values: IndexMap<String, Value>,
}

impl DefaultSource {
	/// Creates an empty default source.
	pub fn new() -> Self {
		Self::default()
	}

	/// The defaults of [`DemoSettings`].
	pub fn demo() -> Self {
		let defaults = DemoSettings::default();
		Self::new()
			.with_value("delay_ms", defaults.delay_ms.into())
			.with_value("trailing_newline", defaults.trailing_newline.into())
			.with_value("trace_fragments", defaults.trace_fragments.into())
	}

	/// Adds a default value.
	pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
		self.values.insert(key.into(), value);
		self
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SettingsError> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		0
	}

	fn description(&self) -> String {
		"Default values".to_string()
	}
}

/// Settings read from a TOML file.
///
/// A missing file yields no values unless the source is marked required.
#[derive(Debug, Clone)]
pub struct TomlFileSource {
	path: PathBuf,
	required: bool,
}

impl TomlFileSource {
	/// Creates a source for the file at `path`.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: false,
		}
	}

	/// Makes a missing file an error.
	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SettingsError> {
		let content = match fs::read_to_string(&self.path) {
			Ok(content) => content,
			Err(err) if err.kind() == io::ErrorKind::NotFound && !self.required => {
				return Ok(IndexMap::new());
			}
			Err(source) => {
				return Err(SettingsError::Io {
					path: self.path.clone(),
					source,
				});
			}
		};

		let table: toml::Table = toml::from_str(&content).map_err(|source| SettingsError::Toml {
			path: self.path.clone(),
			source,
		})?;

		let mut values = IndexMap::new();
		for (key, value) in table {
			values.insert(key, serde_json::to_value(value)?);
		}
		Ok(values)
	}

	fn priority(&self) -> u8 {
		50
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// Settings read from prefixed environment variables.
///
/// `CADENZA_DELAY_MS=250` sets `delay_ms`. Integers and booleans are parsed;
/// anything else is kept as a string.
#[derive(Debug, Clone)]
pub struct EnvSource {
	prefix: String,
	vars: Option<Vec<(OsString, OsString)>>,
}

impl EnvSource {
	/// Creates a source reading the process environment with [`ENV_PREFIX`].
	pub fn new() -> Self {
		Self {
			prefix: ENV_PREFIX.to_string(),
			vars: None,
		}
	}

	/// Reads from the given variables instead of the process environment.
	pub fn with_vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<OsString>,
		V: Into<OsString>,
	{
		self.vars = Some(
			vars.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		);
		self
	}

	fn parse_value(value: String) -> Value {
		if let Ok(number) = value.parse::<u64>() {
			Value::Number(number.into())
		} else if let Ok(number) = value.parse::<i64>() {
			Value::Number(number.into())
		} else if let Ok(flag) = value.parse::<bool>() {
			Value::Bool(flag)
		} else {
			Value::String(value)
		}
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SettingsError> {
		let vars: Vec<(OsString, OsString)> = match &self.vars {
			Some(vars) => vars.clone(),
			None => std::env::vars_os().collect(),
		};

		let mut values = IndexMap::new();
		for (key, value) in vars {
			let Some(key) = key.to_str() else {
				continue;
			};
			let Some(name) = key.strip_prefix(&self.prefix) else {
				continue;
			};
			let value = value.into_string().map_err(|raw| SettingsError::Env {
				key: key.to_string(),
				value: raw.to_string_lossy().into_owned(),
			})?;

			// Paths are never numbers.
			let parsed = if name.eq_ignore_ascii_case("input") {
				Value::String(value)
			} else {
				Self::parse_value(value)
			};
			values.insert(name.to_lowercase(), parsed);
		}
		Ok(values)
	}

	fn priority(&self) -> u8 {
		100
	}

	fn description(&self) -> String {
		format!("Environment variables (prefix: {})", self.prefix)
	}
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct OverrideSource {
	values: IndexMap<String, Value>,
}

impl OverrideSource {
	/// Creates an empty override source.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets an override.
	pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
		self.values.insert(key.into(), value);
		self
	}
}

impl ConfigSource for OverrideSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SettingsError> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		200
	}

	fn description(&self) -> String {
		"Command-line flags".to_string()
	}
}

/// Merges [`ConfigSource`]s into [`DemoSettings`].
///
/// # Examples
///
/// ```
/// use cadenza_cli::settings::{DefaultSource, EnvSource, SettingsBuilder};
///
/// let settings = SettingsBuilder::new()
///     .add_source(DefaultSource::demo())
///     .add_source(EnvSource::new().with_vars([("CADENZA_DELAY_MS", "5")]))
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.delay_ms, 5);
/// assert!(settings.trailing_newline);
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	/// Creates a builder with no sources.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a source.
	pub fn add_source(mut self, source: impl ConfigSource + 'static) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Merges all sources into one map; higher priorities overwrite lower ones.
	pub fn build_values(&self) -> Result<IndexMap<String, Value>, SettingsError> {
		let mut sources: Vec<&dyn ConfigSource> = self.sources.iter().map(|s| s.as_ref()).collect();
		sources.sort_by_key(|source| source.priority());

		let mut merged = IndexMap::new();
		for source in sources {
			let values = source.load()?;
			tracing::debug!(
				source = %source.description(),
				keys = values.len(),
				"loaded settings source"
			);
			merged.extend(values);
		}
		Ok(merged)
	}

	/// Builds the settings.
	pub fn build(&self) -> Result<DemoSettings, SettingsError> {
		let merged = self.build_values()?;
		let object = Value::Object(merged.into_iter().collect());
		Ok(serde_json::from_value(object)?)
	}
}
