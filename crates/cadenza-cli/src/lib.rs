//! Cadenza CLI - the paced demo driver
//!
//! Renders a tree and writes each fragment to an async writer as soon as it
//! is produced, pausing between fragments so the incremental output is
//! visible in a terminal.
//!
//! ## Modules
//!
//! - [`demo`]: the built-in `App` component and its registry
//! - [`driver`]: the paced fragment writer
//! - [`settings`]: layered settings (defaults, TOML file, environment, flags)

pub mod demo;
pub mod driver;
pub mod settings;

pub use driver::drive;
pub use settings::{DemoSettings, SettingsBuilder, SettingsError};

/// Maps a `-v` count to a `tracing` filter directive.
///
/// Zero means "not requested" and returns `None` so other sources decide.
pub fn verbosity_directive(verbosity: u8) -> Option<&'static str> {
	match verbosity {
		0 => None,
		1 => Some("info"),
		2 => Some("debug"),
		_ => Some("trace"),
	}
}
