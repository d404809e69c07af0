//! Cadenza CLI
//!
//! Renders a component tree and prints its HTML one fragment at a time.
//!
//! ## Usage
//!
//! ```bash
//! cadenza                          # the built-in <App />
//! cadenza --input tree.json -d 200 # a JSON tree, 200ms between fragments
//! cadenza -d 0 -vv                 # no pacing, debug logs on stderr
//! ```

use anyhow::Context;
use cadenza_cli::settings::{
	DefaultSource, EnvSource, OverrideSource, SettingsBuilder, TomlFileSource,
};
use cadenza_cli::{DemoSettings, demo, drive, verbosity_directive};
use cadenza_core::{Node, load_tree};
use cadenza_renderer::{RenderOptions, Renderer};
use clap::Parser;
use colored::Colorize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokio::io::AsyncWriteExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cadenza")]
#[command(about = "Render a component tree to HTML one fragment at a time", long_about = None)]
#[command(version)]
struct Cli {
	/// JSON tree to render (defaults to the built-in demo app)
	#[arg(short, long, value_name = "PATH")]
	input: Option<PathBuf>,

	/// Pause after each fragment, in milliseconds
	#[arg(short, long, value_name = "MS")]
	delay_ms: Option<u64>,

	/// TOML settings file
	#[arg(short, long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Do not print a newline after the last fragment
	#[arg(long)]
	no_newline: bool,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbosity: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
	let cli = Cli::parse();

	match run(cli).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("{} {:#}", "error:".red().bold(), err);
			ExitCode::FAILURE
		}
	}
}

async fn run(cli: Cli) -> anyhow::Result<()> {
	// Settings pick the final log filter, so they load under a bootstrap
	// subscriber driven by `-v` and `RUST_LOG` only.
	let bootstrap = stderr_subscriber(log_filter(cli.verbosity, None));
	let settings = tracing::subscriber::with_default(bootstrap, || load_settings(&cli))?;
	tracing::subscriber::set_global_default(stderr_subscriber(log_filter(
		cli.verbosity,
		settings.log_filter.as_deref(),
	)))?;

	let tree = match &settings.input {
		Some(path) => read_tree(path)?,
		None => demo::tree(),
	};

	let renderer =
		Renderer::with_options(RenderOptions::new().trace_fragments(settings.trace_fragments));
	let mut stdout = tokio::io::stdout();

	if let Err(err) = drive(renderer.render(tree), &mut stdout, settings.delay()).await {
		tracing::error!(error = %err, "render failed");
		return Err(err).context("rendering failed");
	}

	if settings.trailing_newline {
		stdout.write_all(b"\n").await?;
		stdout.flush().await?;
	}
	Ok(())
}

fn load_settings(cli: &Cli) -> anyhow::Result<DemoSettings> {
	let mut builder = SettingsBuilder::new()
		.add_source(DefaultSource::demo())
		.add_source(EnvSource::new());

	if let Some(path) = &cli.config {
		builder = builder.add_source(TomlFileSource::new(path).required(true));
	}

	let mut flags = OverrideSource::new();
	if let Some(delay_ms) = cli.delay_ms {
		flags = flags.with_value("delay_ms", delay_ms.into());
	}
	if let Some(input) = &cli.input {
		flags = flags.with_value("input", serde_json::to_value(input)?);
	}
	if cli.no_newline {
		flags = flags.with_value("trailing_newline", Value::Bool(false));
	}

	builder
		.add_source(flags)
		.build()
		.context("failed to load settings")
}

fn read_tree(path: &Path) -> anyhow::Result<Node> {
	let json = std::fs::read_to_string(path)
		.with_context(|| format!("failed to read {}", path.display()))?;
	let tree = load_tree(&json, &demo::registry())
		.with_context(|| format!("failed to load tree from {}", path.display()))?;
	tracing::info!(path = %path.display(), "loaded tree");
	Ok(tree)
}

fn log_filter(verbosity: u8, configured: Option<&str>) -> EnvFilter {
	match verbosity_directive(verbosity).or(configured) {
		Some(directive) => EnvFilter::new(directive),
		None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
	}
}

// Logs go to stderr so stdout carries only the rendered HTML.
fn stderr_subscriber(filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync + 'static {
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.finish()
}
