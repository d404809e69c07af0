//! Renderer options.

/// Options for rendering.
///
/// Options only affect diagnostics; the emitted fragments are identical for
/// every configuration.
///
/// # Examples
///
/// ```
/// use cadenza_renderer::RenderOptions;
///
/// let options = RenderOptions::new().trace_fragments(true);
/// assert!(options.trace_fragments);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
	/// Emit a `trace` event for every fragment produced.
	pub trace_fragments: bool,
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Enables or disables per-fragment tracing.
	pub fn trace_fragments(mut self, enabled: bool) -> Self {
		self.trace_fragments = enabled;
		self
	}
}
