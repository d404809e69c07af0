//! Async stream adapters.
//!
//! Rendering itself never awaits; these adapters let async consumers such as
//! HTTP response bodies pull fragments with `StreamExt::next`.

use crate::render::{Render, render};
use bytes::Bytes;
use cadenza_core::{IntoNode, RenderError};
use futures::stream::{self, Stream, StreamExt};
use std::borrow::Cow;
use std::pin::Pin;

/// Boxed stream of rendered bytes.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, RenderError>> + Send>>;

impl Render {
	/// Converts the render into an async stream of fragments.
	///
	/// # Examples
	///
	/// ```
	/// use cadenza_core::h;
	/// use cadenza_renderer::render;
	/// use futures::StreamExt;
	///
	/// # #[tokio::main]
	/// # async fn main() {
	/// let mut stream = render(h("p", (), "hi")).into_stream();
	/// let mut html = String::new();
	/// while let Some(fragment) = stream.next().await {
	///     html.push_str(&fragment.unwrap());
	/// }
	/// assert_eq!(html, "<p>hi</p>");
	/// # }
	/// ```
	pub fn into_stream(self) -> stream::Iter<Self> {
		stream::iter(self)
	}
}

/// Renders `node` as a stream of byte chunks, one per fragment.
///
/// The stream ends after the first error.
pub fn render_bytes_stream(node: impl IntoNode) -> ByteStream {
	let chunks = render(node).into_stream().map(|fragment| {
		fragment.map(|fragment| match fragment {
			Cow::Borrowed(s) => Bytes::from_static(s.as_bytes()),
			Cow::Owned(s) => Bytes::from(s),
		})
	});
	Box::pin(chunks)
}
