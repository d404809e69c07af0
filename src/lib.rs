//! # Cadenza
//!
//! Lazy rendering of JSX-style component trees to HTML.
//!
//! A tree of [`Node`]s is built with [`h`], the [`h!`] macro or the
//! [`Element`] builder. Components are plain functions from [`Props`] to a
//! [`Node`]. Rendering is pull-based: [`render`] returns an iterator that
//! produces one HTML fragment per `next()` call, so output can be forwarded
//! as soon as it exists.
//!
//! ## Quick Example
//!
//! ```
//! use cadenza::prelude::*;
//!
//! let app = Component::new("App", |_props: Props| {
//!     h("div", [("id", "hello")], "Hello world!")
//! });
//!
//! let html = render_to_string(h(app, (), ()))?;
//! assert_eq!(html, "<div id=\"hello\">Hello world!</div>");
//! # Ok::<(), cadenza::RenderError>(())
//! ```
//!
//! ## Crates
//!
//! - `cadenza-core`: node model, components, escaping, JSON loading
//! - `cadenza-renderer`: the lazy renderer and async adapters
//!
//! ## Feature Flags
//!
//! - `stream` (default): `Render::into_stream` and `render_bytes_stream`

pub use cadenza_core::{
	Attributes, Component, ComponentFn, ComponentRegistry, Element, IntoNode, LoadError, Node,
	Props, RenderError, Tag, escape_attr, escape_text, format_number, h, load_tree,
	node_from_value,
};
pub use cadenza_renderer::{
	Render, RenderOptions, Renderer, WriteError, render, render_to_string, render_to_writer,
};
#[cfg(feature = "stream")]
pub use cadenza_renderer::{ByteStream, render_bytes_stream};

/// Re-exports of the types used to build and render trees.
pub mod prelude {
	pub use crate::{
		Attributes, Component, Element, IntoNode, Node, Props, RenderError, Renderer, h,
		render, render_to_string,
	};
}
