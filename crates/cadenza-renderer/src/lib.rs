//! Cadenza Renderer - lazy HTML rendering
//!
//! Turns a [`Node`](cadenza_core::Node) tree into HTML one fragment at a
//! time. Nothing is rendered until the consumer asks for the next fragment,
//! and dropping the iterator stops the work.
//!
//! ## Entry points
//!
//! - [`render`]: the lazy fragment iterator ([`Render`])
//! - [`render_to_string`]: collect all fragments
//! - [`render_to_writer`]: write fragments to an [`std::io::Write`]
//! - [`Renderer`]: the same operations with [`RenderOptions`]
//! - `stream` feature: [`Render::into_stream`] and [`render_bytes_stream`]
//!
//! ## Example
//!
//! ```
//! use cadenza_core::h;
//! use cadenza_renderer::render;
//!
//! let fragments: Vec<String> = render(h("div", [("id", "hello")], "Hello world!"))
//!     .map(|fragment| fragment.map(|f| f.into_owned()))
//!     .collect::<Result<_, _>>()?;
//!
//! assert_eq!(fragments, ["<div", " id=\"hello\"", ">", "Hello world!", "</div>"]);
//! # Ok::<(), cadenza_core::RenderError>(())
//! ```

pub mod options;
pub mod render;
#[cfg(feature = "stream")]
pub mod stream;

pub use cadenza_core::RenderError;
pub use options::RenderOptions;
pub use render::{Render, Renderer, WriteError, render, render_to_string, render_to_writer};
#[cfg(feature = "stream")]
pub use stream::{ByteStream, render_bytes_stream};
