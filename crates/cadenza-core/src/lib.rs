//! Cadenza Core - node model for lazily rendered HTML trees
//!
//! This crate holds everything a tree needs before it is rendered:
//!
//! - [`node`]: the [`Node`] tagged union and the [`IntoNode`] conversion trait
//! - [`attributes`]: insertion-ordered [`Attributes`]
//! - [`element`]: [`Element`], [`Tag`] and the [`h`] construction helper
//! - [`component`]: [`Component`] handles and the [`Props`] they receive
//! - [`escape`]: text and attribute escaping
//! - [`number`]: decimal formatting for numeric nodes
//! - [`json`]: loading trees from JSON with a [`ComponentRegistry`]
//!
//! The renderer itself lives in `cadenza-renderer`.
//!
//! ## Example
//!
//! ```
//! use cadenza_core::{Component, Node, Props, h};
//!
//! let greeting = Component::new("Greeting", |props: Props| {
//!     let name = props.get("name").unwrap_or("world").to_string();
//!     h("p", (), format!("Hello, {name}!"))
//! });
//!
//! let tree: Node = h(greeting, [("name", "Cadenza")], ());
//! assert_eq!(tree.kind(), "element");
//! ```

pub mod attributes;
pub mod component;
pub mod element;
pub mod error;
pub mod escape;
pub mod json;
mod macros;
pub mod node;
pub mod number;

pub use attributes::Attributes;
pub use component::{Component, ComponentFn, Props};
pub use element::{Element, Tag, h};
pub use error::RenderError;
pub use escape::{escape_attr, escape_text};
pub use json::{ComponentRegistry, LoadError, load_tree, node_from_value};
pub use node::{IntoNode, Node};
pub use number::format_number;
