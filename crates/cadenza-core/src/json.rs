//! Loading trees from JSON.
//!
//! The accepted shape is the one a JSX factory produces:
//!
//! ```json
//! { "type": "div", "props": { "id": "hello" }, "children": ["Hello world!"] }
//! ```
//!
//! Numbers, strings, booleans, `null` and arrays map onto the matching
//! [`Node`] variants. An object with a string `type` becomes an element; the
//! type names a registered component if the [`ComponentRegistry`] knows it,
//! otherwise an HTML tag. Any other object is kept as [`Node::Object`], which
//! the renderer rejects when it reaches it.

use crate::attributes::Attributes;
use crate::component::Component;
use crate::element::{Element, Tag};
use crate::node::Node;
use crate::number::format_number;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Error type for tree loading.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	#[error("invalid JSON tree: {0}")]
	Json(#[from] serde_json::Error),
}

/// Named components available to JSON trees.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
	components: IndexMap<String, Component>,
}

impl ComponentRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a component under a name, returning any component it replaces.
	pub fn register(&mut self, name: impl Into<String>, component: Component) -> Option<Component> {
		let name = name.into();
		tracing::debug!(component = %name, "registering component");
		self.components.insert(name, component)
	}

	/// Builder form of [`register`](Self::register).
	pub fn with(mut self, name: impl Into<String>, component: Component) -> Self {
		self.register(name, component);
		self
	}

	/// Looks up a component by name.
	pub fn get(&self, name: &str) -> Option<&Component> {
		self.components.get(name)
	}

	/// Returns `true` if a component is registered under `name`.
	pub fn contains(&self, name: &str) -> bool {
		self.components.contains_key(name)
	}

	/// Returns registered names in registration order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.components.keys().map(String::as_str)
	}
}

/// Parses JSON text into a tree.
///
/// Only JSON syntax errors fail here; unrecognized shapes are kept and fail
/// at render time.
///
/// # Example
///
/// ```
/// use cadenza_core::{ComponentRegistry, load_tree};
///
/// let tree = load_tree(r#"{"type": "p", "children": ["hi", 1]}"#, &ComponentRegistry::new())?;
/// assert_eq!(tree.kind(), "element");
/// # Ok::<(), cadenza_core::LoadError>(())
/// ```
pub fn load_tree(json: &str, registry: &ComponentRegistry) -> Result<Node, LoadError> {
	let value: Value = serde_json::from_str(json)?;
	Ok(node_from_value(value, registry))
}

/// Converts a JSON value into a tree.
pub fn node_from_value(value: Value, registry: &ComponentRegistry) -> Node {
	match value {
		Value::Null | Value::Bool(_) => Node::Empty,
		Value::Number(number) => Node::Number(number.as_f64().unwrap_or(f64::NAN)),
		Value::String(text) => Node::Text(text.into()),
		Value::Array(items) => Node::List(
			items
				.into_iter()
				.map(|item| node_from_value(item, registry))
				.collect(),
		),
		Value::Object(map) => node_from_object(map, registry),
	}
}

fn node_from_object(mut map: Map<String, Value>, registry: &ComponentRegistry) -> Node {
	let tag = match map.get("type") {
		Some(Value::String(name)) => match registry.get(name) {
			Some(component) => Tag::Component(component.clone()),
			None => Tag::from(name.clone()),
		},
		_ => return Node::Object(map),
	};

	let attributes = match map.get("props") {
		None | Some(Value::Null) => Attributes::new(),
		Some(Value::Object(props)) => attributes_from_props(props),
		Some(_) => return Node::Object(map),
	};

	let children = map
		.remove("children")
		.map_or(Node::Empty, |children| node_from_value(children, registry));

	Node::Element(
		Element::new(tag)
			.attributes_from(attributes)
			.with_children(children),
	)
}

// Attribute values are not validated: scalars are stringified (numbers the
// same way numeric nodes render) and nested values are kept as JSON text.
fn attributes_from_props(props: &Map<String, Value>) -> Attributes {
	props
		.iter()
		.filter_map(|(name, value)| {
			let value = match value {
				Value::Null => return None,
				Value::String(s) => s.clone(),
				Value::Bool(b) => b.to_string(),
				Value::Number(n) => format_number(n.as_f64().unwrap_or(f64::NAN)),
				other => other.to_string(),
			};
			Some((name.clone(), value))
		})
		.collect()
}
