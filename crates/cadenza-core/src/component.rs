//! Components and the props they receive.
//!
//! A component is a function from [`Props`] to a replacement [`Node`]. It is
//! invoked every time an element using it as a tag is rendered; results are
//! never cached.
//!
//! ## Example
//!
//! ```
//! use cadenza_core::{Component, Node, Props, h};
//!
//! let button = Component::new("Button", |props: Props| {
//!     let variant = props.get("variant").unwrap_or("primary").to_string();
//!     h("button", [("class", variant)], props.into_children())
//! });
//!
//! let node = h(button, [("variant", "danger")], "Delete");
//! # let _ = node;
//! ```

use crate::attributes::Attributes;
use crate::node::Node;
use std::borrow::Cow;
use std::sync::Arc;

/// Callable body of a component.
///
/// Implemented for every `Fn(Props) -> Node` closure or function that is
/// `Send + Sync + 'static`.
pub trait ComponentFn: Send + Sync + 'static {
	/// Produces the node this component renders to.
	fn call(&self, props: Props) -> Node;
}

impl<F> ComponentFn for F
where
	F: Fn(Props) -> Node + Send + Sync + 'static,
{
	fn call(&self, props: Props) -> Node {
		self(props)
	}
}

/// A named, cheaply clonable component handle.
#[derive(Clone)]
pub struct Component {
	name: Cow<'static, str>,
	inner: Arc<dyn ComponentFn>,
}

impl Component {
	/// Creates a component with an explicit name.
	pub fn new<F: ComponentFn>(name: impl Into<Cow<'static, str>>, body: F) -> Self {
		Self {
			name: name.into(),
			inner: Arc::new(body),
		}
	}

	/// Creates a component named after the body's type.
	pub fn from_fn<F: ComponentFn>(body: F) -> Self {
		Self::new(std::any::type_name::<F>(), body)
	}

	/// Returns the component's name for debugging and logs.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Invokes the component.
	pub fn call(&self, props: Props) -> Node {
		tracing::debug!(component = %self.name, attributes = props.attributes().len(), "invoking component");
		self.inner.call(props)
	}

	/// Returns `true` if both handles point to the same component body.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl std::fmt::Debug for Component {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Component")
			.field("name", &self.name)
			.finish_non_exhaustive()
	}
}

/// Input of a component: the element's attributes plus its children.
#[derive(Debug, Clone, Default)]
pub struct Props {
	attributes: Attributes,
	children: Node,
}

impl Props {
	/// Builds props from an element's attributes and children.
	///
	/// An attribute literally named `children` is shadowed by the real
	/// children and dropped from the attribute map.
	pub fn new(mut attributes: Attributes, children: Node) -> Self {
		attributes.remove("children");
		Self {
			attributes,
			children,
		}
	}

	/// Returns the value of an attribute.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.attributes.get(name)
	}

	/// Returns the attributes.
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Returns the children node.
	pub fn children(&self) -> &Node {
		&self.children
	}

	/// Consumes the props and returns the children node.
	pub fn into_children(self) -> Node {
		self.children
	}

	/// Consumes the props and returns `(attributes, children)`.
	pub fn into_parts(self) -> (Attributes, Node) {
		(self.attributes, self.children)
	}
}
