//! Elements and the construction helper.
//!
//! An [`Element`] pairs a [`Tag`] with [`Attributes`] and a children node.
//! String tags render as HTML elements; component tags are invoked during
//! rendering to produce a replacement node.
//!
//! ## Example
//!
//! ```
//! use cadenza_core::{Element, IntoNode, h};
//!
//! // Builder form
//! let card = Element::new("section")
//!     .attr("class", "card")
//!     .child(Element::new("h2").child("Title"))
//!     .child("Body text")
//!     .into_node();
//!
//! // Factory form, equivalent to `<div id="hello">Hello world!</div>`
//! let hello = h("div", [("id", "hello")], "Hello world!");
//! # let _ = (card, hello);
//! ```

use crate::attributes::Attributes;
use crate::component::Component;
use crate::node::{IntoNode, Node};
use std::borrow::Cow;

/// The tag of an element: an HTML tag name or a component.
#[derive(Clone)]
pub enum Tag {
	/// An HTML tag name such as `div`.
	Name(Cow<'static, str>),
	/// A component invoked with the element's props.
	Component(Component),
}

impl Tag {
	/// Returns the tag name, or the component name for component tags.
	pub fn name(&self) -> &str {
		match self {
			Tag::Name(name) => name,
			Tag::Component(component) => component.name(),
		}
	}

	/// Returns `true` if this tag is a component.
	pub fn is_component(&self) -> bool {
		matches!(self, Tag::Component(_))
	}
}

impl std::fmt::Debug for Tag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Tag::Name(name) => f.debug_tuple("Name").field(name).finish(),
			Tag::Component(component) => f.debug_tuple("Component").field(component).finish(),
		}
	}
}

impl From<&'static str> for Tag {
	fn from(name: &'static str) -> Self {
		Tag::Name(Cow::Borrowed(name))
	}
}

impl From<String> for Tag {
	fn from(name: String) -> Self {
		Tag::Name(Cow::Owned(name))
	}
}

impl From<Cow<'static, str>> for Tag {
	fn from(name: Cow<'static, str>) -> Self {
		Tag::Name(name)
	}
}

impl From<Component> for Tag {
	fn from(component: Component) -> Self {
		Tag::Component(component)
	}
}

/// An element node: tag, attributes and children.
#[derive(Debug, Clone)]
pub struct Element {
	tag: Tag,
	attributes: Attributes,
	children: Box<Node>,
}

impl Element {
	/// Creates an element with no attributes and an empty children list.
	pub fn new(tag: impl Into<Tag>) -> Self {
		Self {
			tag: tag.into(),
			attributes: Attributes::new(),
			children: Box::new(Node::List(Vec::new())),
		}
	}

	/// Creates an element whose tag is a component.
	pub fn component(component: Component) -> Self {
		Self::new(component)
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attributes.insert(name, value);
		self
	}

	/// Merges attributes into the element, later keys replacing earlier ones.
	pub fn attributes_from(mut self, attributes: impl Into<Attributes>) -> Self {
		self.attributes.extend(attributes.into());
		self
	}

	/// Appends a child.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		self.push_child(child.into_node());
		self
	}

	/// Appends several children.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		for child in children {
			self.push_child(child.into_node());
		}
		self
	}

	/// Replaces the children node as a whole.
	pub fn with_children(mut self, children: impl IntoNode) -> Self {
		self.children = Box::new(children.into_node());
		self
	}

	fn push_child(&mut self, child: Node) {
		match &mut *self.children {
			Node::List(list) => list.push(child),
			other => {
				let previous = std::mem::take(other);
				*other = Node::List(vec![previous, child]);
			}
		}
	}

	/// Returns the tag.
	pub fn tag(&self) -> &Tag {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Returns the children node.
	pub fn child_node(&self) -> &Node {
		&self.children
	}

	/// Consumes the element and returns `(tag, attributes, children)`.
	pub fn into_parts(self) -> (Tag, Attributes, Node) {
		(self.tag, self.attributes, *self.children)
	}
}

/// Builds a uniform element node from a tag, attributes and children.
///
/// The children of the resulting element are always a [`Node::List`]: a list
/// is kept as is, an empty value becomes an empty list, and any other node is
/// wrapped in a one-element list.
///
/// # Example
///
/// ```
/// use cadenza_core::{Node, h};
///
/// let node = h("ul", (), vec![h("li", (), "one"), h("li", (), "two")]);
/// assert_eq!(node.kind(), "element");
/// ```
pub fn h(tag: impl Into<Tag>, attributes: impl Into<Attributes>, children: impl IntoNode) -> Node {
	let children = match children.into_node() {
		list @ Node::List(_) => list,
		Node::Empty => Node::List(Vec::new()),
		other => Node::List(vec![other]),
	};
	Node::Element(Element {
		tag: tag.into(),
		attributes: attributes.into(),
		children: Box::new(children),
	})
}
