//! Node types for component trees.
//!
//! A [`Node`] is one piece of renderable content. Trees are built fresh for a
//! render call and consumed by it; nodes carry no identity beyond that.
//!
//! ## Example
//!
//! ```
//! use cadenza_core::{IntoNode, Node};
//!
//! assert!(matches!("text".into_node(), Node::Text(_)));
//! assert!(matches!(42.into_node(), Node::Number(_)));
//! assert!(matches!(false.into_node(), Node::Empty));
//! assert!(matches!(None::<&str>.into_node(), Node::Empty));
//! assert!(matches!(vec!["a", "b"].into_node(), Node::List(_)));
//! ```

use crate::component::Component;
use crate::element::Element;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// A unified representation of renderable content.
#[derive(Debug, Clone, Default)]
pub enum Node {
	/// Raw text, escaped when rendered.
	Text(Cow<'static, str>),
	/// A numeric value, rendered in decimal form.
	Number(f64),
	/// Nothing. Produced by booleans and absent values.
	#[default]
	Empty,
	/// An ordered sequence of nodes rendered one after another.
	List(Vec<Node>),
	/// An HTML element or a component invocation.
	Element(Element),
	/// A component used directly as a node rather than as an element tag.
	///
	/// The renderer cannot emit anything for this shape and fails.
	Function(Component),
	/// An untyped object that is not element-shaped, usually from JSON input.
	///
	/// The renderer cannot emit anything for this shape and fails.
	Object(Map<String, Value>),
}

impl Node {
	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a numeric node.
	pub fn number(value: impl Into<f64>) -> Self {
		Self::Number(value.into())
	}

	/// Creates an empty node.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Creates a list node.
	pub fn list(children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		Self::List(children.into_iter().map(IntoNode::into_node).collect())
	}

	/// Returns a short name for the node's shape, used in logs and errors.
	pub fn kind(&self) -> &'static str {
		match self {
			Node::Text(_) => "text",
			Node::Number(_) => "number",
			Node::Empty => "empty",
			Node::List(_) => "list",
			Node::Element(_) => "element",
			Node::Function(_) => "function",
			Node::Object(_) => "object",
		}
	}
}

/// Trait for types that can be converted into a [`Node`].
pub trait IntoNode {
	/// Converts self into a Node.
	fn into_node(self) -> Node;
}

impl IntoNode for Node {
	fn into_node(self) -> Node {
		self
	}
}

impl IntoNode for Element {
	fn into_node(self) -> Node {
		Node::Element(self)
	}
}

// A bare component is not a valid child; it only makes sense as a tag.
impl IntoNode for Component {
	fn into_node(self) -> Node {
		Node::Function(self)
	}
}

impl IntoNode for &'static str {
	fn into_node(self) -> Node {
		Node::Text(Cow::Borrowed(self))
	}
}

impl IntoNode for String {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self))
	}
}

impl IntoNode for &String {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self.clone()))
	}
}

impl IntoNode for Cow<'static, str> {
	fn into_node(self) -> Node {
		Node::Text(self)
	}
}

impl IntoNode for bool {
	fn into_node(self) -> Node {
		Node::Empty
	}
}

impl IntoNode for () {
	fn into_node(self) -> Node {
		Node::Empty
	}
}

macro_rules! impl_into_node_for_number {
	($($ty:ty),* $(,)?) => {
		$(
			impl IntoNode for $ty {
				fn into_node(self) -> Node {
					Node::Number(self as f64)
				}
			}
		)*
	};
}

impl_into_node_for_number!(
	i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64,
);

impl<T: IntoNode> IntoNode for Option<T> {
	fn into_node(self) -> Node {
		match self {
			Some(v) => v.into_node(),
			None => Node::Empty,
		}
	}
}

impl<T: IntoNode> IntoNode for Vec<T> {
	fn into_node(self) -> Node {
		Node::List(self.into_iter().map(IntoNode::into_node).collect())
	}
}

impl<T: IntoNode, const N: usize> IntoNode for [T; N] {
	fn into_node(self) -> Node {
		Node::List(self.into_iter().map(IntoNode::into_node).collect())
	}
}

impl<A: IntoNode, B: IntoNode> IntoNode for (A, B) {
	fn into_node(self) -> Node {
		Node::List(vec![self.0.into_node(), self.1.into_node()])
	}
}

impl<A: IntoNode, B: IntoNode, C: IntoNode> IntoNode for (A, B, C) {
	fn into_node(self) -> Node {
		Node::List(vec![
			self.0.into_node(),
			self.1.into_node(),
			self.2.into_node(),
		])
	}
}

impl<A: IntoNode, B: IntoNode, C: IntoNode, D: IntoNode> IntoNode for (A, B, C, D) {
	fn into_node(self) -> Node {
		Node::List(vec![
			self.0.into_node(),
			self.1.into_node(),
			self.2.into_node(),
			self.3.into_node(),
		])
	}
}
