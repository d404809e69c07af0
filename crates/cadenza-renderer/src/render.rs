//! The lazy renderer.
//!
//! [`Render`] walks a tree with an explicit stack of pending work instead of
//! recursion. Each call to `next` runs until exactly one fragment is ready,
//! so a consumer controls the pace and nested trees of any depth never grow
//! the call stack.
//!
//! Fragment boundaries for an element are fixed: the opening `<tag`, one
//! fragment per attribute, the closing `>` of the start tag, the children's
//! fragments, then `</tag>`.

use crate::options::RenderOptions;
use cadenza_core::escape::{escape_attr, escape_text_cow};
use cadenza_core::{Attributes, IntoNode, Node, Props, RenderError, Tag, format_number};
use std::borrow::Cow;
use std::io;
use std::iter::FusedIterator;

/// Error type for [`render_to_writer`].
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
	#[error(transparent)]
	Render(#[from] RenderError),

	#[error("failed to write fragment: {0}")]
	Io(#[from] io::Error),
}

enum Work {
	Node(Node),
	Siblings(std::vec::IntoIter<Node>),
	Attributes(<Attributes as IntoIterator>::IntoIter),
	Fragment(Cow<'static, str>),
}

/// Lazy iterator over the HTML fragments of a tree.
///
/// Yields `Ok(fragment)` until the tree is exhausted. If a node of an
/// unrecognized shape is reached it yields a single `Err` and then ends.
pub struct Render {
	stack: Vec<Work>,
	options: RenderOptions,
	emitted: usize,
}

impl Render {
	fn new(node: Node, options: RenderOptions) -> Self {
		tracing::debug!(root = node.kind(), "starting render");
		Self {
			stack: vec![Work::Node(node)],
			options,
			emitted: 0,
		}
	}

	/// Returns the number of fragments yielded so far.
	pub fn emitted(&self) -> usize {
		self.emitted
	}

	/// Returns `true` once no more fragments will be produced.
	pub fn is_finished(&self) -> bool {
		self.stack.is_empty()
	}

	// Returns `None` when the node produced no fragment of its own; its
	// pending work, if any, has been pushed onto the stack.
	fn dispatch(&mut self, node: Node) -> Option<Result<Cow<'static, str>, RenderError>> {
		match node {
			Node::Number(value) => Some(Ok(Cow::Owned(format_number(value)))),
			Node::Text(text) => Some(Ok(escape_text_cow(text))),
			Node::Empty => None,
			Node::List(children) => {
				self.stack.push(Work::Siblings(children.into_iter()));
				None
			}
			Node::Element(element) => {
				let (tag, attributes, children) = element.into_parts();
				match tag {
					Tag::Name(name) => {
						self.stack.push(Work::Fragment(Cow::Owned(format!("</{name}>"))));
						self.stack.push(Work::Node(children));
						self.stack.push(Work::Fragment(Cow::Borrowed(">")));
						self.stack.push(Work::Attributes(attributes.into_iter()));
						Some(Ok(Cow::Owned(format!("<{name}"))))
					}
					Tag::Component(component) => {
						let rendered = component.call(Props::new(attributes, children));
						self.stack.push(Work::Node(rendered));
						None
					}
				}
			}
			other @ (Node::Function(_) | Node::Object(_)) => {
				Some(Err(RenderError::UnknownNodeKind { kind: other.kind() }))
			}
		}
	}

	fn finish_item(
		&mut self,
		item: Result<Cow<'static, str>, RenderError>,
	) -> Result<Cow<'static, str>, RenderError> {
		match &item {
			Ok(fragment) => {
				self.emitted += 1;
				if self.options.trace_fragments {
					tracing::trace!(index = self.emitted, fragment = %fragment, "emitting fragment");
				}
			}
			Err(err) => {
				tracing::error!(error = %err, emitted = self.emitted, "render aborted");
				self.stack.clear();
			}
		}
		item
	}
}

impl Iterator for Render {
	type Item = Result<Cow<'static, str>, RenderError>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let step = match self.stack.pop()? {
				Work::Fragment(fragment) => Some(Ok(fragment)),
				Work::Node(node) => self.dispatch(node),
				Work::Siblings(mut siblings) => match siblings.next() {
					Some(node) => {
						self.stack.push(Work::Siblings(siblings));
						self.dispatch(node)
					}
					None => None,
				},
				Work::Attributes(mut attributes) => match attributes.next() {
					Some((name, value)) => {
						self.stack.push(Work::Attributes(attributes));
						Some(Ok(Cow::Owned(format!(" {name}=\"{}\"", escape_attr(&value)))))
					}
					None => None,
				},
			};

			if let Some(item) = step {
				return Some(self.finish_item(item));
			}
		}
	}
}

impl FusedIterator for Render {}

impl std::fmt::Debug for Render {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Render")
			.field("pending", &self.stack.len())
			.field("emitted", &self.emitted)
			.field("options", &self.options)
			.finish()
	}
}

/// Renderer carrying [`RenderOptions`].
///
/// Every call renders independently; a renderer holds no per-render state.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
	options: RenderOptions,
}

impl Renderer {
	/// Creates a renderer with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a renderer with custom options.
	pub fn with_options(options: RenderOptions) -> Self {
		Self { options }
	}

	/// Starts a lazy render of `node`.
	pub fn render(&self, node: impl IntoNode) -> Render {
		Render::new(node.into_node(), self.options.clone())
	}

	/// Renders `node` to a string, stopping at the first error.
	pub fn render_to_string(&self, node: impl IntoNode) -> Result<String, RenderError> {
		self.render(node).collect()
	}

	/// Writes every fragment of `node` to `writer`, returning the bytes written.
	///
	/// Fragments already written before an error stay written.
	pub fn render_to_writer<W: io::Write>(
		&self,
		node: impl IntoNode,
		mut writer: W,
	) -> Result<usize, WriteError> {
		let mut written = 0;
		for fragment in self.render(node) {
			let fragment = fragment?;
			writer.write_all(fragment.as_bytes())?;
			written += fragment.len();
		}
		Ok(written)
	}
}

/// Starts a lazy render of `node` with default options.
pub fn render(node: impl IntoNode) -> Render {
	Renderer::new().render(node)
}

/// Renders `node` to a string with default options.
pub fn render_to_string(node: impl IntoNode) -> Result<String, RenderError> {
	Renderer::new().render_to_string(node)
}

/// Writes every fragment of `node` to `writer` with default options.
pub fn render_to_writer<W: io::Write>(node: impl IntoNode, writer: W) -> Result<usize, WriteError> {
	Renderer::new().render_to_writer(node, writer)
}

#[cfg(test)]
mod tests {
	use super::*;
	use cadenza_core::{Component, Element, h};
	use rstest::rstest;

	fn fragments(node: impl IntoNode) -> Vec<String> {
		render(node)
			.map(|fragment| fragment.expect("render failed").into_owned())
			.collect()
	}

	#[rstest]
	fn test_element_fragment_boundaries() {
		assert_eq!(
			fragments(h("div", [("id", "hello")], "Hello world!")),
			vec!["<div", " id=\"hello\"", ">", "Hello world!", "</div>"]
		);
	}

	#[rstest]
	fn test_number_fragment() {
		assert_eq!(fragments(42), vec!["42"]);
	}

	#[rstest]
	fn test_empty_text_yields_one_empty_fragment() {
		assert_eq!(fragments(""), vec![""]);
	}

	#[rstest]
	#[case::null(Node::Empty)]
	#[case::boolean(true.into_node())]
	#[case::none(None::<&str>.into_node())]
	#[case::empty_list(Node::List(Vec::new()))]
	fn test_nothing_is_emitted(#[case] node: Node) {
		assert!(fragments(node).is_empty());
	}

	#[rstest]
	fn test_no_void_element_special_case() {
		assert_eq!(render_to_string(h("br", (), ())).unwrap(), "<br></br>");
	}

	#[rstest]
	fn test_component_is_invoked_with_children() {
		let wrapper = Component::new("Wrapper", |props: Props| {
			let class = props.get("class").unwrap_or_default().to_string();
			h("section", [("class", class)], props.into_children())
		});
		let html = render_to_string(h(wrapper, [("class", "box")], "inner")).unwrap();
		assert_eq!(html, "<section class=\"box\">inner</section>");
	}

	#[rstest]
	fn test_unknown_node_fails_then_ends() {
		let bare = Component::new("Bare", |_props: Props| Node::Empty);
		let mut iter = render(vec![Node::text("before"), bare.into_node(), Node::text("after")]);

		assert_eq!(iter.next().unwrap().unwrap(), "before");
		assert_eq!(
			iter.next().unwrap(),
			Err(RenderError::UnknownNodeKind { kind: "function" })
		);
		assert!(iter.next().is_none());
		assert!(iter.next().is_none());
		assert!(iter.is_finished());
		assert_eq!(iter.emitted(), 1);
	}

	#[rstest]
	fn test_render_to_string_propagates_error() {
		let result = render_to_string(Element::new("p").child(Node::Object(Default::default())));
		assert_eq!(result, Err(RenderError::UnknownNodeKind { kind: "object" }));
	}

	#[rstest]
	fn test_render_to_writer_counts_bytes() {
		let mut out = Vec::new();
		let written = render_to_writer(h("b", (), "x & y"), &mut out).unwrap();

		assert_eq!(String::from_utf8(out).unwrap(), "<b>x &amp; y</b>");
		assert_eq!(written, "<b>x &amp; y</b>".len());
	}

	#[rstest]
	fn test_deep_nesting_does_not_recurse() {
		let mut node = Node::text("leaf");
		for _ in 0..50_000 {
			node = Node::List(vec![node]);
		}
		assert_eq!(render_to_string(node).unwrap(), "leaf");
	}

	#[rstest]
	fn test_options_do_not_change_output() {
		let tree = || h("ul", (), vec![h("li", (), 1), h("li", (), 2)]);
		let traced = Renderer::with_options(RenderOptions::new().trace_fragments(true));

		assert_eq!(
			traced.render_to_string(tree()).unwrap(),
			render_to_string(tree()).unwrap()
		);
	}
}
