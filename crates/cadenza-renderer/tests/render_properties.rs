//! Integration tests for rendering behavior observable through the public API.
//!
//! Covers escaping, empty values, list flattening, component transparency
//! and the fatal unknown-node failure.

use cadenza_core::{Component, IntoNode, Node, Props, RenderError, h};
use cadenza_renderer::{Renderer, RenderOptions, render, render_to_string};
use proptest::prelude::*;
use rstest::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[fixture]
fn app() -> Component {
	Component::new("App", |_props: Props| {
		h("div", [("id", "hello")], "Hello world!")
	})
}

#[rstest]
fn test_hello_world_element() {
	let html = render_to_string(h("div", [("id", "hello")], "Hello world!")).unwrap();
	assert_eq!(html, "<div id=\"hello\">Hello world!</div>");
}

#[rstest]
fn test_app_component_renders_like_its_output(app: Component) {
	let via_component = render_to_string(h(app, (), ())).unwrap();
	assert_eq!(via_component, "<div id=\"hello\">Hello world!</div>");
}

#[rstest]
#[case::plain("a & b", "a &amp; b")]
#[case::markup("<script>alert(1)</script>", "&lt;script&gt;alert(1)&lt;/script&gt;")]
#[case::no_double_escape("&lt;", "&amp;lt;")]
#[case::quotes_kept("\"q\"", "\"q\"")]
fn test_text_escaping(#[case] input: &'static str, #[case] expected: &str) {
	assert_eq!(render_to_string(input).unwrap(), expected);
}

#[rstest]
fn test_attribute_quote_escaping() {
	let html = render_to_string(h("input", [("value", "say \"hi\" & <bye>")], ())).unwrap();
	assert_eq!(
		html,
		"<input value=\"say &quot;hi&quot; &amp; &lt;bye&gt;\"></input>"
	);
}

#[rstest]
fn test_attribute_order_is_insertion_order() {
	let html = render_to_string(h("a", [("z", "1"), ("href", "/"), ("a", "2")], "x")).unwrap();
	assert_eq!(html, "<a z=\"1\" href=\"/\" a=\"2\">x</a>");
}

#[rstest]
#[case::null(Node::Empty)]
#[case::true_value(true.into_node())]
#[case::false_value(false.into_node())]
#[case::undefined(None::<String>.into_node())]
fn test_empty_values_yield_no_fragments(#[case] node: Node) {
	assert_eq!(render(node).count(), 0);
}

#[rstest]
fn test_number_renders_literally() {
	let fragments: Vec<String> = render(42)
		.map(|fragment| fragment.unwrap().into_owned())
		.collect();
	assert_eq!(fragments, vec!["42"]);
}

#[rstest]
fn test_nested_list_flattens() {
	let nested = render_to_string(vec![
		Node::text("A"),
		Node::list(["B", "C"]),
	])
	.unwrap();
	let flat = render_to_string(vec!["A", "B", "C"]).unwrap();
	assert_eq!(nested, flat);
	assert_eq!(flat, "ABC");
}

#[rstest]
fn test_component_reinvoked_on_each_render() {
	let calls = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&calls);
	let counted = Component::new("Counted", move |_props: Props| {
		counter.fetch_add(1, Ordering::SeqCst);
		Node::text("x")
	});

	let tree = || h(counted.clone(), (), ());
	render_to_string(tree()).unwrap();
	render_to_string(tree()).unwrap();
	assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[rstest]
fn test_component_is_lazy() {
	let calls = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&calls);
	let late = Component::new("Late", move |_props: Props| {
		counter.fetch_add(1, Ordering::SeqCst);
		Node::text("late")
	});

	let mut fragments = render(vec![h("p", (), "first"), h(late, (), ())]);
	assert_eq!(fragments.next().unwrap().unwrap(), "<p");
	assert_eq!(calls.load(Ordering::SeqCst), 0);

	let rest: Vec<_> = fragments.collect();
	assert_eq!(rest.len(), 4);
	assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
fn test_component_receives_merged_props() {
	let list = Component::new("List", |props: Props| {
		let title = props.get("title").unwrap_or("untitled").to_string();
		h(
			"section",
			(),
			vec![h("h2", (), title), h("ul", (), props.into_children())],
		)
	});

	let html = render_to_string(h(
		list,
		[("title", "Fruits")],
		vec![h("li", (), "apple"), h("li", (), "pear")],
	))
	.unwrap();
	assert_eq!(
		html,
		"<section><h2>Fruits</h2><ul><li>apple</li><li>pear</li></ul></section>"
	);
}

#[rstest]
fn test_function_as_node_is_fatal(app: Component) {
	let mut fragments = render(h("main", (), app));

	assert_eq!(fragments.next().unwrap().unwrap(), "<main");
	assert_eq!(fragments.next().unwrap().unwrap(), ">");
	assert_eq!(
		fragments.next().unwrap(),
		Err(RenderError::UnknownNodeKind { kind: "function" })
	);
	assert!(fragments.next().is_none());
}

#[rstest]
fn test_fatal_error_produces_no_string() {
	let result = Renderer::with_options(RenderOptions::new().trace_fragments(true))
		.render_to_string(vec![Node::text("partial"), Node::Object(Default::default())]);
	assert_eq!(result, Err(RenderError::UnknownNodeKind { kind: "object" }));
}

fn text_leaf() -> impl Strategy<Value = String> {
	"[a-z<>&\"]{0,6}"
}

proptest! {
	#[test]
	fn prop_list_rendering_is_concatenation(items in prop::collection::vec(text_leaf(), 0..8), split in 0usize..8) {
		let split = split.min(items.len());
		let (left, right) = items.split_at(split);

		let flat = render_to_string(items.clone()).unwrap();
		let grouped = render_to_string(vec![
			Node::list(left.to_vec()),
			Node::list(right.to_vec()),
		])
		.unwrap();
		let pieces: String = items
			.iter()
			.map(|item| render_to_string(item.clone()).unwrap())
			.collect();

		prop_assert_eq!(&flat, &grouped);
		prop_assert_eq!(&flat, &pieces);
	}

	#[test]
	fn prop_component_transparency(text in text_leaf(), id in text_leaf()) {
		let body_text = text.clone();
		let body_id = id.clone();
		let wrapper = Component::new("Wrapper", move |_props: Props| {
			h("span", [("id", body_id.clone())], body_text.clone())
		});

		let direct = render_to_string(h("span", [("id", id)], text)).unwrap();
		let via_component = render_to_string(h(wrapper, (), ())).unwrap();
		prop_assert_eq!(direct, via_component);
	}

	#[test]
	fn prop_string_equals_fragment_concatenation(items in prop::collection::vec(text_leaf(), 0..6)) {
		let tree = || h("div", [("data-x", "1")], items.clone());
		let concatenated: String = render(tree()).map(|f| f.unwrap().into_owned()).collect();
		prop_assert_eq!(render_to_string(tree()).unwrap(), concatenated);
	}
}
