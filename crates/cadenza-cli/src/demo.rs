//! The built-in demo application.

use cadenza_core::{Component, ComponentRegistry, Node, Props, h};

/// Name the demo component is registered under.
pub const APP: &str = "App";

/// `App`: renders `<div id="hello">Hello world!</div>`.
pub fn app() -> Component {
	Component::new(APP, |_props: Props| {
		h("div", [("id", "hello")], "Hello world!")
	})
}

/// Registry exposing the demo components to JSON trees.
pub fn registry() -> ComponentRegistry {
	ComponentRegistry::new().with(APP, app())
}

/// The tree rendered when no input file is given: `<App />`.
pub fn tree() -> Node {
	h(app(), (), ())
}
