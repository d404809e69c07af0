//! Variadic element construction.

/// Builds an element node with any number of children.
///
/// Mirrors a JSX factory call `h(tag, props, ...children)`. Attributes are
/// written as `{ name => value, ... }` and may be omitted.
///
/// # Example
///
/// ```
/// use cadenza_core::h;
///
/// let list = h!("ul", { "class" => "items" },
///     h!("li", "one"),
///     h!("li", "two"),
/// );
/// let empty = h!("br");
/// # let _ = (list, empty);
/// ```
#[macro_export]
macro_rules! h {
	($tag:expr $(,)?) => {
		$crate::h($tag, (), $crate::Node::List(::std::vec::Vec::new()))
	};
	($tag:expr, { $($name:expr => $value:expr),* $(,)? } $(, $child:expr)* $(,)?) => {
		$crate::h(
			$tag,
			{
				#[allow(unused_mut)]
				let mut attributes = $crate::Attributes::new();
				$(attributes.insert($name, $value);)*
				attributes
			},
			$crate::Node::List(::std::vec![$($crate::IntoNode::into_node($child)),*]),
		)
	};
	($tag:expr $(, $child:expr)+ $(,)?) => {
		$crate::h(
			$tag,
			(),
			$crate::Node::List(::std::vec![$($crate::IntoNode::into_node($child)),+]),
		)
	};
}
