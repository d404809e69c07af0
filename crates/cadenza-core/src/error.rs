//! Render errors.

/// Error raised while rendering a tree.
///
/// Rendering has exactly one failure: a node whose shape the renderer cannot
/// emit. It is fatal and aborts the traversal; no partial output follows it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
	/// A node of an unrecognized shape was reached.
	#[error("unknown node kind: {kind}")]
	UnknownNodeKind {
		/// Shape of the offending node, as reported by [`Node::kind`](crate::Node::kind).
		kind: &'static str,
	},
}
