//! Insertion-ordered attribute maps.
//!
//! Attribute order is part of the rendered output, so the map keeps the order
//! in which keys were first inserted. Re-inserting a key replaces its value
//! without moving it.

use indexmap::IndexMap;
use std::borrow::Cow;

type AttrMap = IndexMap<Cow<'static, str>, Cow<'static, str>>;

/// HTML attributes of an element, keyed by unique attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(AttrMap);

impl Attributes {
	/// Creates an empty attribute map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets an attribute, returning the previous value if the key existed.
	///
	/// An existing key keeps its original position.
	pub fn insert(
		&mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Option<Cow<'static, str>> {
		self.0.insert(name.into(), value.into())
	}

	/// Builder form of [`insert`](Self::insert).
	pub fn with(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.insert(name, value);
		self
	}

	/// Returns the value of an attribute.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(|value| value.as_ref())
	}

	/// Returns `true` if the attribute is set.
	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	/// Removes an attribute, preserving the order of the remaining ones.
	pub fn remove(&mut self, name: &str) -> Option<Cow<'static, str>> {
		self.0.shift_remove(name)
	}

	/// Returns the number of attributes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if no attribute is set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over `(name, value)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0
			.iter()
			.map(|(name, value)| (name.as_ref(), value.as_ref()))
	}
}

impl IntoIterator for Attributes {
	type Item = (Cow<'static, str>, Cow<'static, str>);
	type IntoIter = indexmap::map::IntoIter<Cow<'static, str>, Cow<'static, str>>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<Cow<'static, str>>,
	V: Into<Cow<'static, str>>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attributes = Self::new();
		attributes.extend(iter);
		attributes
	}
}

impl<K, V> Extend<(K, V)> for Attributes
where
	K: Into<Cow<'static, str>>,
	V: Into<Cow<'static, str>>,
{
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (name, value) in iter {
			self.insert(name, value);
		}
	}
}

impl From<()> for Attributes {
	fn from(_: ()) -> Self {
		Self::new()
	}
}

impl<K, V> From<Vec<(K, V)>> for Attributes
where
	K: Into<Cow<'static, str>>,
	V: Into<Cow<'static, str>>,
{
	fn from(pairs: Vec<(K, V)>) -> Self {
		pairs.into_iter().collect()
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
	K: Into<Cow<'static, str>>,
	V: Into<Cow<'static, str>>,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_insertion_order_preserved() {
		let attributes = Attributes::from([("z", "1"), ("a", "2"), ("m", "3")]);
		let names: Vec<&str> = attributes.iter().map(|(name, _)| name).collect();
		assert_eq!(names, vec!["z", "a", "m"]);
	}

	#[rstest]
	fn test_reinsert_keeps_position() {
		let mut attributes = Attributes::from([("id", "a"), ("class", "b")]);
		let previous = attributes.insert("id", "c");

		assert_eq!(previous.as_deref(), Some("a"));
		assert_eq!(
			attributes.iter().collect::<Vec<_>>(),
			vec![("id", "c"), ("class", "b")]
		);
	}

	#[rstest]
	fn test_remove_preserves_remaining_order() {
		let mut attributes = Attributes::from([("a", "1"), ("b", "2"), ("c", "3")]);
		attributes.remove("a");

		assert_eq!(
			attributes.iter().collect::<Vec<_>>(),
			vec![("b", "2"), ("c", "3")]
		);
	}

	#[rstest]
	fn test_unit_converts_to_empty() {
		let attributes = Attributes::from(());
		assert!(attributes.is_empty());
		assert_eq!(attributes.len(), 0);
	}

	#[rstest]
	fn test_owned_and_borrowed_values() {
		let attributes = Attributes::new()
			.with("id", String::from("owned"))
			.with("title", "borrowed");

		assert_eq!(attributes.get("id"), Some("owned"));
		assert_eq!(attributes.get("title"), Some("borrowed"));
		assert!(!attributes.contains("missing"));
	}
}
