//! HTML escaping for text content and attribute values.
//!
//! Both functions scan the input once, so entities produced for one
//! character are never escaped again. `&lt;` therefore becomes `&amp;lt;`,
//! not `&amp;amp;lt;`.
//!
//! | Character | Text | Attribute |
//! |-----------|------|-----------|
//! | `&` | `&amp;` | `&amp;` |
//! | `<` | `&lt;` | `&lt;` |
//! | `>` | `&gt;` | `&gt;` |
//! | `"` | unchanged | `&quot;` |

use std::borrow::Cow;

const TEXT_SPECIALS: [char; 3] = ['&', '<', '>'];
const ATTR_SPECIALS: [char; 4] = ['&', '<', '>', '"'];

/// Escapes `&`, `<` and `>` in text content.
///
/// Returns a borrowed reference if no escaping is needed.
///
/// # Examples
///
/// ```
/// use cadenza_core::escape_text;
///
/// assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
/// assert_eq!(escape_text("say \"hi\""), "say \"hi\"");
/// ```
pub fn escape_text(s: &str) -> Cow<'_, str> {
	escape_with(s, &TEXT_SPECIALS)
}

/// Escapes `&`, `<`, `>` and `"` in attribute values.
///
/// Returns a borrowed reference if no escaping is needed.
///
/// # Examples
///
/// ```
/// use cadenza_core::escape_attr;
///
/// assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
/// ```
pub fn escape_attr(s: &str) -> Cow<'_, str> {
	escape_with(s, &ATTR_SPECIALS)
}

/// Escapes owned or static text without copying when nothing changes.
pub fn escape_text_cow(s: Cow<'static, str>) -> Cow<'static, str> {
	if s.contains(TEXT_SPECIALS) {
		Cow::Owned(escape_text(&s).into_owned())
	} else {
		s
	}
}

fn escape_with<'a>(s: &'a str, specials: &[char]) -> Cow<'a, str> {
	if !s.contains(specials) {
		return Cow::Borrowed(s);
	}

	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' if specials.contains(&'"') => escaped.push_str("&quot;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}
