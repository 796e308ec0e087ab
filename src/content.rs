//! Message bodies: untrusted text, pre-rendered markup, and escaping
//!
//! Everything handed to the registrar passes through [`MessageContent`],
//! which records whether the body still needs HTML escaping. Escaping
//! happens exactly once, at registration time, so readers can hand the
//! stored body straight to a template.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A string wrapper marking content as already safe to render as HTML.
///
/// Wrapping skips the registrar's escaping, so the caller vouches that the
/// content contains no unescaped user input.
///
/// # Examples
///
/// ```
/// use user_messages::SafeData;
///
/// let safe = SafeData::new("<b>Bold text</b>");
/// assert_eq!(safe.as_str(), "<b>Bold text</b>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeData {
	content: String,
}

impl SafeData {
	/// Wraps content, asserting it is safe to render without escaping.
	pub fn new(content: impl Into<String>) -> Self {
		Self {
			content: content.into(),
		}
	}

	/// Returns the wrapped content as a string slice.
	pub fn as_str(&self) -> &str {
		&self.content
	}

	/// Consumes the wrapper and returns the content.
	pub fn into_string(self) -> String {
		self.content
	}
}

impl fmt::Display for SafeData {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.content)
	}
}

impl From<String> for SafeData {
	fn from(content: String) -> Self {
		Self::new(content)
	}
}

impl From<&str> for SafeData {
	fn from(content: &str) -> Self {
		Self::new(content)
	}
}

impl AsRef<str> for SafeData {
	fn as_ref(&self) -> &str {
		&self.content
	}
}

/// A message body as supplied to the registrar.
///
/// Plain strings convert into [`MessageContent::Raw`] and are entity-escaped
/// when the message is registered. [`SafeData`] converts into
/// [`MessageContent::Safe`] and is stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageContent {
	/// Untrusted text, escaped at registration time.
	Raw(String),
	/// Pre-rendered markup, stored as-is.
	Safe(SafeData),
}

impl MessageContent {
	/// Resolves the content to the HTML stored with the message.
	pub fn into_html(self) -> String {
		match self {
			MessageContent::Raw(text) => escape_html(&text),
			MessageContent::Safe(html) => html.into_string(),
		}
	}
}

impl From<&str> for MessageContent {
	fn from(text: &str) -> Self {
		MessageContent::Raw(text.to_string())
	}
}

impl From<String> for MessageContent {
	fn from(text: String) -> Self {
		MessageContent::Raw(text)
	}
}

impl From<SafeData> for MessageContent {
	fn from(data: SafeData) -> Self {
		MessageContent::Safe(data)
	}
}

/// Escapes HTML special characters to prevent markup injection.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entity references.
///
/// # Examples
///
/// ```
/// use user_messages::escape_html;
///
/// assert_eq!(escape_html("Rock & Roll"), "Rock &amp; Roll");
/// assert_eq!(
///     escape_html("<script>alert('XSS')</script>"),
///     "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;"
/// );
/// ```
pub fn escape_html(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_escape_html_entities() {
		assert_eq!(escape_html("<b>"), "&lt;b&gt;");
		assert_eq!(escape_html("a & b"), "a &amp; b");
		assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
		assert_eq!(escape_html("it's"), "it&#x27;s");
	}

	#[test]
	fn test_escape_html_leaves_plain_text_alone() {
		assert_eq!(escape_html("Hello, world!"), "Hello, world!");
		assert_eq!(escape_html(""), "");
	}

	#[test]
	fn test_escape_html_ampersand_first() {
		// Ampersands are replaced first so generated entities stay intact.
		assert_eq!(escape_html("&lt;"), "&amp;lt;");
		assert_eq!(escape_html("< &"), "&lt; &amp;");
	}

	#[test]
	fn test_raw_content_is_escaped() {
		let content = MessageContent::from("Rock & Roll");
		assert_eq!(content.into_html(), "Rock &amp; Roll");
	}

	#[test]
	fn test_safe_content_is_untouched() {
		let content = MessageContent::from(SafeData::new("<p>Hello, world!</p>"));
		assert_eq!(content.into_html(), "<p>Hello, world!</p>");
	}

	#[test]
	fn test_plain_strings_convert_to_raw() {
		assert!(matches!(
			MessageContent::from("text"),
			MessageContent::Raw(_)
		));
		assert!(matches!(
			MessageContent::from(String::from("text")),
			MessageContent::Raw(_)
		));
	}

	#[test]
	fn test_safedata_display() {
		let safe = SafeData::new("<i>italic</i>");
		assert_eq!(safe.to_string(), "<i>italic</i>");
		assert_eq!(safe.as_ref(), "<i>italic</i>");
	}

	#[test]
	fn test_safedata_serde_round_trip() {
		let safe = SafeData::new("<b>Bold</b>");
		let json = serde_json::to_string(&safe).unwrap();
		let back: SafeData = serde_json::from_str(&json).unwrap();
		assert_eq!(back, safe);
	}
}
