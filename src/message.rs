//! The presentation object handed to the rendering layer

use crate::severity::Severity;

/// A message ready to be shown to the user.
///
/// Produced by [`user_messages`](crate::user_messages) from store entries
/// that carry this crate's tag. The body has already been through the
/// registrar's escaping, so templates can interpolate it without further
/// treatment.
///
/// # Examples
///
/// ```
/// use user_messages::{MemoryStore, Severity, register_error_message, user_messages};
///
/// let store = MemoryStore::new();
/// register_error_message(&store, "Payment failed.").unwrap();
///
/// let message = user_messages(&store).unwrap().next().unwrap().unwrap();
/// assert_eq!(message.severity(), Severity::Error);
/// assert_eq!(message.css_class(), "alert-danger");
/// assert_eq!(message.icon_class(), "fa fa-warning");
/// assert_eq!(message.html(), "Payment failed.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
	severity: Severity,
	html: String,
}

impl UserMessage {
	pub(crate) fn new(severity: Severity, html: String) -> Self {
		Self { severity, html }
	}

	/// Returns the severity of the message.
	pub fn severity(&self) -> Severity {
		self.severity
	}

	/// Returns the message body, safe to render as HTML.
	pub fn html(&self) -> &str {
		&self.html
	}

	/// Returns the CSS class to be used on the message element.
	pub fn css_class(&self) -> &'static str {
		self.severity.css_class()
	}

	/// Returns the CSS icon class representing the message severity.
	pub fn icon_class(&self) -> &'static str {
		self.severity.icon_class()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_accessors() {
		let message = UserMessage::new(Severity::Success, "Saved.".to_string());
		assert_eq!(message.severity(), Severity::Success);
		assert_eq!(message.html(), "Saved.");
	}

	#[test]
	fn test_presentation_classes_follow_severity() {
		let message = UserMessage::new(Severity::Warning, "Disk space low".to_string());
		assert_eq!(message.css_class(), Severity::Warning.css_class());
		assert_eq!(message.icon_class(), Severity::Warning.icon_class());
	}
}
