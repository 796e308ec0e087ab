//! Assertion helpers for suites that exercise user messages
//!
//! The helpers return a `Result` instead of panicking, so suites can compose
//! them with `?` and attach their own context on failure.

use thiserror::Error;

use crate::message::UserMessage;
use crate::severity::Severity;

/// Error raised when a message assertion fails.
#[derive(Debug, Error)]
pub enum MessageAssertionError {
	/// The number of produced messages did not match.
	#[error("message count mismatch: expected {expected}, got {actual}")]
	CountMismatch {
		/// Expected number of messages.
		expected: usize,
		/// Number of messages actually produced.
		actual: usize,
	},

	/// No produced message had the expected severity and body.
	#[error("no message with severity {severity:?} and body {html:?}")]
	MessageNotFound {
		/// Severity that was looked for.
		severity: Severity,
		/// Body that was looked for.
		html: String,
	},

	/// A message carried a different severity than expected.
	#[error("severity mismatch: expected {expected:?}, got {actual:?}")]
	SeverityMismatch {
		/// Expected severity.
		expected: Severity,
		/// Severity actually carried by the message.
		actual: Severity,
	},
}

/// Result type for message assertions.
pub type MessageAssertionResult<T> = Result<T, MessageAssertionError>;

/// Asserts that exactly `expected` messages were produced.
///
/// # Examples
///
/// ```
/// use user_messages::testing::assert_message_count;
/// use user_messages::{MemoryStore, register_info_message, user_messages};
///
/// let store = MemoryStore::new();
/// register_info_message(&store, "Saved.").unwrap();
///
/// let messages: Vec<_> = user_messages(&store)
///     .unwrap()
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_message_count(&messages, 1).unwrap();
/// ```
pub fn assert_message_count(
	messages: &[UserMessage],
	expected: usize,
) -> MessageAssertionResult<()> {
	if messages.len() == expected {
		Ok(())
	} else {
		Err(MessageAssertionError::CountMismatch {
			expected,
			actual: messages.len(),
		})
	}
}

/// Asserts that a message with the given severity and body was produced.
pub fn assert_message_exists(
	messages: &[UserMessage],
	severity: Severity,
	html: &str,
) -> MessageAssertionResult<()> {
	let found = messages
		.iter()
		.any(|message| message.severity() == severity && message.html() == html);
	if found {
		Ok(())
	} else {
		Err(MessageAssertionError::MessageNotFound {
			severity,
			html: html.to_string(),
		})
	}
}

/// Asserts that a single message carries the expected severity.
pub fn assert_message_severity(
	message: &UserMessage,
	expected: Severity,
) -> MessageAssertionResult<()> {
	if message.severity() == expected {
		Ok(())
	} else {
		Err(MessageAssertionError::SeverityMismatch {
			expected,
			actual: message.severity(),
		})
	}
}
