//! Registering and reading user messages
//!
//! The functional surface of the crate. Registration escapes the body (unless
//! it was wrapped in [`SafeData`](crate::SafeData)), stamps the entry with
//! [`USER_MESSAGE_TAG`] and appends it to the store. Reading drains the store
//! and yields only the entries carrying that tag, resolved into
//! [`UserMessage`] values.

use crate::content::MessageContent;
use crate::error::{UserMessageError, UserMessageResult};
use crate::message::UserMessage;
use crate::severity::Severity;
use crate::store::{MessageStore, StoredMessage};

/// Tag attached to every message registered through this crate.
///
/// The store is shared with other producers; this tag is what lets
/// [`user_messages`] pick its own entries back out of the drained queue.
pub const USER_MESSAGE_TAG: &str = "user-message";

/// Registers a message to be shown to the user on the next page.
///
/// Plain string `content` is HTML-escaped before it is stored; wrap it in
/// [`SafeData`](crate::SafeData) to store markup verbatim. `title` is
/// accepted for forward compatibility but not yet surfaced to presentation,
/// it only appears in the debug log.
///
/// # Errors
///
/// Returns [`UserMessageError::Store`] when the store rejects the append.
///
/// # Examples
///
/// ```
/// use user_messages::{MemoryStore, Severity, register_user_message};
///
/// let store = MemoryStore::new();
/// register_user_message(&store, Severity::Warning, "Your session is about to expire.", None)
///     .unwrap();
/// ```
pub fn register_user_message<S>(
	store: &S,
	severity: Severity,
	content: impl Into<MessageContent>,
	title: Option<&str>,
) -> UserMessageResult<()>
where
	S: MessageStore + ?Sized,
{
	let html = content.into().into_html();
	tracing::debug!(
		severity = severity.as_str(),
		title,
		"registering user message"
	);
	store.append(StoredMessage::new(severity.level(), html).with_tag(USER_MESSAGE_TAG))
}

/// Registers an information message to be shown to the user.
pub fn register_info_message<S>(
	store: &S,
	content: impl Into<MessageContent>,
) -> UserMessageResult<()>
where
	S: MessageStore + ?Sized,
{
	register_user_message(store, Severity::Info, content, None)
}

/// Registers a success message to be shown to the user.
pub fn register_success_message<S>(
	store: &S,
	content: impl Into<MessageContent>,
) -> UserMessageResult<()>
where
	S: MessageStore + ?Sized,
{
	register_user_message(store, Severity::Success, content, None)
}

/// Registers a warning message to be shown to the user.
pub fn register_warning_message<S>(
	store: &S,
	content: impl Into<MessageContent>,
) -> UserMessageResult<()>
where
	S: MessageStore + ?Sized,
{
	register_user_message(store, Severity::Warning, content, None)
}

/// Registers an error message to be shown to the user.
pub fn register_error_message<S>(
	store: &S,
	content: impl Into<MessageContent>,
) -> UserMessageResult<()>
where
	S: MessageStore + ?Sized,
{
	register_user_message(store, Severity::Error, content, None)
}

/// Returns the outstanding user messages, consuming them from the store.
///
/// Entries without [`USER_MESSAGE_TAG`] are filtered out of the result, but
/// the drain itself is destructive for the whole store: co-tenant entries are
/// consumed and discarded along with everything else. Hosts that interleave
/// other message producers on the same store lose those entries here; a
/// warning is logged when that happens.
///
/// Each tagged entry resolves independently. An entry whose level code has no
/// [`Severity`] mapping yields an [`UserMessageError::UnknownLevel`] item in
/// place of a message, without affecting its neighbours.
///
/// # Errors
///
/// Returns [`UserMessageError::Store`] when the store fails to drain.
///
/// # Examples
///
/// ```
/// use user_messages::{MemoryStore, register_success_message, user_messages};
///
/// let store = MemoryStore::new();
/// register_success_message(&store, "Saved.").unwrap();
///
/// let messages: Vec<_> = user_messages(&store)
///     .unwrap()
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(messages.len(), 1);
/// assert_eq!(messages[0].css_class(), "alert-success");
///
/// // The first read consumed the queue.
/// assert_eq!(user_messages(&store).unwrap().count(), 0);
/// ```
pub fn user_messages<S>(store: &S) -> UserMessageResult<UserMessages>
where
	S: MessageStore + ?Sized,
{
	let drained = store.drain()?;
	let untagged = drained
		.iter()
		.filter(|entry| !entry.has_tag(USER_MESSAGE_TAG))
		.count();
	if untagged > 0 {
		tracing::warn!(
			untagged,
			"drain consumed store entries without the user-message tag"
		);
	}
	Ok(UserMessages {
		entries: drained.into_iter(),
	})
}

/// Iterator over the user messages drained from a store.
///
/// Yields one [`UserMessageResult`] per tagged entry, in registration order.
/// Returned by [`user_messages`].
#[derive(Debug)]
pub struct UserMessages {
	entries: std::vec::IntoIter<StoredMessage>,
}

impl Iterator for UserMessages {
	type Item = UserMessageResult<UserMessage>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let entry = self.entries.next()?;
			if !entry.has_tag(USER_MESSAGE_TAG) {
				continue;
			}
			return Some(match Severity::from_level(entry.level) {
				Some(severity) => Ok(UserMessage::new(severity, entry.html)),
				None => Err(UserMessageError::UnknownLevel { level: entry.level }),
			});
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::MemoryStore;

	#[test]
	fn test_register_appends_a_tagged_entry() {
		let store = MemoryStore::new();
		register_user_message(&store, Severity::Info, "hello", None).unwrap();

		let drained = store.drain().unwrap();
		assert_eq!(drained.len(), 1);
		assert_eq!(drained[0].level, 20);
		assert_eq!(drained[0].html, "hello");
		assert!(drained[0].has_tag(USER_MESSAGE_TAG));
	}

	#[test]
	fn test_reader_skips_foreign_entries() {
		let store = MemoryStore::new();
		store.append(StoredMessage::new(20, "foreign")).unwrap();
		register_info_message(&store, "ours").unwrap();

		let messages: Vec<_> = user_messages(&store)
			.unwrap()
			.collect::<Result<_, _>>()
			.unwrap();
		assert_eq!(messages.len(), 1);
		assert_eq!(messages[0].html(), "ours");
	}

	#[test]
	fn test_works_through_a_trait_object() {
		let memory = MemoryStore::new();
		let store: &dyn MessageStore = &memory;
		register_info_message(store, "dyn dispatch").unwrap();

		assert_eq!(memory.len(), 1);
		assert_eq!(user_messages(store).unwrap().count(), 1);
	}
}
