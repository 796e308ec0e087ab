//! The message store seam and the in-memory reference store
//!
//! The flash-message queue belongs to the host application. This crate only
//! asks for the two capabilities it needs, expressed by [`MessageStore`]:
//! appending one entry and draining them all. [`MemoryStore`] is the
//! in-process implementation used by tests and single-process hosts.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::error::UserMessageResult;

/// A single entry in the underlying message store.
///
/// The level is kept as a raw code rather than a [`Severity`](crate::Severity)
/// because the store is shared: other producers may queue entries with levels
/// this crate has no variant for. Interpretation happens at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMessage {
	/// Numeric level code, opaque to the store.
	pub level: i32,
	/// Message body, already safe to render as HTML.
	pub html: String,
	/// Tags attached by the producer, used to tell producers apart.
	pub extra_tags: Vec<String>,
}

impl StoredMessage {
	/// Creates an entry with no tags.
	///
	/// # Examples
	///
	/// ```
	/// use user_messages::StoredMessage;
	///
	/// let entry = StoredMessage::new(30, "Check your settings").with_tag("user-message");
	/// assert!(entry.has_tag("user-message"));
	/// assert!(!entry.has_tag("toolbar-notice"));
	/// ```
	pub fn new(level: i32, html: impl Into<String>) -> Self {
		Self {
			level,
			html: html.into(),
			extra_tags: Vec::new(),
		}
	}

	/// Adds a tag, builder style.
	pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
		self.extra_tags.push(tag.into());
		self
	}

	/// Adds a tag in place.
	pub fn add_tag(&mut self, tag: impl Into<String>) {
		self.extra_tags.push(tag.into());
	}

	/// Returns whether the entry carries the given tag.
	pub fn has_tag(&self, tag: &str) -> bool {
		self.extra_tags.iter().any(|t| t == tag)
	}
}

/// Capability this crate requires from the host's flash-message store.
///
/// Implementations map these calls onto whatever actually holds the queue
/// for the current request, typically a session record or a signed cookie.
/// Errors from that backend are wrapped with
/// [`UserMessageError::store`](crate::UserMessageError::store) and propagate
/// unmodified through the registrar and reader.
pub trait MessageStore {
	/// Appends one entry to the end of the queue.
	fn append(&self, message: StoredMessage) -> UserMessageResult<()>;

	/// Removes and returns every queued entry, oldest first.
	///
	/// Draining takes the whole queue, including entries appended by other
	/// producers sharing the store.
	fn drain(&self) -> UserMessageResult<Vec<StoredMessage>>;
}

/// In-memory message store backed by a shared queue.
///
/// Clones share the same queue, so one instance can be handed to request
/// handlers while the rendering layer drains through another.
///
/// # Examples
///
/// ```
/// use user_messages::{MemoryStore, MessageStore, StoredMessage};
///
/// let store = MemoryStore::new();
/// store.append(StoredMessage::new(20, "queued")).unwrap();
/// assert_eq!(store.len(), 1);
///
/// let drained = store.drain().unwrap();
/// assert_eq!(drained.len(), 1);
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct MemoryStore {
	messages: Arc<Mutex<VecDeque<StoredMessage>>>,
}

impl MemoryStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self {
			messages: Arc::new(Mutex::new(VecDeque::new())),
		}
	}

	/// Returns the number of queued entries.
	pub fn len(&self) -> usize {
		self.messages.lock().unwrap().len()
	}

	/// Returns whether the queue is empty.
	pub fn is_empty(&self) -> bool {
		self.messages.lock().unwrap().is_empty()
	}
}

impl Default for MemoryStore {
	fn default() -> Self {
		Self::new()
	}
}

impl MessageStore for MemoryStore {
	fn append(&self, message: StoredMessage) -> UserMessageResult<()> {
		self.messages.lock().unwrap().push_back(message);
		Ok(())
	}

	fn drain(&self) -> UserMessageResult<Vec<StoredMessage>> {
		Ok(self.messages.lock().unwrap().drain(..).collect())
	}
}
