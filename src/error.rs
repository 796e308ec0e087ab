//! Error types for message registration and retrieval

use thiserror::Error;

/// Errors raised while registering or reading user messages.
#[derive(Debug, Error)]
pub enum UserMessageError {
	/// A store entry carried a level code that no [`Severity`](crate::Severity)
	/// variant is mapped to.
	///
	/// Surfaced per item when reading, so one corrupt entry never hides the
	/// rest of the queue.
	#[error("no severity is mapped to message level {level}")]
	UnknownLevel {
		/// The raw level code found on the store entry.
		level: i32,
	},

	/// The underlying message store failed to append or drain.
	#[error("message store error")]
	Store {
		/// Failure reported by the host store backend.
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},
}

impl UserMessageError {
	/// Wraps a host store failure, preserving it as the error source.
	///
	/// # Examples
	///
	/// ```
	/// use std::io;
	///
	/// use user_messages::UserMessageError;
	///
	/// let err = UserMessageError::store(io::Error::other("session backend offline"));
	/// assert!(matches!(err, UserMessageError::Store { .. }));
	/// ```
	pub fn store(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
		UserMessageError::Store {
			source: source.into(),
		}
	}
}

/// Convenience alias used by every fallible operation in this crate.
pub type UserMessageResult<T> = Result<T, UserMessageError>;

#[cfg(test)]
mod tests {
	use std::error::Error;
	use std::io;

	use super::*;

	#[test]
	fn test_unknown_level_display_names_the_code() {
		let err = UserMessageError::UnknownLevel { level: 11 };
		assert_eq!(err.to_string(), "no severity is mapped to message level 11");
	}

	#[test]
	fn test_store_error_preserves_source() {
		let err = UserMessageError::store(io::Error::other("session backend offline"));
		let source = err.source().expect("source should be attached");
		assert_eq!(source.to_string(), "session backend offline");
	}
}
