//! # User Messages
//!
//! One-time, user-facing notification messages layered over a host-owned
//! flash-message store.
//!
//! Request handlers register a message with a typed severity; the rendering
//! layer reads the outstanding messages back exactly once, each resolved to
//! the CSS and icon classes the page templates expect. The store itself stays
//! outside this crate behind the [`MessageStore`] trait, whether the host
//! keeps it in a session record or a signed cookie.
//!
//! ## Features
//!
//! - **Typed severities**: [`Severity`] is a closed enum, so the presentation
//!   tables are checked exhaustively at compile time
//! - **Escape-on-register**: plain strings are HTML-escaped before they are
//!   stored; [`SafeData`] opts markup out of escaping
//! - **Tagged co-tenancy**: every entry is stamped with [`USER_MESSAGE_TAG`]
//!   so the reader can tell this crate's messages apart from other producers
//!   sharing the store
//! - **Consuming reads**: [`user_messages`] drains the store, matching the
//!   show-once semantics of flash messages
//!
//! ## Example
//!
//! ```rust
//! use user_messages::{
//!     MemoryStore, SafeData, register_info_message, register_success_message, user_messages,
//! };
//!
//! let store = MemoryStore::new();
//! register_info_message(&store, "Your changes have been saved.").unwrap();
//! register_success_message(&store, SafeData::new("<b>Enrollment complete.</b>")).unwrap();
//!
//! for message in user_messages(&store).unwrap() {
//!     let message = message.unwrap();
//!     println!(
//!         "<div class=\"{}\"><span class=\"{}\"></span>{}</div>",
//!         message.css_class(),
//!         message.icon_class(),
//!         message.html(),
//!     );
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod content;
pub mod error;
pub mod message;
pub mod severity;
pub mod store;
pub mod testing;

pub use api::{
	USER_MESSAGE_TAG, UserMessages, register_error_message, register_info_message,
	register_success_message, register_user_message, register_warning_message, user_messages,
};
pub use content::{MessageContent, SafeData, escape_html};
pub use error::{UserMessageError, UserMessageResult};
pub use message::UserMessage;
pub use severity::Severity;
pub use store::{MemoryStore, MessageStore, StoredMessage};

/// Re-export commonly used types
pub mod prelude {
	pub use crate::api::*;
	pub use crate::content::*;
	pub use crate::error::*;
	pub use crate::message::*;
	pub use crate::severity::*;
	pub use crate::store::*;
}
