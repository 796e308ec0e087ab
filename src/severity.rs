//! Message severity levels and their presentation classes

use serde::{Deserialize, Serialize};

use crate::error::UserMessageError;

/// Severity of a user message.
///
/// The numeric codes follow the host framework's message-level convention,
/// leaving room below `Info` for debug-only levels and between the variants
/// for host-defined ones. The set itself is closed: adding a variant refuses
/// to compile until every presentation table in this module gains a matching
/// arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Severity {
	/// Informational notice.
	Info = 20,
	/// Confirmation that an operation succeeded.
	Success = 25,
	/// Something needs the user's attention.
	Warning = 30,
	/// An operation failed.
	Error = 40,
}

impl Severity {
	/// Returns the lowercase name of the severity.
	///
	/// # Examples
	///
	/// ```
	/// use user_messages::Severity;
	///
	/// assert_eq!(Severity::Info.as_str(), "info");
	/// assert_eq!(Severity::Error.as_str(), "error");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			Severity::Info => "info",
			Severity::Success => "success",
			Severity::Warning => "warning",
			Severity::Error => "error",
		}
	}

	/// Returns the numeric level code written to the message store.
	///
	/// # Examples
	///
	/// ```
	/// use user_messages::Severity;
	///
	/// assert_eq!(Severity::Info.level(), 20);
	/// assert_eq!(Severity::Success.level(), 25);
	/// ```
	pub fn level(&self) -> i32 {
		match self {
			Severity::Info => 20,
			Severity::Success => 25,
			Severity::Warning => 30,
			Severity::Error => 40,
		}
	}

	/// Looks up the severity for a raw level code.
	///
	/// Returns `None` for any code outside the four known levels. Callers
	/// that want an error instead go through the `TryFrom<i32>` impl.
	///
	/// # Examples
	///
	/// ```
	/// use user_messages::Severity;
	///
	/// assert_eq!(Severity::from_level(25), Some(Severity::Success));
	/// assert_eq!(Severity::from_level(10), None);
	/// ```
	pub fn from_level(level: i32) -> Option<Self> {
		match level {
			20 => Some(Severity::Info),
			25 => Some(Severity::Success),
			30 => Some(Severity::Warning),
			40 => Some(Severity::Error),
			_ => None,
		}
	}

	/// Returns the CSS class to be used on the message element.
	pub fn css_class(&self) -> &'static str {
		match self {
			Severity::Info => "alert-info",
			Severity::Success => "alert-success",
			Severity::Warning => "alert-warning",
			Severity::Error => "alert-danger",
		}
	}

	/// Returns the CSS icon class representing the severity.
	///
	/// Warnings and errors intentionally share the same icon.
	pub fn icon_class(&self) -> &'static str {
		match self {
			Severity::Info => "fa fa-bullhorn",
			Severity::Success => "fa fa-check-circle",
			Severity::Warning => "fa fa-warning",
			Severity::Error => "fa fa-warning",
		}
	}
}

impl TryFrom<i32> for Severity {
	type Error = UserMessageError;

	fn try_from(level: i32) -> Result<Self, UserMessageError> {
		Severity::from_level(level).ok_or(UserMessageError::UnknownLevel { level })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_severity_level_codes() {
		assert_eq!(Severity::Info.level(), 20);
		assert_eq!(Severity::Success.level(), 25);
		assert_eq!(Severity::Warning.level(), 30);
		assert_eq!(Severity::Error.level(), 40);
	}

	#[test]
	fn test_severity_from_level() {
		assert_eq!(Severity::from_level(20), Some(Severity::Info));
		assert_eq!(Severity::from_level(25), Some(Severity::Success));
		assert_eq!(Severity::from_level(30), Some(Severity::Warning));
		assert_eq!(Severity::from_level(40), Some(Severity::Error));
		assert_eq!(Severity::from_level(0), None);
		assert_eq!(Severity::from_level(10), None);
		assert_eq!(Severity::from_level(35), None);
	}

	#[test]
	fn test_severity_level_round_trip() {
		for severity in [
			Severity::Info,
			Severity::Success,
			Severity::Warning,
			Severity::Error,
		] {
			assert_eq!(Severity::from_level(severity.level()), Some(severity));
		}
	}

	#[test]
	fn test_severity_names() {
		assert_eq!(Severity::Info.as_str(), "info");
		assert_eq!(Severity::Success.as_str(), "success");
		assert_eq!(Severity::Warning.as_str(), "warning");
		assert_eq!(Severity::Error.as_str(), "error");
	}

	#[test]
	fn test_css_classes() {
		assert_eq!(Severity::Info.css_class(), "alert-info");
		assert_eq!(Severity::Success.css_class(), "alert-success");
		assert_eq!(Severity::Warning.css_class(), "alert-warning");
		assert_eq!(Severity::Error.css_class(), "alert-danger");
	}

	#[test]
	fn test_icon_classes() {
		assert_eq!(Severity::Info.icon_class(), "fa fa-bullhorn");
		assert_eq!(Severity::Success.icon_class(), "fa fa-check-circle");
		assert_eq!(Severity::Warning.icon_class(), "fa fa-warning");
		assert_eq!(Severity::Error.icon_class(), "fa fa-warning");
	}

	#[test]
	fn test_try_from_rejects_unknown_levels() {
		assert_eq!(Severity::try_from(25).unwrap(), Severity::Success);
		let err = Severity::try_from(99).unwrap_err();
		assert!(matches!(err, UserMessageError::UnknownLevel { level: 99 }));
	}

	#[test]
	fn test_severity_serde_round_trip() {
		let json = serde_json::to_string(&Severity::Warning).unwrap();
		assert_eq!(json, "\"Warning\"");
		let back: Severity = serde_json::from_str(&json).unwrap();
		assert_eq!(back, Severity::Warning);
	}
}
