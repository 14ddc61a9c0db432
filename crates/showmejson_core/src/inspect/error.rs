use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, InspectError>;

/// Errors produced at the fallible edges around rendering: value conversion and options input.
///
/// Rendering itself never fails.
#[derive(Debug, Error)]
pub enum InspectError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON input could not be parsed.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// A `Serialize` implementation reported a custom failure.
	#[error("serialize: {message}")]
	Serialize {
		/// Message produced by the failing implementation.
		message: String,
	},
	/// Map key could not be turned into a property name.
	#[error("map key must be a string or scalar, got {kind}")]
	KeyMustBeString {
		/// Logical kind of the rejected key.
		kind: &'static str,
	},
}

impl serde::ser::Error for InspectError {
	fn custom<T: std::fmt::Display>(msg: T) -> Self {
		InspectError::Serialize { message: msg.to_string() }
	}
}
