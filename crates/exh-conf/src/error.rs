//! Configuration errors.

use thiserror::Error;

/// Errors raised while loading or validating settings.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// A required environment variable is not set.
	#[error("{0} is not set")]
	MissingVariable(String),

	/// An environment variable is set but cannot be parsed.
	///
	/// The raw value is left out of the message.
	#[error("{key} could not be parsed: {error}")]
	ParseError { key: String, error: String },

	/// The environment variable name itself is unusable.
	#[error("{name:?} cannot be used as a variable name: {reason}")]
	InvalidVariableName { name: String, reason: &'static str },

	/// The TOML document is malformed or has wrongly typed keys.
	#[error("settings file is not valid TOML: {0}")]
	Toml(#[from] toml::de::Error),

	/// A setting has a value the client cannot work with.
	#[error("{field} {message}")]
	InvalidValue {
		field: &'static str,
		message: String,
	},
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
