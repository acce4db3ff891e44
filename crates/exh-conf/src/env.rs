//! Environment variable access with prefix support.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::str::FromStr;

/// Reads settings from the process environment.
#[derive(Debug, Clone, Default)]
pub struct Env {
	/// Prefix put in front of every key (e.g. `EXH_`).
	pub prefix: Option<String>,
}

impl Env {
	/// Creates an `Env` without prefix.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the prefix for all lookups.
	///
	/// # Examples
	///
	/// ```
	/// use exh_conf::Env;
	///
	/// let env = Env::new().with_prefix("EXH_");
	/// assert_eq!(env.prefix.as_deref(), Some("EXH_"));
	/// ```
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	fn key_name(&self, key: &str) -> String {
		match &self.prefix {
			Some(prefix) => format!("{}{}", prefix, key),
			None => key.to_string(),
		}
	}

	/// Reads a string, `None` when unset.
	pub fn str_opt(&self, key: &str) -> ConfigResult<Option<String>> {
		let full_key = self.key_name(key);
		validate_env_var_name(&full_key)?;
		Ok(env::var(&full_key).ok())
	}

	/// Reads a string, failing when unset.
	pub fn str(&self, key: &str) -> ConfigResult<String> {
		self.str_opt(key)?
			.ok_or_else(|| ConfigError::MissingVariable(self.key_name(key)))
	}

	/// Reads and parses a value, `None` when unset.
	pub fn parse_opt<T>(&self, key: &str) -> ConfigResult<Option<T>>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		let Some(raw) = self.str_opt(key)? else {
			return Ok(None);
		};
		raw.trim()
			.parse::<T>()
			.map(Some)
			.map_err(|e| ConfigError::ParseError {
				key: self.key_name(key),
				error: e.to_string(),
			})
	}

	/// Reads and parses a value, falling back to `default` when unset.
	pub fn parse_with_default<T>(&self, key: &str, default: T) -> ConfigResult<T>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		Ok(self.parse_opt(key)?.unwrap_or(default))
	}
}

/// Checks that `name` is a portable variable name: ASCII letters, digits
/// and `_`, not starting with a digit.
pub fn validate_env_var_name(name: &str) -> ConfigResult<()> {
	let reason = match name.chars().next() {
		None => "name is empty",
		Some(first) if first.is_ascii_digit() => "name starts with a digit",
		Some(_) if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') => {
			"only ASCII letters, digits and '_' are allowed"
		}
		Some(_) => return Ok(()),
	};
	Err(ConfigError::InvalidVariableName {
		name: name.to_string(),
		reason,
	})
}
