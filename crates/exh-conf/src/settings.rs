//! Client and pagination settings.

use crate::env::Env;
use crate::error::{ConfigError, ConfigResult};
use crate::host::normalize_host;
use serde::{Deserialize, Serialize};

/// Page size forced on full-collection fetches that do not pin a limit.
pub const DEFAULT_MAX_PAGE_SIZE: u64 = 50;

/// Collection size above which an eager full fetch raises a diagnostic.
pub const DEFAULT_LARGE_COLLECTION_THRESHOLD: u64 = 2000;

const ENV_PREFIX: &str = "EXH_";

/// Knobs of the pagination engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationSettings {
	/// Page size requested by full-collection fetches.
	pub max_page_size: u64,
	/// Total above which an eager fetch warns about resource usage.
	pub large_collection_threshold: u64,
}

impl Default for PaginationSettings {
	fn default() -> Self {
		Self {
			max_page_size: DEFAULT_MAX_PAGE_SIZE,
			large_collection_threshold: DEFAULT_LARGE_COLLECTION_THRESHOLD,
		}
	}
}

impl PaginationSettings {
	/// Rejects a zero page size, which would never advance.
	pub fn validate(&self) -> ConfigResult<()> {
		if self.max_page_size == 0 {
			return Err(ConfigError::InvalidValue {
				field: "pagination.max_page_size",
				message: "must be greater than zero".to_string(),
			});
		}
		Ok(())
	}
}

/// Top-level client settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Host as configured by the caller; see [`Settings::api_host`].
	pub host: Option<String>,
	pub pagination: PaginationSettings,
}

impl Settings {
	/// Parses settings from a TOML document and validates them.
	///
	/// # Examples
	///
	/// ```
	/// use exh_conf::Settings;
	///
	/// let settings = Settings::from_toml_str("").unwrap();
	/// assert_eq!(settings, Settings::default());
	/// ```
	pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
		let settings: Settings = toml::from_str(source)?;
		settings.validate()?;
		tracing::debug!(
			host = ?settings.host,
			max_page_size = settings.pagination.max_page_size,
			"loaded settings from TOML"
		);
		Ok(settings)
	}

	/// Reads settings from `EXH_*` environment variables.
	pub fn from_env() -> ConfigResult<Self> {
		Self::from_env_with_prefix(ENV_PREFIX)
	}

	/// Reads settings from environment variables named `{prefix}HOST`,
	/// `{prefix}MAX_PAGE_SIZE` and `{prefix}LARGE_COLLECTION_THRESHOLD`.
	pub fn from_env_with_prefix(prefix: &str) -> ConfigResult<Self> {
		let env = Env::new().with_prefix(prefix);
		let settings = Self {
			host: env.str_opt("HOST")?,
			pagination: PaginationSettings {
				max_page_size: env.parse_with_default("MAX_PAGE_SIZE", DEFAULT_MAX_PAGE_SIZE)?,
				large_collection_threshold: env.parse_with_default(
					"LARGE_COLLECTION_THRESHOLD",
					DEFAULT_LARGE_COLLECTION_THRESHOLD,
				)?,
			},
		};
		settings.validate()?;
		tracing::debug!(prefix, host = ?settings.host, "loaded settings from environment");
		Ok(settings)
	}

	pub fn validate(&self) -> ConfigResult<()> {
		if self.host.as_deref().is_some_and(|host| host.trim().is_empty()) {
			return Err(ConfigError::InvalidValue {
				field: "host",
				message: "must not be empty".to_string(),
			});
		}
		self.pagination.validate()
	}

	/// The normalized API base URL, when a host is configured.
	pub fn api_host(&self) -> Option<String> {
		self.host.as_deref().map(normalize_host)
	}
}
