//! # exh-conf
//!
//! Settings for the exh client.
//!
//! Settings come from a TOML document, from environment variables, or from
//! plain Rust values. Every key is optional and falls back to a default.
//!
//! ## Environment variables
//!
//! | Variable | Setting | Default |
//! |---|---|---|
//! | `EXH_HOST` | `host` | unset |
//! | `EXH_MAX_PAGE_SIZE` | `pagination.max_page_size` | `50` |
//! | `EXH_LARGE_COLLECTION_THRESHOLD` | `pagination.large_collection_threshold` | `2000` |
//!
//! ## Example
//!
//! ```
//! use exh_conf::Settings;
//!
//! let settings = Settings::from_toml_str(r#"
//!     host = "https://dev.example.io/"
//!
//!     [pagination]
//!     max_page_size = 25
//! "#).unwrap();
//!
//! assert_eq!(settings.api_host().as_deref(), Some("https://api.dev.example.io"));
//! assert_eq!(settings.pagination.max_page_size, 25);
//! assert_eq!(settings.pagination.large_collection_threshold, 2000);
//! ```

pub mod env;
pub mod error;
pub mod host;
pub mod settings;

pub use env::Env;
pub use error::{ConfigError, ConfigResult};
pub use host::normalize_host;
pub use settings::{
	DEFAULT_LARGE_COLLECTION_THRESHOLD, DEFAULT_MAX_PAGE_SIZE, PaginationSettings, Settings,
};
