//! Client settings loaded from TOML or the environment.
//!
//! # Examples
//!
//! ```
//! use exh::conf::Settings;
//!
//! let settings = Settings::from_toml_str("host = \"example.io/\"").unwrap();
//! assert_eq!(settings.api_host().as_deref(), Some("https://api.example.io"));
//! ```

pub use exh_conf::*;
