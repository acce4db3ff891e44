//! Loading settings from the process environment.

use exh_conf::{ConfigError, Settings};
use rstest::rstest;
use serial_test::serial;
use std::env;

const KEYS: [&str; 3] = [
	"EXHTEST_HOST",
	"EXHTEST_MAX_PAGE_SIZE",
	"EXHTEST_LARGE_COLLECTION_THRESHOLD",
];

fn clear() {
	// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
	// Every test in this file runs under #[serial].
	unsafe {
		for key in KEYS {
			env::remove_var(key);
		}
	}
}

#[rstest]
#[serial(exh_env)]
fn test_env_defaults_when_nothing_is_set() {
	// Arrange
	clear();

	// Act
	let settings = Settings::from_env_with_prefix("EXHTEST_").unwrap();

	// Assert
	assert_eq!(settings, Settings::default());
}

#[rstest]
#[serial(exh_env)]
fn test_env_overrides() {
	// Arrange
	clear();
	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// Every test in this file runs under #[serial].
	unsafe {
		env::set_var("EXHTEST_HOST", "dev.example.io");
		env::set_var("EXHTEST_MAX_PAGE_SIZE", "20");
		env::set_var("EXHTEST_LARGE_COLLECTION_THRESHOLD", "500");
	}

	// Act
	let settings = Settings::from_env_with_prefix("EXHTEST_").unwrap();
	clear();

	// Assert
	assert_eq!(settings.api_host().as_deref(), Some("https://api.dev.example.io"));
	assert_eq!(settings.pagination.max_page_size, 20);
	assert_eq!(settings.pagination.large_collection_threshold, 500);
}

#[rstest]
#[serial(exh_env)]
fn test_env_zero_page_size_is_rejected() {
	// Arrange
	clear();
	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// Every test in this file runs under #[serial].
	unsafe {
		env::set_var("EXHTEST_MAX_PAGE_SIZE", "0");
	}

	// Act
	let result = Settings::from_env_with_prefix("EXHTEST_");
	clear();

	// Assert
	assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[rstest]
#[serial(exh_env)]
fn test_env_unparseable_threshold() {
	// Arrange
	clear();
	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// Every test in this file runs under #[serial].
	unsafe {
		env::set_var("EXHTEST_LARGE_COLLECTION_THRESHOLD", "-1");
	}

	// Act
	let result = Settings::from_env_with_prefix("EXHTEST_");
	clear();

	// Assert
	assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}
