//! Error types for the pagination engine.

use thiserror::Error;

/// Errors raised by an eager full-collection fetch.
///
/// `E` is the provider's own error, carried unchanged.
#[derive(Debug, Error)]
pub enum PaginationError<E>
where
	E: std::error::Error + 'static,
{
	/// The caller passed a `limit(...)` term. Full-collection fetches manage
	/// the page size themselves. Raised before any request is made.
	#[error("Do not pass in limit operator with find_all: the page size is managed internally")]
	LimitNotAllowed,

	/// The provider failed.
	#[error(transparent)]
	Fetch(E),
}

impl<E> PaginationError<E>
where
	E: std::error::Error + 'static,
{
	/// Returns true for caller misuse, as opposed to provider failures.
	pub fn is_usage_error(&self) -> bool {
		matches!(self, PaginationError::LimitNotAllowed)
	}

	/// The provider's error, if that is what this is.
	pub fn into_fetch_error(self) -> Option<E> {
		match self {
			PaginationError::Fetch(error) => Some(error),
			PaginationError::LimitNotAllowed => None,
		}
	}
}

/// Result type alias for eager full-collection fetches.
pub type PaginationResult<T, E> = Result<T, PaginationError<E>>;
