//! The paged-data provider contract.

use crate::extensions::Extensions;
use crate::page::PagedResult;
use async_trait::async_trait;
use exh_rql::RqlString;
use std::future::Future;

/// Options handed to a [`Find`] provider.
///
/// The pagination engine only ever rewrites `rql`. Everything in
/// `extensions` reaches the provider unchanged on every request it makes.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
	/// Filter, sort, selection and pagination expression.
	pub rql: Option<RqlString>,
	/// Provider-specific values such as headers or a tenant.
	pub extensions: Extensions,
}

impl FindOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the expression.
	///
	/// # Examples
	///
	/// ```
	/// use exh_pagination::FindOptions;
	/// use exh_rql::rql;
	///
	/// let options = FindOptions::new().with_rql(rql().eq("status", "active").build());
	/// assert_eq!(options.base_rql().as_str(), "?eq(status,active)");
	/// ```
	pub fn with_rql(mut self, rql: RqlString) -> Self {
		self.rql = Some(rql);
		self
	}

	/// Attaches a provider-specific value, replacing one of the same type.
	///
	/// # Examples
	///
	/// ```
	/// use exh_pagination::FindOptions;
	/// use std::time::Duration;
	///
	/// let options = FindOptions::new().with_extension(Duration::from_secs(5));
	/// assert_eq!(options.extensions.get::<Duration>(), Some(&Duration::from_secs(5)));
	/// ```
	pub fn with_extension<T: Send + Sync + 'static>(mut self, value: T) -> Self {
		self.extensions.insert(value);
		self
	}

	/// The caller's expression, or an empty one.
	pub fn base_rql(&self) -> RqlString {
		self.rql.clone().unwrap_or_default()
	}

	/// Copy of these options carrying a different expression.
	pub(crate) fn replace_rql(&self, rql: RqlString) -> Self {
		self.clone().with_rql(rql)
	}
}

impl From<RqlString> for FindOptions {
	fn from(rql: RqlString) -> Self {
		Self::new().with_rql(rql)
	}
}

/// A list endpoint: takes options carrying an RQL expression and returns one
/// page of records.
///
/// Timeouts, retries and authentication are the provider's business. The
/// pagination engine hands its errors back unchanged.
///
/// Any `Fn(FindOptions) -> impl Future<Output = Result<PagedResult<T>, E>>`
/// closure is a provider.
#[async_trait]
pub trait Find<T>: Send + Sync {
	type Error: std::error::Error + Send + Sync + 'static;

	async fn find(&self, options: FindOptions) -> Result<PagedResult<T>, Self::Error>;
}

#[async_trait]
impl<T, F, Fut, E> Find<T> for F
where
	F: Fn(FindOptions) -> Fut + Send + Sync,
	Fut: Future<Output = Result<PagedResult<T>, E>> + Send + 'static,
	E: std::error::Error + Send + Sync + 'static,
	T: Send + 'static,
{
	type Error = E;

	async fn find(&self, options: FindOptions) -> Result<PagedResult<T>, E> {
		(self)(options).await
	}
}
