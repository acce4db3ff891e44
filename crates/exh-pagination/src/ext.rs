//! Lookup helpers shared by every list endpoint.

use crate::error::PaginationResult;
use crate::find::{Find, FindOptions};
use crate::pager::PagedResultWithPager;
use crate::paginator::{PageStream, Paginator};
use async_trait::async_trait;
use exh_rql::RqlBuilder;
use std::sync::Arc;

/// Convenience methods available on every [`Find`] provider.
///
/// All of them use a default [`Paginator`]; build one explicitly to change
/// the page size or the diagnostics sink.
#[async_trait]
pub trait FindExt<T>: Find<T>
where
	T: Send + 'static,
{
	/// Fetches one page and wraps it with `next`/`previous` cursors.
	async fn find_paged(self: Arc<Self>, options: FindOptions) -> Result<PagedResultWithPager<T, Self>, Self::Error>
	where
		Self: Sized,
	{
		Paginator::new().find_paged(self, options).await
	}

	/// First record of one fetch made with `options` unchanged.
	async fn find_first(&self, options: FindOptions) -> Result<Option<T>, Self::Error> {
		let result = self.find(options).await?;
		Ok(result.data.into_iter().next())
	}

	/// First record whose `field` equals `value`, on top of the caller's
	/// filters.
	async fn find_by(&self, field: &str, value: &str, options: FindOptions) -> Result<Option<T>, Self::Error> {
		let rql = RqlBuilder::from_rql(&options.base_rql()).eq(field, value).build();
		self.find_first(options.replace_rql(rql)).await
	}

	async fn find_by_id(&self, id: &str, options: FindOptions) -> Result<Option<T>, Self::Error> {
		self.find_by("id", id, options).await
	}

	async fn find_by_name(&self, name: &str, options: FindOptions) -> Result<Option<T>, Self::Error> {
		self.find_by("name", name, options).await
	}

	/// See [`Paginator::find_all`].
	async fn find_all(&self, options: FindOptions) -> PaginationResult<Vec<T>, Self::Error> {
		Paginator::new().find_all(self, options).await
	}

	/// See [`Paginator::find_all_iter`].
	fn find_all_iter(&self, options: FindOptions) -> PageStream<'_, T, Self::Error> {
		Paginator::new().find_all_iter(self, options)
	}
}

impl<T, F> FindExt<T> for F
where
	F: Find<T> + ?Sized,
	T: Send + 'static,
{
}
