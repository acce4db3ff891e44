//! Cursor navigation over an already fetched page.

use crate::find::{Find, FindOptions};
use crate::page::PagedResult;
use crate::paginator::Paginator;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A [`PagedResult`] that can fetch its neighbouring pages.
///
/// Every cursor reuses the options of the request that produced the first
/// result. `next`/`previous` replace whatever `limit(...)` term those options
/// carried with `limit(page.limit, offset)` for the target offset.
///
/// Navigating moves the cursor itself: the fetched page replaces the held
/// result, so calling [`next`](Self::next) repeatedly walks forward one page
/// at a time. Each call also returns a new cursor over the fetched page, which
/// can be navigated independently.
pub struct PagedResultWithPager<T, F>
where
	F: Find<T> + ?Sized,
{
	result: Arc<PagedResult<T>>,
	find: Arc<F>,
	options: FindOptions,
	paginator: Paginator,
}

impl<T, F> PagedResultWithPager<T, F>
where
	F: Find<T> + ?Sized,
{
	pub(crate) fn new(paginator: Paginator, find: Arc<F>, options: FindOptions, result: PagedResult<T>) -> Self {
		Self {
			result: Arc::new(result),
			find,
			options,
			paginator,
		}
	}

	pub fn result(&self) -> &PagedResult<T> {
		&self.result
	}

	/// Takes the held result out, cloning it when another cursor still
	/// shares it.
	pub fn into_result(self) -> PagedResult<T>
	where
		T: Clone,
	{
		Arc::unwrap_or_clone(self.result)
	}

	/// The options every navigation request is derived from.
	pub fn options(&self) -> &FindOptions {
		&self.options
	}

	/// Fetches the page after the held one and moves this cursor to it.
	///
	/// The offset is `offset + limit` even when that lands past `total`; the
	/// provider decides what an out-of-range page looks like. On error the
	/// held result is kept.
	pub async fn next(&mut self) -> Result<Self, F::Error> {
		self.move_to(self.result.page.next_offset()).await
	}

	/// Fetches the page before the held one and moves this cursor to it.
	/// From the first page this re-fetches offset 0.
	pub async fn previous(&mut self) -> Result<Self, F::Error> {
		self.move_to(self.result.page.previous_offset()).await
	}

	async fn move_to(&mut self, offset: u64) -> Result<Self, F::Error> {
		let rql = self
			.paginator
			.page_rql(&self.options.base_rql(), self.result.page.limit, offset);
		tracing::debug!(rql = %rql, "fetching neighbouring page");

		let result = Arc::new(self.find.find(self.options.replace_rql(rql)).await?);
		self.result = Arc::clone(&result);
		Ok(Self {
			result,
			find: Arc::clone(&self.find),
			options: self.options.clone(),
			paginator: self.paginator.clone(),
		})
	}
}

impl<T, F> Deref for PagedResultWithPager<T, F>
where
	F: Find<T> + ?Sized,
{
	type Target = PagedResult<T>;

	fn deref(&self) -> &Self::Target {
		self.result.as_ref()
	}
}

impl<T, F> fmt::Debug for PagedResultWithPager<T, F>
where
	T: fmt::Debug,
	F: Find<T> + ?Sized,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PagedResultWithPager")
			.field("result", &self.result)
			.field("options", &self.options)
			.finish_non_exhaustive()
	}
}
