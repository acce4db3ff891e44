//! Multi-page fetching strategies.

use crate::error::{PaginationError, PaginationResult};
use crate::find::{Find, FindOptions};
use crate::page::{Page, PagedResult};
use crate::pager::PagedResultWithPager;
use exh_conf::{DEFAULT_LARGE_COLLECTION_THRESHOLD, DEFAULT_MAX_PAGE_SIZE, PaginationSettings};
use exh_core::{Diagnostic, SharedSink, default_sink};
use exh_rql::{RqlBuilder, RqlString};
use futures::Stream;
use std::fmt;
use std::pin::Pin;
use std::sync::Arc;

/// Lazy sequence of pages produced by [`Paginator::find_all_iter`].
pub type PageStream<'a, T, E> = Pin<Box<dyn Stream<Item = Result<PagedResult<T>, E>> + Send + 'a>>;

/// Drives repeated calls to a [`Find`] provider.
///
/// Each request reuses the caller's expression as the filter/sort baseline
/// and appends exactly one `limit(...)` term. Requests are strictly
/// sequential: the next offset depends on the page just returned.
///
/// # Examples
///
/// ```
/// use exh_pagination::Paginator;
///
/// let paginator = Paginator::new().max_page_size(100);
/// assert_eq!(paginator.get_max_page_size(), 100);
/// assert_eq!(paginator.get_large_collection_threshold(), 2000);
/// ```
#[derive(Clone)]
pub struct Paginator {
	max_page_size: u64,
	large_collection_threshold: u64,
	sink: SharedSink,
}

impl Default for Paginator {
	fn default() -> Self {
		Self {
			max_page_size: DEFAULT_MAX_PAGE_SIZE,
			large_collection_threshold: DEFAULT_LARGE_COLLECTION_THRESHOLD,
			sink: default_sink(),
		}
	}
}

impl Paginator {
	/// Creates a paginator with a page size of 50, a large-collection
	/// threshold of 2000 and diagnostics sent to `tracing`.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a paginator from loaded settings.
	pub fn from_settings(settings: &PaginationSettings) -> Self {
		Self::new()
			.max_page_size(settings.max_page_size)
			.large_collection_threshold(settings.large_collection_threshold)
	}

	/// Page size requested when the caller does not pin a limit.
	pub fn max_page_size(mut self, size: u64) -> Self {
		self.max_page_size = size;
		self
	}

	/// Total above which [`Paginator::find_all`] emits a
	/// [`Diagnostic::LargeCollection`].
	pub fn large_collection_threshold(mut self, threshold: u64) -> Self {
		self.large_collection_threshold = threshold;
		self
	}

	/// Sink receiving diagnostics from this paginator and the builders it
	/// creates.
	pub fn diagnostics(mut self, sink: SharedSink) -> Self {
		self.sink = sink;
		self
	}

	pub fn get_max_page_size(&self) -> u64 {
		self.max_page_size
	}

	pub fn get_large_collection_threshold(&self) -> u64 {
		self.large_collection_threshold
	}

	/// Wraps an already fetched result with `next`/`previous` cursors.
	pub fn with_pagers<T, F>(
		&self,
		find: Arc<F>,
		options: FindOptions,
		result: PagedResult<T>,
	) -> PagedResultWithPager<T, F>
	where
		F: Find<T> + ?Sized,
	{
		PagedResultWithPager::new(self.clone(), find, options, result)
	}

	/// Fetches one page and wraps it with cursors.
	pub async fn find_paged<T, F>(
		&self,
		find: Arc<F>,
		options: FindOptions,
	) -> Result<PagedResultWithPager<T, F>, F::Error>
	where
		F: Find<T> + ?Sized,
	{
		let result = find.find(options.clone()).await?;
		Ok(self.with_pagers(find, options, result))
	}

	/// Fetches every page and concatenates the records in page order.
	///
	/// The caller's expression must not contain a `limit(...)` term; the
	/// page size is managed here and passing one fails with
	/// [`PaginationError::LimitNotAllowed`] before any request.
	///
	/// When the first page reports more than the large-collection threshold,
	/// a [`Diagnostic::LargeCollection`] is emitted and fetching continues.
	pub async fn find_all<T, F>(&self, find: &F, options: FindOptions) -> PaginationResult<Vec<T>, F::Error>
	where
		F: Find<T> + ?Sized,
	{
		let base = options.base_rql();
		if base.has_limit() {
			return Err(PaginationError::LimitNotAllowed);
		}

		let mut request = options.replace_rql(self.first_page_rql(&base));
		let mut items = Vec::new();

		loop {
			let result = find.find(request).await.map_err(PaginationError::Fetch)?;
			let page = result.page;

			if page.offset == 0 && page.total > self.large_collection_threshold {
				self.sink.emit(&Diagnostic::LargeCollection {
					total: page.total,
					threshold: self.large_collection_threshold,
				});
			}

			tracing::trace!(
				total = page.total,
				offset = page.offset,
				limit = page.limit,
				received = result.data.len(),
				"fetched page"
			);
			items.extend(result.data);

			if !can_advance(&page) {
				return Ok(items);
			}
			request = options.replace_rql(self.page_rql(&base, page.limit, page.next_offset()));
		}
	}

	/// Produces the pages of the collection one at a time.
	///
	/// Nothing is fetched until the stream is polled, and each page is
	/// fetched only when the previous one has been taken. A `limit(...)` term
	/// already in the caller's expression is honoured for the first request;
	/// otherwise the maximum page size is used. Dropping the stream early is
	/// always safe. Once exhausted, or after yielding an error, the stream
	/// only returns `None`.
	pub fn find_all_iter<'a, T, F>(&self, find: &'a F, options: FindOptions) -> PageStream<'a, T, F::Error>
	where
		F: Find<T> + ?Sized,
		T: Send + 'a,
	{
		let base = options.base_rql();
		let first = if base.has_limit() {
			base.clone()
		} else {
			self.first_page_rql(&base)
		};
		let paginator = self.clone();

		Box::pin(async_stream::stream! {
			let mut request = options.replace_rql(first);
			loop {
				let result = match find.find(request).await {
					Ok(result) => result,
					Err(error) => {
						yield Err(error);
						break;
					}
				};
				let page = result.page;
				yield Ok(result);

				if !can_advance(&page) {
					break;
				}
				request = options.replace_rql(paginator.page_rql(&base, page.limit, page.next_offset()));
			}
		})
	}

	fn builder(&self, base: &RqlString) -> RqlBuilder {
		RqlBuilder::from_rql(base).diagnostics(self.sink.clone())
	}

	fn first_page_rql(&self, base: &RqlString) -> RqlString {
		self.builder(base).limit(self.max_page_size).build()
	}

	pub(crate) fn page_rql(&self, base: &RqlString, limit: u64, offset: u64) -> RqlString {
		self.builder(&base.without_limit())
			.limit_with_offset(limit, offset)
			.build()
	}
}

/// A zero limit could never make progress, so it ends the walk.
fn can_advance(page: &Page) -> bool {
	page.limit > 0 && page.has_next()
}

impl fmt::Debug for Paginator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Paginator")
			.field("max_page_size", &self.max_page_size)
			.field("large_collection_threshold", &self.large_collection_threshold)
			.finish_non_exhaustive()
	}
}

/// [`Paginator::with_pagers`] with default settings.
pub fn add_pagers<T, F>(find: Arc<F>, options: FindOptions, result: PagedResult<T>) -> PagedResultWithPager<T, F>
where
	F: Find<T> + ?Sized,
{
	Paginator::new().with_pagers(find, options, result)
}

/// [`Paginator::find_all`] with default settings.
pub async fn find_all<T, F>(find: &F, options: FindOptions) -> PaginationResult<Vec<T>, F::Error>
where
	F: Find<T> + ?Sized,
{
	Paginator::new().find_all(find, options).await
}

/// [`Paginator::find_all_iter`] with default settings.
pub fn find_all_iter<'a, T, F>(find: &'a F, options: FindOptions) -> PageStream<'a, T, F::Error>
where
	F: Find<T> + ?Sized,
	T: Send + 'a,
{
	Paginator::new().find_all_iter(find, options)
}
