//! Page descriptors and paged results returned by list endpoints.

use serde::{Deserialize, Serialize};

/// Describes one fetched batch: where it starts, how big it may be and how
/// many records exist in total.
///
/// `offset <= total` is expected from the backend but not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page {
	pub total: u64,
	pub offset: u64,
	pub limit: u64,
}

impl Page {
	pub fn new(total: u64, offset: u64, limit: u64) -> Self {
		Self {
			total,
			offset,
			limit,
		}
	}

	/// Returns true if records exist past this page.
	///
	/// # Examples
	///
	/// ```
	/// use exh_pagination::Page;
	///
	/// assert!(Page::new(5, 2, 2).has_next());
	/// assert!(!Page::new(5, 4, 2).has_next());
	/// ```
	pub fn has_next(&self) -> bool {
		self.total > self.offset.saturating_add(self.limit)
	}

	/// Returns true if this page does not start at the first record.
	pub fn has_previous(&self) -> bool {
		self.offset > 0
	}

	/// Offset of the following page. Not clamped to `total`.
	pub fn next_offset(&self) -> u64 {
		self.offset.saturating_add(self.limit)
	}

	/// Offset of the preceding page, never below zero.
	///
	/// # Examples
	///
	/// ```
	/// use exh_pagination::Page;
	///
	/// assert_eq!(Page::new(100, 30, 10).previous_offset(), 20);
	/// assert_eq!(Page::new(100, 5, 10).previous_offset(), 0);
	/// ```
	pub fn previous_offset(&self) -> u64 {
		self.offset.saturating_sub(self.limit)
	}
}

/// A [`Page`] plus the records it describes, as returned by a list endpoint:
///
/// ```json
/// { "page": { "total": 3, "offset": 0, "limit": 50 }, "data": [ ... ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedResult<T> {
	pub page: Page,
	pub data: Vec<T>,
}

impl<T> PagedResult<T> {
	pub fn new(page: Page, data: Vec<T>) -> Self {
		Self { page, data }
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Transforms every record, keeping the page descriptor.
	///
	/// # Examples
	///
	/// ```
	/// use exh_pagination::{Page, PagedResult};
	///
	/// let result = PagedResult::new(Page::new(2, 0, 50), vec![1, 2]);
	/// let doubled = result.map(|n| n * 2);
	/// assert_eq!(doubled.data, vec![2, 4]);
	/// assert_eq!(doubled.page.total, 2);
	/// ```
	pub fn map<U, F>(self, f: F) -> PagedResult<U>
	where
		F: FnMut(T) -> U,
	{
		PagedResult {
			page: self.page,
			data: self.data.into_iter().map(f).collect(),
		}
	}
}

impl<T> IntoIterator for PagedResult<T> {
	type Item = T;
	type IntoIter = std::vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.data.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a PagedResult<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.data.iter()
	}
}
