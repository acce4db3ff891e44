//! Paged fetching over RQL list endpoints.
//!
//! A list endpoint is anything implementing [`Find`]: it takes
//! [`FindOptions`] carrying an RQL expression (plus any typed
//! [`Extensions`] the provider understands) and returns one
//! [`PagedResult`]. On top of that this crate offers three ways to walk a
//! collection:
//!
//! | Strategy | Entry point | Fetches |
//! |----------|-------------|---------|
//! | Cursor | [`Paginator::with_pagers`], [`FindExt::find_paged`] | one page per `next`/`previous` call |
//! | Eager | [`Paginator::find_all`], [`FindExt::find_all`] | every page, records concatenated |
//! | Lazy | [`Paginator::find_all_iter`], [`FindExt::find_all_iter`] | one page per item pulled from the stream |
//!
//! ## Example
//!
//! ```
//! use exh_pagination::{FindExt, FindOptions, Page, PagedResult};
//! use exh_rql::rql;
//! use std::convert::Infallible;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let users = |_options: FindOptions| async {
//! 	Ok::<_, Infallible>(PagedResult::new(Page::new(2, 0, 50), vec!["ada", "grace"]))
//! };
//!
//! let everyone = users
//! 	.find_all(FindOptions::from(rql().eq("status", "active").build()))
//! 	.await
//! 	.unwrap();
//! assert_eq!(everyone, vec!["ada", "grace"]);
//! # });
//! ```

pub mod error;
pub mod ext;
pub mod extensions;
pub mod find;
pub mod page;
pub mod pager;
pub mod paginator;

pub use error::{PaginationError, PaginationResult};
pub use ext::FindExt;
pub use extensions::Extensions;
pub use find::{Find, FindOptions};
pub use page::{Page, PagedResult};
pub use pager::PagedResultWithPager;
pub use paginator::{PageStream, Paginator, add_pagers, find_all, find_all_iter};
