//! # exh
//!
//! Typed client core for REST list endpoints that speak RQL (Resource Query
//! Language).
//!
//! The crate is a facade over the workspace members:
//!
//! - [`rql`] - fluent builder for RQL query strings (`?eq(status,active)&limit(10)`)
//! - [`pagination`] - cursor, eager and lazy walks over any paged endpoint
//! - [`conf`] - API host and pagination settings from TOML or `EXH_*` variables
//! - [`core`] - diagnostics raised while building queries and fetching pages
//!
//! ## Quick Example
//!
//! ```
//! use exh::prelude::*;
//! use futures::StreamExt;
//! use std::convert::Infallible;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let settings = Settings::from_toml_str("[pagination]\nmax_page_size = 2").unwrap();
//! let paginator = Paginator::from_settings(&settings.pagination);
//!
//! let endpoint = |options: FindOptions| async move {
//! 	// A real provider sends `options.base_rql()` to the backend.
//! 	let offset = if options.base_rql().as_str().ends_with("limit(2)") { 0 } else { 2 };
//! 	let data = (offset..(offset + 2).min(3)).collect::<Vec<u32>>();
//! 	Ok::<_, Infallible>(PagedResult::new(Page::new(3, offset as u64, 2), data))
//! };
//!
//! let options = FindOptions::from(rql().sort("-created").build());
//! let all = paginator.find_all(&endpoint, options.clone()).await.unwrap();
//! assert_eq!(all, vec![0, 1, 2]);
//!
//! let pages: Vec<_> = paginator.find_all_iter(&endpoint, options).collect().await;
//! assert_eq!(pages.len(), 2);
//! # });
//! ```

pub mod conf;
pub mod core;
pub mod pagination;
pub mod rql;

pub use exh_conf::{ConfigError, ConfigResult, PaginationSettings, Settings};
pub use exh_core::{Diagnostic, DiagnosticSink, MemorySink, NullSink, SharedSink, TracingSink};
pub use exh_pagination::{
	Extensions, Find, FindExt, FindOptions, Page, PagedResult, PagedResultWithPager, PaginationError, PaginationResult,
	Paginator,
};
pub use exh_rql::{RqlBuilder, RqlString};

/// Re-exports for building queries and walking paged endpoints.
pub mod prelude {
	pub use crate::{
		Diagnostic, DiagnosticSink, Extensions, Find, FindExt, FindOptions, Page, PagedResult, PagedResultWithPager,
		PaginationError, Paginator, RqlBuilder, RqlString, Settings,
	};
	pub use exh_rql::rql;
}
