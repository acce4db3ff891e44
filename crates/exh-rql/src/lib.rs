//! # exh-rql
//!
//! Builder for RQL (Resource Query Language) expressions, the filter, sort,
//! selection and pagination strings appended to list endpoints.
//!
//! An expression is a sequence of `operator(args)` terms joined by `&` and
//! prefixed by `?` when non-empty:
//!
//! ```text
//! ?select(id,name)&eq(status,active)&sort(-creationTimestamp)&limit(20,40)
//! ```
//!
//! The builder checks the shape of the expression, never its meaning. Field
//! names and values are serialized as given and the backend decides whether
//! they make sense.
//!
//! ## Example
//!
//! ```
//! use exh_rql::RqlBuilder;
//!
//! let rql = RqlBuilder::new()
//!     .select(["id", "name"])
//!     .eq("status", "active")
//!     .limit_with_offset(20, 40)
//!     .build();
//!
//! assert_eq!(rql.as_str(), "?select(id,name)&eq(status,active)&limit(20,40)");
//! ```
//!
//! Consumers accept [`RqlString`], which only [`RqlBuilder::build`] can
//! produce, so a hand-written string cannot end up where an expression is
//! expected.

pub mod args;
pub mod builder;
pub mod expression;
pub mod operator;

pub use args::RqlArgs;
pub use builder::{RqlBuilder, rql};
pub use expression::RqlString;
pub use operator::Operator;
