//! The opaque, validated expression value.

use crate::operator::Operator;
use serde::{Serialize, Serializer};
use std::fmt;

/// A built RQL expression.
///
/// Only [`RqlBuilder::build`](crate::RqlBuilder::build) creates one, so every
/// value of this type is either empty or a `?`-prefixed list of
/// `operator(args)` terms joined by `&`. There is no `From<String>` and no
/// `Deserialize`; code that needs an expression has to go through the
/// builder.
///
/// # Examples
///
/// ```
/// use exh_rql::RqlBuilder;
///
/// let rql = RqlBuilder::new().eq("id", 123).build();
/// assert_eq!(rql.to_string(), "?eq(id,123)");
/// assert_eq!(rql.to_url("/users"), "/users?eq(id,123)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RqlString(String);

impl RqlString {
	pub(crate) fn from_built(expression: String) -> Self {
		Self(expression)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over the `operator(args)` terms in order.
	///
	/// # Examples
	///
	/// ```
	/// use exh_rql::RqlBuilder;
	///
	/// let rql = RqlBuilder::new().eq("a", 1).limit(5).build();
	/// assert_eq!(rql.terms().collect::<Vec<_>>(), vec!["eq(a,1)", "limit(5)"]);
	/// ```
	pub fn terms(&self) -> impl Iterator<Item = &str> {
		self.0
			.strip_prefix('?')
			.unwrap_or(&self.0)
			.split('&')
			.filter(|term| !term.is_empty())
	}

	/// Returns true when any term is a `limit(...)` term.
	pub fn has_limit(&self) -> bool {
		self.terms().any(is_limit_term)
	}

	/// Returns the same expression with every `limit(...)` term removed.
	///
	/// # Examples
	///
	/// ```
	/// use exh_rql::RqlBuilder;
	///
	/// let rql = RqlBuilder::new().eq("a", 1).limit_with_offset(10, 20).sort("-b").build();
	/// assert_eq!(rql.without_limit().as_str(), "?eq(a,1)&sort(-b)");
	/// ```
	pub fn without_limit(&self) -> Self {
		let kept: Vec<&str> = self.terms().filter(|term| !is_limit_term(term)).collect();
		if kept.is_empty() {
			Self::default()
		} else {
			Self(format!("?{}", kept.join("&")))
		}
	}

	/// Appends the expression as-is to a resource path.
	pub fn to_url(&self, path: &str) -> String {
		format!("{}{}", path, self.0)
	}
}

fn is_limit_term(term: &str) -> bool {
	term.strip_prefix(Operator::Limit.wire_name())
		.is_some_and(|rest| rest.starts_with('('))
}

impl fmt::Display for RqlString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for RqlString {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl Serialize for RqlString {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}
