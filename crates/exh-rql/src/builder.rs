//! Chainable RQL expression builder.

use crate::args::RqlArgs;
use crate::expression::RqlString;
use crate::operator::Operator;
use exh_core::{Diagnostic, SharedSink, default_sink};
use std::fmt;

/// Accumulates operator terms into one [`RqlString`].
///
/// Every operator call consumes the builder and returns it with one more
/// term, so a chain never aliases stale state. Clone the builder to branch
/// from a shared prefix.
///
/// Nothing here fails. Arguments are serialized without checking field
/// names or value types. An argument list containing whitespace is still
/// appended, after a [`Diagnostic::WhitespaceInArguments`] has been sent to
/// the builder's sink.
///
/// # Examples
///
/// ```
/// use exh_rql::RqlBuilder;
///
/// let base = RqlBuilder::new().eq("status", "active");
/// let newest = base.clone().sort("-creationTimestamp").limit(1).build();
/// let names = base.select("name").build();
///
/// assert_eq!(newest.as_str(), "?eq(status,active)&sort(-creationTimestamp)&limit(1)");
/// assert_eq!(names.as_str(), "?eq(status,active)&select(name)");
/// ```
#[derive(Clone)]
pub struct RqlBuilder {
	expression: String,
	sink: SharedSink,
}

/// Shorthand for [`RqlBuilder::new`].
pub fn rql() -> RqlBuilder {
	RqlBuilder::new()
}

impl RqlBuilder {
	/// Creates an empty builder reporting diagnostics through `tracing`.
	pub fn new() -> Self {
		Self::with_sink(default_sink())
	}

	/// Creates an empty builder reporting diagnostics to `sink`.
	pub fn with_sink(sink: SharedSink) -> Self {
		Self {
			expression: String::new(),
			sink,
		}
	}

	/// Starts from a previously built expression. New terms are appended
	/// after the existing ones.
	///
	/// # Examples
	///
	/// ```
	/// use exh_rql::RqlBuilder;
	///
	/// let base = RqlBuilder::new().eq("status", "active").build();
	/// let by_id = RqlBuilder::from_rql(&base).eq("id", "5f1a").build();
	/// assert_eq!(by_id.as_str(), "?eq(status,active)&eq(id,5f1a)");
	/// ```
	pub fn from_rql(rql: &RqlString) -> Self {
		Self {
			expression: rql.as_str().to_string(),
			sink: default_sink(),
		}
	}

	/// Replaces the diagnostic sink.
	pub fn diagnostics(mut self, sink: SharedSink) -> Self {
		self.sink = sink;
		self
	}

	/// Restricts returned properties: `select(field1,field2)`.
	pub fn select(self, fields: impl RqlArgs) -> Self {
		self.push(Operator::Select, fields.join_args())
	}

	/// Bounds the result count: `limit(count)`.
	pub fn limit(self, count: u64) -> Self {
		self.push(Operator::Limit, count.to_string())
	}

	/// Bounds the result count starting at `offset`: `limit(count,offset)`.
	///
	/// An offset of zero is the default and is left out.
	///
	/// # Examples
	///
	/// ```
	/// use exh_rql::RqlBuilder;
	///
	/// assert_eq!(RqlBuilder::new().limit_with_offset(10, 20).build().as_str(), "?limit(10,20)");
	/// assert_eq!(RqlBuilder::new().limit_with_offset(10, 0).build().as_str(), "?limit(10)");
	/// ```
	pub fn limit_with_offset(self, count: u64, offset: u64) -> Self {
		if offset == 0 {
			return self.limit(count);
		}
		self.push(Operator::Limit, format!("{},{}", count, offset))
	}

	/// Orders the results. Prefix a field with `+` (ascending, the default)
	/// or `-` (descending).
	pub fn sort(self, fields: impl RqlArgs) -> Self {
		self.push(Operator::Sort, fields.join_args())
	}

	/// Keeps records whose `field` is one of `values`.
	///
	/// `in` is a keyword, hence the trailing underscore.
	pub fn in_(self, field: impl AsRef<str>, values: impl RqlArgs) -> Self {
		self.push_list(Operator::In, field.as_ref(), values)
	}

	/// Keeps records whose `field` is none of `values`.
	pub fn out(self, field: impl AsRef<str>, values: impl RqlArgs) -> Self {
		self.push_list(Operator::Out, field.as_ref(), values)
	}

	/// `ge(field,value)`: greater than or equal.
	pub fn ge(self, field: impl AsRef<str>, value: impl fmt::Display) -> Self {
		self.push_comparison(Operator::Ge, field.as_ref(), value)
	}

	/// `eq(field,value)`: equal.
	pub fn eq(self, field: impl AsRef<str>, value: impl fmt::Display) -> Self {
		self.push_comparison(Operator::Eq, field.as_ref(), value)
	}

	/// `le(field,value)`: less than or equal.
	pub fn le(self, field: impl AsRef<str>, value: impl fmt::Display) -> Self {
		self.push_comparison(Operator::Le, field.as_ref(), value)
	}

	/// `ne(field,value)`: not equal.
	pub fn ne(self, field: impl AsRef<str>, value: impl fmt::Display) -> Self {
		self.push_comparison(Operator::Ne, field.as_ref(), value)
	}

	/// `like(field,value)`: pattern match.
	pub fn like(self, field: impl AsRef<str>, value: impl fmt::Display) -> Self {
		self.push_comparison(Operator::Like, field.as_ref(), value)
	}

	/// Less than.
	///
	/// Emits a `gt(field,value)` term, see [`Operator::wire_name`].
	pub fn lt(self, field: impl AsRef<str>, value: impl fmt::Display) -> Self {
		self.push_comparison(Operator::Lt, field.as_ref(), value)
	}

	/// `gt(field,value)`: greater than.
	pub fn gt(self, field: impl AsRef<str>, value: impl fmt::Display) -> Self {
		self.push_comparison(Operator::Gt, field.as_ref(), value)
	}

	/// Returns the accumulated expression. Can be called any number of times.
	pub fn build(&self) -> RqlString {
		RqlString::from_built(self.expression.clone())
	}

	fn push_comparison(self, operator: Operator, field: &str, value: impl fmt::Display) -> Self {
		self.push(operator, format!("{},{}", field, value))
	}

	fn push_list(self, operator: Operator, field: &str, values: impl RqlArgs) -> Self {
		self.push(operator, format!("{},{}", field, values.join_args()))
	}

	fn push(mut self, operator: Operator, arguments: String) -> Self {
		if arguments.chars().any(char::is_whitespace) {
			self.sink.emit(&Diagnostic::WhitespaceInArguments {
				operator: operator.wire_name().to_string(),
				arguments: arguments.clone(),
			});
		}

		self.expression
			.push(if self.expression.is_empty() { '?' } else { '&' });
		self.expression.push_str(operator.wire_name());
		self.expression.push('(');
		self.expression.push_str(&arguments);
		self.expression.push(')');
		self
	}
}

impl Default for RqlBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl From<&RqlString> for RqlBuilder {
	fn from(rql: &RqlString) -> Self {
		Self::from_rql(rql)
	}
}

impl fmt::Debug for RqlBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RqlBuilder")
			.field("expression", &self.expression)
			.finish_non_exhaustive()
	}
}
