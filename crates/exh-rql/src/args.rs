//! Argument lists accepted by `select`, `sort`, `in` and `out`.

/// A single value or a list of values that serializes into one
/// comma-joined RQL argument string.
///
/// Lists keep their order and duplicates, so `["b", "a", "b"]` joins to
/// `b,a,b`.
///
/// # Examples
///
/// ```
/// use exh_rql::RqlArgs;
///
/// assert_eq!("a,b".join_args(), "a,b");
/// assert_eq!(["a", "b"].join_args(), "a,b");
/// assert_eq!(vec!["-name".to_string()].join_args(), "-name");
/// ```
pub trait RqlArgs {
	fn join_args(&self) -> String;
}

impl RqlArgs for str {
	fn join_args(&self) -> String {
		self.to_string()
	}
}

impl RqlArgs for String {
	fn join_args(&self) -> String {
		self.clone()
	}
}

impl<S: AsRef<str>> RqlArgs for [S] {
	fn join_args(&self) -> String {
		self.iter()
			.map(|value| value.as_ref())
			.collect::<Vec<_>>()
			.join(",")
	}
}

impl<S: AsRef<str>> RqlArgs for Vec<S> {
	fn join_args(&self) -> String {
		self.as_slice().join_args()
	}
}

impl<S: AsRef<str>, const N: usize> RqlArgs for [S; N] {
	fn join_args(&self) -> String {
		self.as_slice().join_args()
	}
}

impl<T: RqlArgs + ?Sized> RqlArgs for &T {
	fn join_args(&self) -> String {
		(**self).join_args()
	}
}
