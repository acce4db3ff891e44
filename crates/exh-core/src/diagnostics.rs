//! Non-fatal diagnostics and the sinks that receive them.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// A caller-usability warning. Never an error: the operation that raised it
/// always continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
	/// An operator argument list contains whitespace. The term is still
	/// appended to the expression.
	WhitespaceInArguments {
		/// Operator name as written on the wire.
		operator: String,
		/// The joined argument list.
		arguments: String,
	},
	/// An eager full-collection fetch started on a collection larger than the
	/// configured threshold. Fetching continues regardless.
	LargeCollection {
		/// Total reported by the first page.
		total: u64,
		/// Threshold that was exceeded.
		threshold: u64,
	},
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Diagnostic::WhitespaceInArguments { operator, arguments } => write!(
				f,
				"A space has been detected while building the rql ({}({})), please be aware that problems can arise",
				operator, arguments
			),
			Diagnostic::LargeCollection { total, threshold } => write!(
				f,
				"total amount is > {}, be aware that this function can hog up resources. Total = {}",
				threshold, total
			),
		}
	}
}

/// Receiver for [`Diagnostic`]s.
///
/// Any `Fn(&Diagnostic) + Send + Sync` closure is a sink, so hosts can route
/// diagnostics into their own logging without defining a type.
pub trait DiagnosticSink: Send + Sync {
	fn emit(&self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
	F: Fn(&Diagnostic) + Send + Sync,
{
	fn emit(&self, diagnostic: &Diagnostic) {
		self(diagnostic)
	}
}

/// Shared handle to a sink, cloned into every builder and paginator.
pub type SharedSink = Arc<dyn DiagnosticSink>;

/// Returns the sink used when the caller does not pick one.
pub fn default_sink() -> SharedSink {
	Arc::new(TracingSink)
}

/// Forwards diagnostics to `tracing` at `WARN` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
	fn emit(&self, diagnostic: &Diagnostic) {
		match diagnostic {
			Diagnostic::WhitespaceInArguments { operator, arguments } => {
				tracing::warn!(operator = %operator, arguments = %arguments, "{}", diagnostic);
			}
			Diagnostic::LargeCollection { total, threshold } => {
				tracing::warn!(total = *total, threshold = *threshold, "{}", diagnostic);
			}
		}
	}
}

/// Drops every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
	fn emit(&self, _diagnostic: &Diagnostic) {}
}

/// Keeps diagnostics in memory so they can be inspected later.
///
/// Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
	records: Arc<Mutex<Vec<Diagnostic>>>,
}

impl MemorySink {
	/// Creates an empty sink.
	///
	/// # Examples
	///
	/// ```
	/// use exh_core::MemorySink;
	///
	/// let sink = MemorySink::new();
	/// assert!(sink.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a snapshot of the recorded diagnostics, oldest first.
	pub fn records(&self) -> Vec<Diagnostic> {
		self.records.lock().clone()
	}

	pub fn len(&self) -> usize {
		self.records.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.lock().is_empty()
	}

	pub fn clear(&self) {
		self.records.lock().clear();
	}
}

impl DiagnosticSink for MemorySink {
	fn emit(&self, diagnostic: &Diagnostic) {
		self.records.lock().push(diagnostic.clone());
	}
}
