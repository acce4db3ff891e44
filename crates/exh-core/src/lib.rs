//! # exh-core
//!
//! Pieces shared by every exh client crate.
//!
//! Right now that is the diagnostic channel: the query builder and the
//! pagination engine report caller-usability warnings (whitespace inside
//! operator arguments, very large collections fetched eagerly) through a
//! [`DiagnosticSink`] chosen by the embedding host instead of writing to a
//! global stream.
//!
//! ## Example
//!
//! ```
//! use exh_core::{Diagnostic, DiagnosticSink, MemorySink};
//!
//! let sink = MemorySink::new();
//! sink.emit(&Diagnostic::LargeCollection {
//!     total: 5000,
//!     threshold: 2000,
//! });
//! assert_eq!(sink.len(), 1);
//! ```

pub mod diagnostics;

pub use diagnostics::{
	Diagnostic, DiagnosticSink, MemorySink, NullSink, SharedSink, TracingSink, default_sink,
};
