//! Diagnostics shared by the builder and the pagination engine.
//!
//! # Examples
//!
//! ```
//! use exh::core::{Diagnostic, DiagnosticSink, MemorySink};
//!
//! let sink = MemorySink::new();
//! sink.emit(&Diagnostic::LargeCollection { total: 2500, threshold: 2000 });
//! assert_eq!(sink.len(), 1);
//! ```

pub use exh_core::*;
