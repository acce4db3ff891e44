//! Cursor, eager and lazy pagination over list endpoints.

pub use exh_pagination::*;
