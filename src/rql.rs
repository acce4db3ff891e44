//! RQL expression builder.
//!
//! # Examples
//!
//! ```
//! use exh::rql::rql;
//!
//! let expression = rql().select(["id", "name"]).eq("status", "active").limit(10).build();
//! assert_eq!(expression.as_str(), "?select(id,name)&eq(status,active)&limit(10)");
//! ```

pub use exh_rql::*;
