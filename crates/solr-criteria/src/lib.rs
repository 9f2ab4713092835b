//! Fluent builder for Solr / Lucene query strings.
//!
//! A [`Criteria`] is an expression tree of field predicates joined by
//! `AND` / `OR`, rendered to query text through [`std::fmt::Display`]:
//!
//! ```text
//! Criteria::where("field").is("foo").and_where("other")?.between(1, 10)
//!     => field:foo AND other:[1 TO 10]
//! ```
//!
//! Values are escaped and quoted on the way in; rendering never mutates.

// public exports are one module level down
pub mod criteria;
pub mod error;
pub mod value;

mod render;
mod tree;

pub use criteria::{Criteria, LeafView, Target};
pub use error::{CriteriaError, Result};
pub use value::{UtcTimestamp, Value};

///
/// Prelude
///
/// Builder vocabulary only; errors are imported explicitly.
///

pub mod prelude {
    pub use crate::{
        criteria::{Criteria, Target},
        value::{UtcTimestamp, Value},
    };
}
