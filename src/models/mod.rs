//! Domain models for the catalog export.
//!
//! - [`Collection`]: one of the eight resource categories, in export order.
//! - [`ContentRecord`]: a resource with an optional backing source file.
//! - [`Catalog`]: the immutable snapshot of all collections, loaded once at start-up.

mod catalog;
mod collection;
mod record;

pub use catalog::*;
pub use collection::*;
pub use record::*;
