//! rowmap core - minimal object-relational mapping engine
//!
//! Turns partially-populated data objects into parameterized SQL and query
//! result rows back into typed objects:
//! - Per-type metadata (table name, ordered column descriptors) resolved
//!   once and cached for the process lifetime
//! - Statement builders for insert/update/delete/select-all/select-by-id
//!   with null-field elision
//! - Row hydration through a per-type accessor capability
//! - An [`Executor`] contract for driver crates (one transaction per
//!   statement); see `rowmap-sqlite` for the bundled SQLite implementation

pub mod entity;
pub mod errors;
pub mod executor;
pub mod hydrate;
pub mod naming;
pub mod registry;
pub mod sql;
pub mod template;
pub mod value;

#[cfg(test)]
pub(crate) mod test_fixtures;

// Re-export the working surface
pub use entity::{coerce, Entity, FieldSpec};
pub use errors::{ErrorKind, MappingError, OrmError, Result};
pub use executor::{Executor, Row};
pub use registry::{ColumnDescriptor, EntityDescriptor, MetadataRegistry};
pub use sql::Statement;
pub use template::DbTemplate;
pub use value::{FromValue, Value};
