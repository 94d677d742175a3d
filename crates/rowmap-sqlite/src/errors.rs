//! Driver error mapping
//!
//! The orphan rule precludes a `From<rusqlite::Error>` impl on the core
//! error type, so failures cross the boundary through this helper, tagged
//! with the operation that raised them.

use rowmap_core::OrmError;

pub(crate) fn from_rusqlite(op: &'static str, err: rusqlite::Error) -> OrmError {
    OrmError::driver(op, err.to_string())
}
