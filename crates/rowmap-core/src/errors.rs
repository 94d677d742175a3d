//! Error facility for rowmap
//!
//! A small, stable taxonomy: validation errors raised before any statement
//! is executed, driver errors surfaced through the executor boundary, and
//! per-field mapping errors from the accessor boundary. Each error maps to
//! an [`ErrorKind`] with a stable code so callers can branch on the class
//! without matching message text.

use thiserror::Error;

/// Result type alias using [`OrmError`].
pub type Result<T> = std::result::Result<T, OrmError>;

/// Canonical error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The operation was rejected before any statement was built or run.
    Validation,
    /// The executor failed while preparing or executing a statement; the
    /// enclosing transaction has been rolled back.
    Driver,
    /// A single field could not be read or written through the accessor.
    Mapping,
}

impl ErrorKind {
    /// Stable error code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "ERR_VALIDATION",
            ErrorKind::Driver => "ERR_DRIVER",
            ErrorKind::Mapping => "ERR_MAPPING",
        }
    }
}

/// Errors produced by the mapping engine and its executor boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrmError {
    /// Insert with no populated column; there is nothing to insert.
    #[error("table '{table}' has no populated columns to insert")]
    EmptyInsert { table: String },

    /// Update or delete (or select-by-id resolution) found no usable
    /// primary-key column to identify the row.
    #[error("table '{table}' has no populated primary-key column")]
    MissingKey { table: String },

    /// Update with a populated key but no populated non-key column.
    #[error("table '{table}' has no populated columns to update")]
    EmptyUpdate { table: String },

    /// Failure raised by the executor; propagated unchanged, no retry.
    #[error("driver failure during {op}: {message}")]
    Driver { op: &'static str, message: String },

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl OrmError {
    /// Wrap a driver failure, tagging the operation that raised it.
    pub fn driver(op: &'static str, message: impl Into<String>) -> Self {
        OrmError::Driver {
            op,
            message: message.into(),
        }
    }

    /// Classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrmError::EmptyInsert { .. }
            | OrmError::MissingKey { .. }
            | OrmError::EmptyUpdate { .. } => ErrorKind::Validation,
            OrmError::Driver { .. } => ErrorKind::Driver,
            OrmError::Mapping(_) => ErrorKind::Mapping,
        }
    }
}

/// One field operation failed; scoped to the field, not the row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot map field '{field}' on {type_name}: {detail}")]
pub struct MappingError {
    pub type_name: &'static str,
    pub field: String,
    pub detail: String,
}

impl MappingError {
    pub fn new(
        type_name: &'static str,
        field: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            type_name,
            field: field.into(),
            detail: detail.into(),
        }
    }

    /// The field name is not declared on the type.
    pub fn unknown_field(type_name: &'static str, field: impl Into<String>) -> Self {
        Self::new(type_name, field, "no such field")
    }
}
