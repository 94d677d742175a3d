//! The declarative metadata and accessor boundary
//!
//! A mapped type implements [`Entity`] by hand (or via generated code):
//! it declares its qualified name, an optional explicit table name, an
//! ordered field table, and get/set access to fields by name. The
//! [`registry`](crate::registry) consumes the declarations; the statement
//! builders and hydrator consume the accessors.

use crate::errors::MappingError;
use crate::value::{FromValue, Value};

/// Per-field declaration: the field name plus the optional column
/// annotation (`column` name and primary-key flag).
///
/// `column: None` means "no annotation" — the column name is derived from
/// the field name and the field is a key only if it is literally named
/// `id`. A blank annotation value is treated the same as no annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub column: Option<&'static str>,
    pub primary_key: bool,
}

impl FieldSpec {
    /// An unannotated field.
    pub const fn plain(name: &'static str) -> Self {
        Self {
            name,
            column: None,
            primary_key: false,
        }
    }

    /// A field with an explicit column name.
    pub const fn renamed(name: &'static str, column: &'static str) -> Self {
        Self {
            name,
            column: Some(column),
            primary_key: false,
        }
    }

    /// A field with an explicit column name, marked as primary key.
    pub const fn key(name: &'static str, column: &'static str) -> Self {
        Self {
            name,
            column: Some(column),
            primary_key: true,
        }
    }
}

/// A type that maps to one table row.
///
/// The `Default` bound supplies zero-valued construction for hydration;
/// mapped fields are conventionally `Option<T>` so an unset field reads
/// back as `None` and is elided from generated statements.
pub trait Entity: Default + 'static {
    /// Qualified type name, e.g. `"dao::User"`. Only the last segment
    /// participates in table-name derivation.
    const QUALIFIED_NAME: &'static str;

    /// Explicit table name, used verbatim when non-blank.
    const TABLE: Option<&'static str> = None;

    /// Field declarations in declaration order.
    fn fields() -> &'static [FieldSpec];

    /// Read a field by name. Returns `None` both for an unset field and
    /// for an unknown field name; callers treat absence as "skip this
    /// column", which is what statement elision relies on.
    fn get(&self, field: &str) -> Option<Value>;

    /// Write a field by name. Unknown names and incompatible values are
    /// explicit per-field errors, never silently dropped.
    fn set(&mut self, field: &str, value: Value) -> Result<(), MappingError>;
}

/// Convert a raw value for a field slot, attributing failures to the
/// field. Intended for `Entity::set` implementations:
///
/// ```ignore
/// "id" => self.id = coerce::<Self, _>("id", value)?,
/// ```
pub fn coerce<E: Entity, T: FromValue>(
    field: &'static str,
    value: Value,
) -> Result<T, MappingError> {
    T::from_value(value).map_err(|e| MappingError::new(E::QUALIFIED_NAME, field, e.to_string()))
}
