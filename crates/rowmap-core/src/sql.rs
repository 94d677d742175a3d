//! Parameterized statement builders
//!
//! Each builder walks the type's column descriptors in declaration order,
//! reads field values through the accessor, and elides columns whose value
//! is absent — partially-populated objects are the normal case, not an
//! error. Validation failures are raised here, before anything reaches an
//! executor.

use crate::entity::Entity;
use crate::errors::{OrmError, Result};
use crate::registry::EntityDescriptor;
use crate::value::Value;

/// A built statement: SQL text with `?` placeholders and the parameter
/// values in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

/// `INSERT INTO <t> (c1, c2, ...) VALUES (?, ?, ...)` over every populated
/// column, key or not.
pub fn insert<E: Entity>(descriptor: &EntityDescriptor, entity: &E) -> Result<Statement> {
    let mut columns = Vec::new();
    let mut params = Vec::new();
    for column in &descriptor.columns {
        if let Some(value) = entity.get(column.field_name) {
            columns.push(column.column_name.as_str());
            params.push(value);
        }
    }

    if columns.is_empty() {
        return Err(OrmError::EmptyInsert {
            table: descriptor.table_name.clone(),
        });
    }

    let placeholders = vec!["?"; columns.len()].join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        descriptor.table_name,
        columns.join(", "),
        placeholders
    );
    Ok(Statement { sql, params })
}

/// `UPDATE <t> SET c = ?, ... WHERE k = ? AND ...`; populated non-key
/// columns become assignments, populated key columns become the predicate.
/// Parameters are assignment values first, then predicate values.
pub fn update<E: Entity>(descriptor: &EntityDescriptor, entity: &E) -> Result<Statement> {
    let mut assignments = Vec::new();
    let mut predicates = Vec::new();
    let mut params = Vec::new();
    let mut key_params = Vec::new();

    for column in &descriptor.columns {
        let Some(value) = entity.get(column.field_name) else {
            continue;
        };
        if column.primary_key {
            predicates.push(format!("{} = ?", column.column_name));
            key_params.push(value);
        } else {
            assignments.push(format!("{} = ?", column.column_name));
            params.push(value);
        }
    }

    if predicates.is_empty() {
        return Err(OrmError::MissingKey {
            table: descriptor.table_name.clone(),
        });
    }
    if assignments.is_empty() {
        return Err(OrmError::EmptyUpdate {
            table: descriptor.table_name.clone(),
        });
    }

    let sql = format!(
        "UPDATE {} SET {} WHERE {}",
        descriptor.table_name,
        assignments.join(", "),
        predicates.join(" AND ")
    );
    params.extend(key_params);
    Ok(Statement { sql, params })
}

/// `DELETE FROM <t> WHERE k = ? AND ...` over populated key columns only.
pub fn delete<E: Entity>(descriptor: &EntityDescriptor, entity: &E) -> Result<Statement> {
    let mut predicates = Vec::new();
    let mut params = Vec::new();
    for column in &descriptor.columns {
        if !column.primary_key {
            continue;
        }
        if let Some(value) = entity.get(column.field_name) {
            predicates.push(format!("{} = ?", column.column_name));
            params.push(value);
        }
    }

    if predicates.is_empty() {
        return Err(OrmError::MissingKey {
            table: descriptor.table_name.clone(),
        });
    }

    let sql = format!(
        "DELETE FROM {} WHERE {}",
        descriptor.table_name,
        predicates.join(" AND ")
    );
    Ok(Statement { sql, params })
}

/// `SELECT * FROM <t>`; never fails, binds nothing.
pub fn select_all(descriptor: &EntityDescriptor) -> Statement {
    Statement {
        sql: format!("SELECT * FROM {}", descriptor.table_name),
        params: Vec::new(),
    }
}

/// `SELECT * FROM <t> WHERE <key> = ?` against the type's resolved
/// primary-key column (first declared when there are several).
pub fn select_by_id(descriptor: &EntityDescriptor, id: Value) -> Result<Statement> {
    let key = descriptor.first_key().ok_or_else(|| OrmError::MissingKey {
        table: descriptor.table_name.clone(),
    })?;
    Ok(Statement {
        sql: format!(
            "SELECT * FROM {} WHERE {} = ?",
            descriptor.table_name, key.column_name
        ),
        params: vec![id],
    })
}
