//! Row hydration - turns result rows back into typed instances
//!
//! Each row starts from the type's zero value (`Default`); every column
//! the driver reports is matched case-sensitively against the descriptor
//! list and written through the accessor. Result columns with no matching
//! descriptor are ignored. A field that cannot be written is a per-field
//! mapping failure: it is reported as a structured diagnostic and the rest
//! of the row still hydrates.

use tracing::warn;

use crate::entity::Entity;
use crate::executor::Row;
use crate::registry::EntityDescriptor;
use crate::value::Value;

/// Hydrate one row into a fresh instance.
pub fn hydrate_one<E: Entity>(descriptor: &EntityDescriptor, row: &Row) -> E {
    let mut entity = E::default();
    for (index, column_name) in row.columns().iter().enumerate() {
        let Some(column) = descriptor
            .columns
            .iter()
            .find(|c| &c.column_name == column_name)
        else {
            continue;
        };
        let value = row.value(index).cloned().unwrap_or(Value::Null);
        if let Err(err) = entity.set(column.field_name, value) {
            warn!(
                table = %descriptor.table_name,
                column = %column.column_name,
                field = column.field_name,
                %err,
                "field skipped during hydration"
            );
        }
    }
    entity
}

/// Hydrate every row, preserving row order. An empty row set yields an
/// empty vector.
pub fn hydrate_all<E: Entity>(descriptor: &EntityDescriptor, rows: &[Row]) -> Vec<E> {
    rows.iter().map(|row| hydrate_one(descriptor, row)).collect()
}
