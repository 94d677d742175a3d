//! Per-type metadata cache
//!
//! [`MetadataRegistry`] resolves a type's table name and ordered column
//! descriptors once and memoizes the result for the registry's lifetime.
//! Resolution is pure, so a first-access race computes value-identical
//! descriptors; the cache takes the first insert and the loser's copy is
//! dropped.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::entity::Entity;
use crate::naming;

/// Metadata for one field-to-column mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub table_name: String,
    pub field_name: &'static str,
    pub column_name: String,
    pub primary_key: bool,
}

/// Cached mapping metadata for one type: its table name and one column
/// descriptor per declared field, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDescriptor {
    pub table_name: String,
    pub columns: Vec<ColumnDescriptor>,
}

impl EntityDescriptor {
    /// Columns flagged as primary key, in declaration order.
    pub fn key_columns(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter().filter(|c| c.primary_key)
    }

    /// First declared primary-key column, if the type has one.
    pub fn first_key(&self) -> Option<&ColumnDescriptor> {
        self.key_columns().next()
    }
}

/// Concurrency-safe cache from type identity to [`EntityDescriptor`].
///
/// Constructed once and injected where needed; descriptors live as long
/// as the registry and are never invalidated — a type's shape is assumed
/// fixed for the process lifetime.
#[derive(Debug, Default)]
pub struct MetadataRegistry {
    cache: RwLock<HashMap<TypeId, Arc<EntityDescriptor>>>,
    introspections: AtomicU64,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve (or fetch the cached) descriptor for `E`.
    pub fn descriptor<E: Entity>(&self) -> Arc<EntityDescriptor> {
        let key = TypeId::of::<E>();
        if let Some(descriptor) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Arc::clone(descriptor);
        }

        // Compute outside the write lock; the entry API keeps the first
        // insert if another thread raced us here.
        let computed = Arc::new(self.introspect::<E>());
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cache.entry(key).or_insert(computed))
    }

    /// Resolved table name for `E`.
    pub fn table_name<E: Entity>(&self) -> String {
        self.descriptor::<E>().table_name.clone()
    }

    /// Number of full introspections performed so far. Cached lookups do
    /// not move this counter.
    pub fn introspection_count(&self) -> u64 {
        self.introspections.load(Ordering::Relaxed)
    }

    fn introspect<E: Entity>(&self) -> EntityDescriptor {
        self.introspections.fetch_add(1, Ordering::Relaxed);

        let table_name = match E::TABLE.filter(|t| !t.trim().is_empty()) {
            Some(table) => table.to_string(),
            None => naming::table_name_from_type_name(E::QUALIFIED_NAME),
        };

        let fields = E::fields();
        let mut columns = Vec::with_capacity(fields.len());
        for spec in fields {
            // A blank annotation value falls back to the naming convention,
            // and the explicit primary-key flag is only honored alongside a
            // usable annotation value.
            let (column_name, primary_key) = match spec.column.filter(|c| !c.trim().is_empty()) {
                Some(column) => (column.to_string(), spec.primary_key || column == "id"),
                None => (naming::camel_to_snake(spec.name), spec.name == "id"),
            };
            columns.push(ColumnDescriptor {
                table_name: table_name.clone(),
                field_name: spec.name,
                column_name,
                primary_key,
            });
        }

        EntityDescriptor {
            table_name,
            columns,
        }
    }
}
