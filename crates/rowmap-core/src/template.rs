//! The operation orchestrator
//!
//! [`DbTemplate`] sequences statement building, execution and hydration
//! for the five supported operations. It owns an executor and shares a
//! [`MetadataRegistry`]; everything else is stateless.

use std::sync::Arc;

use tracing::debug;

use crate::entity::Entity;
use crate::errors::Result;
use crate::executor::Executor;
use crate::hydrate;
use crate::registry::MetadataRegistry;
use crate::sql;
use crate::value::Value;

/// Entry point for mapped database operations over one executor.
pub struct DbTemplate<X> {
    registry: Arc<MetadataRegistry>,
    executor: X,
}

impl<X: Executor> DbTemplate<X> {
    /// Template with its own private registry.
    pub fn new(executor: X) -> Self {
        Self::with_registry(executor, Arc::new(MetadataRegistry::new()))
    }

    /// Template sharing a registry with other templates, so each type is
    /// introspected once per process rather than once per connection.
    pub fn with_registry(executor: X, registry: Arc<MetadataRegistry>) -> Self {
        Self { registry, executor }
    }

    pub fn registry(&self) -> &Arc<MetadataRegistry> {
        &self.registry
    }

    /// Direct access to the underlying executor, for schema setup and
    /// ad-hoc statements outside the mapped operations.
    pub fn executor(&mut self) -> &mut X {
        &mut self.executor
    }

    /// Insert every populated field of `entity`. Returns rows affected.
    pub fn save<E: Entity>(&mut self, entity: &E) -> Result<u64> {
        let descriptor = self.registry.descriptor::<E>();
        let stmt = sql::insert(&descriptor, entity)?;
        debug!(table = %descriptor.table_name, "save");
        self.executor.exec(&stmt.sql, &stmt.params)
    }

    /// Update populated non-key fields of the row identified by the
    /// populated key fields. Returns rows affected.
    pub fn update<E: Entity>(&mut self, entity: &E) -> Result<u64> {
        let descriptor = self.registry.descriptor::<E>();
        let stmt = sql::update(&descriptor, entity)?;
        debug!(table = %descriptor.table_name, "update");
        self.executor.exec(&stmt.sql, &stmt.params)
    }

    /// Delete the row identified by the populated key fields. Returns rows
    /// affected.
    pub fn delete<E: Entity>(&mut self, entity: &E) -> Result<u64> {
        let descriptor = self.registry.descriptor::<E>();
        let stmt = sql::delete(&descriptor, entity)?;
        debug!(table = %descriptor.table_name, "delete");
        self.executor.exec(&stmt.sql, &stmt.params)
    }

    /// Load every row of the type's table, in result order.
    pub fn select_all<E: Entity>(&mut self) -> Result<Vec<E>> {
        let descriptor = self.registry.descriptor::<E>();
        let stmt = sql::select_all(&descriptor);
        debug!(table = %descriptor.table_name, "select_all");
        let rows = self.executor.query(&stmt.sql, &stmt.params)?;
        Ok(hydrate::hydrate_all(&descriptor, &rows))
    }

    /// Load the row whose primary key equals `id`, or `None`.
    pub fn select_by_id<E: Entity>(&mut self, id: impl Into<Value>) -> Result<Option<E>> {
        let descriptor = self.registry.descriptor::<E>();
        let stmt = sql::select_by_id(&descriptor, id.into())?;
        debug!(table = %descriptor.table_name, "select_by_id");
        let rows = self.executor.query(&stmt.sql, &stmt.params)?;
        Ok(rows.first().map(|row| hydrate::hydrate_one(&descriptor, row)))
    }
}
