//! SQLite-backed statement execution
//!
//! Every call runs one statement inside one explicit transaction: begin,
//! execute, commit on success. On the error path the transaction is
//! dropped uncommitted, which rolls it back. Read paths get the same
//! treatment as writes.

use rowmap_core::{Executor, Result, Row, Value};
use rusqlite::types::ValueRef;
use rusqlite::{params_from_iter, Connection};
use tracing::debug;

use crate::errors::from_rusqlite;

/// [`Executor`] over an owned rusqlite connection.
pub struct SqliteExecutor {
    conn: Connection,
}

impl SqliteExecutor {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Give the connection back, e.g. to close it explicitly.
    pub fn into_inner(self) -> Connection {
        self.conn
    }
}

impl Executor for SqliteExecutor {
    fn query(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        debug!(sql, params = ?params, "query");
        let tx = self
            .conn
            .transaction()
            .map_err(|e| from_rusqlite("begin", e))?;

        // Rows are materialized before commit; the statement borrows the
        // transaction, so it lives in its own scope.
        let rows = {
            let mut stmt = tx.prepare(sql).map_err(|e| from_rusqlite("prepare", e))?;
            let columns: Vec<String> = stmt
                .column_names()
                .iter()
                .map(|name| name.to_string())
                .collect();

            let mut seen = stmt
                .query(params_from_iter(params.iter().map(bind_value)))
                .map_err(|e| from_rusqlite("query", e))?;
            let mut out = Vec::new();
            while let Some(row) = seen.next().map_err(|e| from_rusqlite("fetch", e))? {
                let mut values = Vec::with_capacity(columns.len());
                for index in 0..columns.len() {
                    let cell = row
                        .get_ref(index)
                        .map_err(|e| from_rusqlite("fetch", e))?;
                    values.push(read_value(cell));
                }
                out.push(Row::new(columns.clone(), values));
            }
            out
        };

        tx.commit().map_err(|e| from_rusqlite("commit", e))?;
        Ok(rows)
    }

    fn exec(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
        debug!(sql, params = ?params, "exec");
        let tx = self
            .conn
            .transaction()
            .map_err(|e| from_rusqlite("begin", e))?;

        let affected = tx
            .execute(sql, params_from_iter(params.iter().map(bind_value)))
            .map_err(|e| from_rusqlite("execute", e))?;

        tx.commit().map_err(|e| from_rusqlite("commit", e))?;
        Ok(affected as u64)
    }
}

fn bind_value(value: &Value) -> rusqlite::types::Value {
    match value {
        Value::Null => rusqlite::types::Value::Null,
        Value::Integer(i) => rusqlite::types::Value::Integer(*i),
        Value::Real(f) => rusqlite::types::Value::Real(*f),
        Value::Text(s) => rusqlite::types::Value::Text(s.clone()),
        Value::Blob(b) => rusqlite::types::Value::Blob(b.clone()),
    }
}

fn read_value(cell: ValueRef<'_>) -> Value {
    match cell {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(f) => Value::Real(f),
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::Blob(b.to_vec()),
    }
}
