//! Connection management
//!
//! Opens SQLite connections with the settings a mapped store wants:
//! foreign keys on everywhere, WAL journaling for file-backed databases.

use std::path::Path;

use rowmap_core::Result;
use rusqlite::Connection;

use crate::errors::from_rusqlite;

/// Open (creating if needed) a database file.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = Connection::open(path).map_err(|e| from_rusqlite("open", e))?;
    // journal_mode reports the resulting mode as a result row, so it has
    // to be read as a query rather than pragma_update.
    conn.query_row("PRAGMA journal_mode = WAL", [], |_row| Ok(()))
        .map_err(|e| from_rusqlite("pragma", e))?;
    configure(&conn)?;
    Ok(conn)
}

/// Open an in-memory database, mainly for tests.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(|e| from_rusqlite("open", e))?;
    configure(&conn)?;
    Ok(conn)
}

fn configure(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", true)
        .map_err(|e| from_rusqlite("pragma", e))
}
