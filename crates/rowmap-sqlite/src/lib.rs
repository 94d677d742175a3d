//! rowmap-sqlite - SQLite executor for the rowmap engine
//!
//! Provides:
//! - [`SqliteExecutor`], a [`rowmap_core::Executor`] over a rusqlite
//!   connection with one explicit transaction per statement
//! - Connection helpers ([`db::open`], [`db::open_in_memory`]) with the
//!   pragmas a mapped store wants

pub mod db;
pub mod executor;

mod errors;

pub use executor::SqliteExecutor;
