use std::path::Path;

use rusqlite::Connection;

use crate::error::PersistenceError;

/// Opens (or creates) the SQLite store at `path`.
///
/// The connection closes when dropped, on success and error paths alike.
pub fn open_store(path: &Path) -> Result<Connection, PersistenceError> {
    let conn = Connection::open(path)?;
    Ok(conn)
}

/// Quotes a table name for use in SQL text.
pub fn quote_identifier(name: &str) -> Result<String, PersistenceError> {
    if name.trim().is_empty() {
        return Err(PersistenceError::InvalidTableName(name.to_string()));
    }
    Ok(format!("\"{}\"", name.replace('"', "\"\"")))
}
