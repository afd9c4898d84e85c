//! A string key-value store backed by a single SQLite table.
//!
//! Values are opaque strings; callers decide how to encode them (the
//! transaction list is stored as a JSON array).

use rusqlite::{Connection, OptionalExtension};

use crate::Error;

/// Create the key-value table if it does not already exist.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_key_value_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS key_value (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// Get the value stored under `key`, or `None` if nothing has been stored.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn get_item(key: &str, connection: &Connection) -> Result<Option<String>, Error> {
    connection
        .query_row(
            "SELECT value FROM key_value WHERE key = ?1",
            (key,),
            |row| row.get(0),
        )
        .optional()
        .map_err(Error::from)
}

/// Store `value` under `key`, replacing any existing value.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn set_item(key: &str, value: &str, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO key_value (key, value) VALUES (?1, ?2)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        (key, value),
    )?;

    Ok(())
}
