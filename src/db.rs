//! Database initialization.

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{Error, storage::create_key_value_table};

/// Create the application tables in `connection`.
///
/// All tables are created inside a single exclusive SQL transaction, so the
/// database is either fully initialized or left untouched.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_key_value_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
