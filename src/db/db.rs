use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "vplan.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at the default platform data path.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new()
            .get_path(DB_FILE_NAME)
            .map_err(|e| msg_error_anyhow!(Message::DbErrorConnection(e.to_string())))?;
        Self::open(&db_file_path)
    }

    /// Opens the database at an explicit path. Used by the repository
    /// workers and by tests.
    pub fn open(path: &Path) -> Result<Db> {
        let conn = Connection::open(path)?;
        // SQLite leaves foreign keys off unless asked per connection.
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Db { conn })
    }
}
