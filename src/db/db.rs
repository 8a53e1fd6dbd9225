use super::error::StoreError;
use super::migrations::{get_db_version, recreate_tables, SchemaManager, UpgradePolicy, SCHEMA_VERSION};
use super::products::Products;
use super::tasks::Tasks;
use crate::libs::config::DatabaseConfig;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_warning};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub const DB_FILE_NAME: &str = "inventa.db";

/// Version and upgrade behaviour requested when opening a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbOptions {
    pub version: u32,
    pub policy: UpgradePolicy,
}

impl Default for DbOptions {
    fn default() -> Self {
        DbOptions {
            version: SCHEMA_VERSION,
            policy: UpgradePolicy::default(),
        }
    }
}

/// The persistence store: one SQLite connection and the schema it expects.
///
/// A process builds one `Db` and hands out references to it. Repositories
/// returned by [`Db::products`] and [`Db::tasks`] borrow the connection, so
/// none of them can outlive the store. Call [`Db::close`] to observe close
/// errors; dropping the store releases the connection as well.
#[derive(Debug)]
pub struct Db {
    pub conn: Connection,
    options: DbOptions,
}

impl Db {
    /// Opens the store described by the configuration.
    pub fn from_config(config: &DatabaseConfig) -> Result<Db, StoreError> {
        let path = config.path()?;
        Self::open(path, config.options())
    }

    /// Opens (or creates) the database file at `path` and applies the schema rules.
    pub fn open(path: impl AsRef<Path>, options: DbOptions) -> Result<Db, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        msg_debug!(Message::DatabaseOpening(path.display().to_string()));
        let conn = Connection::open(path)?;
        Self::init(conn, options)
    }

    /// Opens a private in-memory store. Its contents vanish on close.
    pub fn open_in_memory(options: DbOptions) -> Result<Db, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn, options)
    }

    fn init(mut conn: Connection, options: DbOptions) -> Result<Db, StoreError> {
        SchemaManager::new(options.version, options.policy).apply(&mut conn)?;
        Ok(Db { conn, options })
    }

    pub fn products(&self) -> Products<'_> {
        Products::new(&self.conn)
    }

    pub fn tasks(&self) -> Tasks<'_> {
        Tasks::new(&self.conn)
    }

    /// Version currently stamped in the file.
    pub fn schema_version(&self) -> Result<u32, StoreError> {
        Ok(get_db_version(&self.conn)?)
    }

    /// Version this store was opened with.
    pub fn expected_version(&self) -> u32 {
        self.options.version
    }

    /// Discards every product and task by dropping and recreating the tables.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        msg_warning!(Message::DatabaseResetting);
        let tx = self.conn.transaction()?;
        recreate_tables(&tx)?;
        tx.commit()?;
        Ok(())
    }

    /// Closes the connection, reporting any error SQLite raises on close.
    pub fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_, e)| StoreError::Storage(e))
    }
}
