//! Schema versioning for the store.
//!
//! The schema version lives in SQLite's `PRAGMA user_version`. On open the
//! stored version is compared with the version the caller asked for:
//!
//! - **0** (fresh file): tables are created and the version is stamped.
//! - **equal**: tables are ensured to exist, nothing else happens.
//! - **lower**: the [`UpgradePolicy`] decides. `DropAndRecreate` discards
//!   every row and rebuilds empty tables, `Refuse` fails.
//! - **higher**: always fails, downgrades are never attempted.
//!
//! ## Usage
//!
//! ```rust
//! use inventa::db::migrations::{get_db_version, SchemaManager, UpgradePolicy, SCHEMA_VERSION};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! SchemaManager::new(SCHEMA_VERSION, UpgradePolicy::DropAndRecreate).apply(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, SCHEMA_VERSION);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::error::StoreError;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_info, msg_warning};
use rusqlite::{Connection, Transaction};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Schema version this build of the store writes.
pub const SCHEMA_VERSION: u32 = 1;

const SCHEMA_PRODUCTS: &str = "CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    price REAL,
    image BLOB
)";

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT
)";

const DROP_TABLES: &str = "DROP TABLE IF EXISTS products; DROP TABLE IF EXISTS tasks;";

/// What to do when an existing file carries an older schema version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradePolicy {
    /// Drop every table and recreate it empty. All stored rows are lost.
    #[default]
    DropAndRecreate,
    /// Leave the file untouched and fail with [`StoreError::VersionMismatch`].
    Refuse,
}

impl UpgradePolicy {
    pub const ALL: [UpgradePolicy; 2] = [UpgradePolicy::DropAndRecreate, UpgradePolicy::Refuse];
}

impl fmt::Display for UpgradePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpgradePolicy::DropAndRecreate => write!(f, "drop and recreate (discards data)"),
            UpgradePolicy::Refuse => write!(f, "refuse to open"),
        }
    }
}

/// Brings a connection to the requested schema version.
#[derive(Debug, Clone, Copy)]
pub struct SchemaManager {
    target_version: u32,
    policy: UpgradePolicy,
}

impl SchemaManager {
    pub fn new(target_version: u32, policy: UpgradePolicy) -> Self {
        Self { target_version, policy }
    }

    /// Applies the version rules described in the module docs.
    ///
    /// All schema changes and the version stamp happen in one transaction,
    /// so a failure leaves the file as it was.
    pub fn apply(&self, conn: &mut Connection) -> Result<(), StoreError> {
        let current = get_db_version(conn)?;
        let target = self.target_version;

        match current.cmp(&target) {
            Ordering::Equal => {
                msg_debug!(Message::SchemaUpToDate(current));
                let tx = conn.transaction()?;
                create_tables(&tx)?;
                tx.commit()?;
            }
            Ordering::Less if current == 0 => {
                let tx = conn.transaction()?;
                create_tables(&tx)?;
                set_db_version(&tx, target)?;
                tx.commit()?;
                msg_debug!(Message::SchemaCreated(target));
            }
            Ordering::Less => match self.policy {
                UpgradePolicy::DropAndRecreate => {
                    msg_warning!(Message::SchemaUpgradeDiscardingData(current, target));
                    let tx = conn.transaction()?;
                    recreate_tables(&tx)?;
                    set_db_version(&tx, target)?;
                    tx.commit()?;
                    msg_info!(Message::SchemaUpgraded(current, target));
                }
                UpgradePolicy::Refuse => {
                    return Err(StoreError::VersionMismatch {
                        found: current,
                        expected: target,
                    });
                }
            },
            Ordering::Greater => {
                return Err(StoreError::VersionMismatch {
                    found: current,
                    expected: target,
                });
            }
        }

        Ok(())
    }
}

fn create_tables(tx: &Transaction) -> rusqlite::Result<()> {
    tx.execute(SCHEMA_PRODUCTS, [])?;
    tx.execute(SCHEMA_TASKS, [])?;
    Ok(())
}

/// Drops both tables and creates them again, empty.
pub fn recreate_tables(tx: &Transaction) -> rusqlite::Result<()> {
    tx.execute_batch(DROP_TABLES)?;
    create_tables(tx)
}

/// Reads the schema version stamped in the file. A new file reports 0.
pub fn get_db_version(conn: &Connection) -> rusqlite::Result<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
}

fn set_db_version(conn: &Connection, version: u32) -> rusqlite::Result<()> {
    conn.pragma_update(None, "user_version", version)
}

/// Checks whether opening with `target_version` would change the schema.
pub fn needs_migration(conn: &Connection, target_version: u32) -> rusqlite::Result<bool> {
    Ok(get_db_version(conn)? != target_version)
}
