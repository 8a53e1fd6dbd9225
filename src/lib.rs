//! # Inventa - local product and task store
//!
//! Keeps priced products (with an optional image) and plain tasks in a
//! single SQLite file, and exposes insert, update, delete and list-all over
//! both.
//!
//! ## Usage
//!
//! ```rust
//! use inventa::db::db::{Db, DbOptions};
//! use inventa::libs::task::Task;
//!
//! let db = Db::open_in_memory(DbOptions::default())?;
//! db.tasks().insert(&Task::new("Restock shelves"))?;
//! db.tasks().rename("Restock shelves", "Restock shelves in aisle 4")?;
//! assert_eq!(db.tasks().get_all()?.len(), 1);
//! # Ok::<(), inventa::db::error::StoreError>(())
//! ```

pub mod commands;
pub mod db;
pub mod libs;
