//! Persistence layer for inventa.
//!
//! One SQLite file holds two independent tables, `products` and `tasks`.
//! [`db::Db`] owns the connection and the schema version; the repositories in
//! [`products`] and [`tasks`] borrow it to run insert, update, delete and
//! list-all.
//!
//! ## Usage
//!
//! ```rust
//! use inventa::db::db::{Db, DbOptions};
//! use inventa::libs::product::Product;
//!
//! let db = Db::open_in_memory(DbOptions::default())?;
//! let id = db.products().insert(&Product::new("widget", 4.5, vec![]))?;
//! db.products().update_price("widget", 9.99)?;
//!
//! let all = db.products().get_all()?;
//! assert_eq!(all[0].id, Some(id));
//! db.close()?;
//! # Ok::<(), inventa::db::error::StoreError>(())
//! ```

/// Connection ownership, open/close lifecycle and store-wide operations.
pub mod db;

/// Typed store errors.
pub mod error;

/// Schema versioning and the upgrade policy.
pub mod migrations;

/// Product records: name, price and image.
pub mod products;

/// Task records: a single line of text.
pub mod tasks;
