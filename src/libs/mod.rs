//! Core library modules for inventa.
//!
//! - **Records**: [`product::Product`] and [`task::Task`]
//! - **Infrastructure**: configuration, data directory, messages
//! - **Presentation**: terminal tables and JSON export

pub mod config;
pub mod data_storage;
pub mod export;
pub mod messages;
pub mod product;
pub mod task;
pub mod view;
