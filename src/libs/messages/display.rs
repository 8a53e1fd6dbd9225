//! User-facing text for every [`Message`].
//!
//! All wording lives here so commands and the store only ever pass
//! structured values around.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

fn rows(count: usize) -> &'static str {
    if count == 1 {
        "row"
    } else {
        "rows"
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === PRODUCT MESSAGES ===
            Message::ProductCreated(name, id) => format!("Product '{}' added with id {}", name, id),
            Message::ProductPriceUpdated(key, count) => format!("Price of '{}' updated ({} {})", key, count, rows(*count)),
            Message::ProductImageUpdated(key, count) => format!("Image of '{}' updated ({} {})", key, count, rows(*count)),
            Message::ProductDeleted(key, count) => format!("Product '{}' deleted ({} {})", key, count, rows(*count)),
            Message::ProductNotFound(key) => format!("No product matches '{}'", key),
            Message::ProductsHeader => "Products".to_string(),
            Message::ProductsEmpty => "No products stored yet".to_string(),
            Message::ConfirmDeleteProduct(key) => format!("Delete product '{}'?", key),

            // === TASK MESSAGES ===
            Message::TaskCreated(name, id) => format!("Task '{}' added with id {}", name, id),
            Message::TaskRenamed { from, to, count } => {
                format!("Task '{}' renamed to '{}' ({} {})", from, to, count, rows(*count))
            }
            Message::TaskDeleted(key, count) => format!("Task '{}' deleted ({} {})", key, count, rows(*count)),
            Message::TaskNotFound(key) => format!("No task matches '{}'", key),
            Message::TasksHeader => "Tasks".to_string(),
            Message::TasksEmpty => "No tasks stored yet".to_string(),
            Message::ConfirmDeleteTask(key) => format!("Delete task '{}'?", key),

            // === INPUT MESSAGES ===
            Message::EmptyName => "Name must not be empty".to_string(),
            Message::InvalidPrice(raw) => format!("'{}' is not a valid price", raw),
            Message::InvalidId(raw) => format!("'{}' is not a valid id", raw),
            Message::ImageReadFailed(path, error) => format!("Failed to read image '{}': {}", path, error),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpening(path) => format!("Opening database at {}", path),
            Message::DatabaseResetting => "Dropping and recreating all tables".to_string(),
            Message::DatabaseCloseFailed(error) => format!("Failed to close the database: {}", error),
            Message::DatabaseReset => "Database reset, all records were removed".to_string(),
            Message::ConfirmDatabaseReset => "This removes every product and task. Continue?".to_string(),
            Message::SchemaCreated(version) => format!("Created schema version {}", version),
            Message::SchemaUpToDate(version) => format!("Schema version {} is up to date", version),
            Message::SchemaUpgradeDiscardingData(from, to) => {
                format!("Upgrading schema from version {} to {}: existing records will be discarded", from, to)
            }
            Message::SchemaUpgraded(from, to) => format!("Schema upgraded from version {} to {}", from, to),
            Message::SchemaVersion { stored, expected } => {
                format!("Schema version: {} (expected {})", stored, expected)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigPromptFileName => "Database file name".to_string(),
            Message::ConfigPromptUpgradePolicy => "When the schema version changes".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportSuccess(path) => format!("Data exported to {}", path),
        };

        write!(f, "{}", text)
    }
}
