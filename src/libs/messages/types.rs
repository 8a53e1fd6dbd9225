#[derive(Debug, Clone)]
pub enum Message {
    // === PRODUCT MESSAGES ===
    ProductCreated(String, i64),       // name, id
    ProductPriceUpdated(String, usize), // key, rows changed
    ProductImageUpdated(String, usize), // key, rows changed
    ProductDeleted(String, usize),      // key, rows changed
    ProductNotFound(String),
    ProductsHeader,
    ProductsEmpty,
    ConfirmDeleteProduct(String),

    // === TASK MESSAGES ===
    TaskCreated(String, i64), // name, id
    TaskRenamed {
        from: String,
        to: String,
        count: usize,
    },
    TaskDeleted(String, usize), // key, rows changed
    TaskNotFound(String),
    TasksHeader,
    TasksEmpty,
    ConfirmDeleteTask(String),

    // === INPUT MESSAGES ===
    EmptyName,
    InvalidPrice(String),
    InvalidId(String),
    ImageReadFailed(String, String), // path, error
    OperationCancelled,

    // === DATABASE MESSAGES ===
    DatabaseOpening(String), // path
    DatabaseResetting,
    DatabaseReset,
    DatabaseCloseFailed(String), // error
    ConfirmDatabaseReset,
    SchemaCreated(u32),
    SchemaUpToDate(u32),
    SchemaUpgradeDiscardingData(u32, u32), // from, to
    SchemaUpgraded(u32, u32),              // from, to
    SchemaVersion {
        stored: u32,
        expected: u32,
    },

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigPromptFileName,
    ConfigPromptUpgradePolicy,

    // === EXPORT MESSAGES ===
    ExportSuccess(String), // path
}
