use thiserror::Error;

/// Errors produced by the persistence store.
///
/// "No matching row" is kept apart from engine failures so callers can treat
/// a missing record as an ordinary outcome.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },

    #[error("price must be a finite number, got {0}")]
    InvalidPrice(f64),

    #[error("database schema version {found} does not match expected version {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("failed to prepare database location: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// SQLite stores NaN as NULL, so a non-finite price would not read back.
pub(crate) fn check_price(price: f64) -> Result<f64, StoreError> {
    if !price.is_finite() {
        return Err(StoreError::InvalidPrice(price));
    }
    Ok(price)
}

/// Turns an affected-row count into `NotFound` when nothing matched.
pub(crate) fn expect_rows(changed: usize, entity: &'static str, key: impl ToString) -> Result<usize, StoreError> {
    if changed == 0 {
        return Err(StoreError::NotFound {
            entity,
            key: key.to_string(),
        });
    }
    Ok(changed)
}
