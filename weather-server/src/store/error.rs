//! Local station store error types.

/// Errors that can occur when reading or writing the local store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// SQLite statement or connection failed
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A stored row could not be turned back into a station
    #[error("invalid stored row: {message}")]
    InvalidRow { message: String },

    /// Filesystem operation around the database file failed
    #[error("store I/O error: {message}")]
    Io { message: String },

    /// Another thread panicked while holding the connection
    #[error("store connection lock poisoned")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StoreError::InvalidRow {
            message: "missing required field: state".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid stored row: missing required field: state"
        );
        assert_eq!(
            StoreError::Poisoned.to_string(),
            "store connection lock poisoned"
        );
    }
}
