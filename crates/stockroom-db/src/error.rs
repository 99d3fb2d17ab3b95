//! # Database Error Types
//!
//! Error types for storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                              │
//! │                                                                     │
//! │  SQLite Error (sqlx::Error)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  DbError (this module) ← Categorized by failure stage               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Caller layer ← Adds operation context, maps to user messages       │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure surfaces as an explicit error value. This layer performs
//! no retries and no fallback: it is a pass-through of the storage
//! engine's failure modes, categorized into the stages below.

use std::time::Duration;

use thiserror::Error;

/// Storage operation errors.
///
/// These errors wrap sqlx errors and categorize them by the stage of the
/// operation that failed: producing a runnable statement, executing it,
/// decoding its rows, or waiting on its deadline.
#[derive(Debug, Error)]
pub enum DbError {
    /// The storage handle cannot produce a runnable statement.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - Connection lost before the statement was issued
    /// - Pool is closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The statement ran but was rejected by the engine.
    ///
    /// ## When This Occurs
    /// - Runtime SQL error
    /// - Connectivity loss mid-call
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A result row could not be decoded into the target record.
    ///
    /// ## When This Occurs
    /// - A column holds a value of an unexpected storage class
    /// - The result shape does not match the record's fields
    #[error("Row scan failed: {0}")]
    ScanFailed(String),

    /// A deadline-bound read was canceled before the engine responded.
    ///
    /// ## When This Occurs
    /// - The supplied deadline elapsed mid-query
    /// - The deadline was already expired when the call was made
    #[error("Query canceled: deadline of {0:?} elapsed")]
    Canceled(Duration),

    /// Unique constraint violation.
    #[error("Duplicate value for {field}")]
    UniqueViolation { field: String },

    /// Foreign key constraint violation.
    ///
    /// ## When This Occurs
    /// - Assigning a product to a non-existent warehouse
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::ColumnDecode / Decode / ColumnNotFound → DbError::ScanFailed
/// sqlx::Error::Database       → Analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed/Io  → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::TypeNotFound { .. } => DbError::ScanFailed(err.to_string()),

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite error messages for constraints:
                // UNIQUE constraint: "UNIQUE constraint failed: <table>.<column>"
                // FK constraint: "FOREIGN KEY constraint failed"
                if msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    DbError::UniqueViolation { field }
                } else if msg.contains("FOREIGN KEY constraint failed") {
                    DbError::ForeignKeyViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            sqlx::Error::Io(io_err) => DbError::ConnectionFailed(io_err.to_string()),

            sqlx::Error::Configuration(conf_err) => DbError::ConnectionFailed(conf_err.to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for storage operations.
pub type DbResult<T> = Result<T, DbError>;
