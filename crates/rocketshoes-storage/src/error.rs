//! # Storage Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← Adds key / path context                  │
//! │       │                                                                 │
//! │       ├── at startup: logged, cart starts empty                        │
//! │       └── on commit: operation's failure notice, cart unchanged        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but is not a JSON object of strings.
    ///
    /// ## When This Occurs
    /// - File truncated by a crash from an older, non-atomic writer
    /// - File edited by hand
    #[error("Storage file {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// The value under a key is not a valid cart.
    #[error("Value under '{key}' is not a valid cart: {reason}")]
    Decode { key: String, reason: String },

    /// The cart could not be serialized.
    #[error("Failed to encode cart: {0}")]
    Encode(String),

    /// The store refused the operation.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Creates a Decode error for a key.
    pub fn decode(key: impl Into<String>, reason: impl ToString) -> Self {
        StorageError::Decode {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
