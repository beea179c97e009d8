//! # Store Error Types
//!
//! Error types for menu file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the path and categorization           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in console app)                                             │
//! │       │                                                                 │
//! │       ├── on load: fall back to the default menu                       │
//! │       └── on save: print a warning, keep in-memory state               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Menu file operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The path failed the safety gate. Nothing was read or written.
    ///
    /// ## When This Occurs
    /// - Absolute path (`/etc/passwd`)
    /// - Any `..` segment (`data/../secret.json`)
    /// - Not under `data/` (`menu.json`)
    #[error("Unsafe menu path '{path}': {reason}")]
    UnsafePath { path: String, reason: &'static str },

    /// The file is bigger than the read cap.
    #[error("Menu file too large ({size} bytes, max {max})")]
    FileTooLarge { size: u64, max: u64 },

    /// The file is not JSON, or its top level is not an array.
    #[error("Invalid menu file format: {0}")]
    InvalidFormat(String),

    /// Reading failed for an I/O reason.
    #[error("Failed to load menu: {0}")]
    LoadFailed(String),

    /// Writing failed. The previous file, if any, is intact.
    #[error("Failed to save menu: {0}")]
    SaveFailed(String),
}

impl StoreError {
    /// Creates an UnsafePath error.
    pub fn unsafe_path(path: impl Into<String>, reason: &'static str) -> Self {
        StoreError::UnsafePath {
            path: path.into(),
            reason,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
