//! # App Error Type
//!
//! Unified error type for shell commands and the legacy calculator.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Source                    AppError variant        Shell reaction       │
//! │  ──────                    ────────────────        ──────────────       │
//! │  ValidationError ────────► Validation ───────────► "Error: ..." + loop │
//! │  CoreError ──────────────► Core ─────────────────► "Error: ..." + loop │
//! │  StoreError ─────────────► Store ────────────────► "Warning: ..."      │
//! │  line > 1000 chars ──────► InputTooLong ─────────► re-prompt           │
//! │  bad CLI argument ───────► InvalidArgument ──────► stderr, exit 1      │
//! │  stdin closed ───────────► InputTerminated ──────► exit 0              │
//! │  stdout broken ──────────► Io ───────────────────► exit 1              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pizza_core::{CoreError, ValidationError};
use pizza_store::StoreError;
use thiserror::Error;

/// Errors surfaced by the console layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// A command-line argument failed validation.
    #[error("{0}")]
    InvalidArgument(String),

    /// One input line exceeded the cap.
    #[error("Input too long (max {max} characters)")]
    InputTooLong { max: usize },

    /// Standard input reached end-of-file.
    #[error("Input terminated.")]
    InputTerminated,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        AppError::InvalidArgument(message.into())
    }

    /// True for errors that end the session instead of returning to a menu.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::InputTerminated | AppError::Io(_))
    }
}

/// Result type for console operations.
pub type AppResult<T> = Result<T, AppError>;
