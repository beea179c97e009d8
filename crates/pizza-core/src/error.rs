//! # Error Types
//!
//! Domain-specific error types for pizza-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pizza-core errors (this file)                                         │
//! │  ├── CoreError        - Menu / order rule violations                   │
//! │  ├── ValidationError  - Input validation failures (closed set)         │
//! │  └── MoneyError       - Parsing and arithmetic failures                │
//! │                                                                         │
//! │  pizza-store errors (separate crate)                                   │
//! │  └── StoreError       - Path gate, load and save failures              │
//! │                                                                         │
//! │  pizza-console errors (in app)                                         │
//! │  └── AppError         - What the shell reports before re-prompting     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → printed message        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant names exactly one violated rule
//! 3. Errors are enum variants, never String
//! 4. Display text is what the shell prints after "Error: "

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Menu and order rule violations.
///
/// All of these are recoverable: the shell prints the message and carries on
/// with the session.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No catalog entry matches the requested name.
    #[error("Pizza type '{0}' not found")]
    PizzaNotFound(String),

    /// The entry exists but is currently switched off.
    ///
    /// ## When This Occurs
    /// ```text
    /// Menu: Hawaiian (available = false)
    ///      │
    ///      ▼
    /// order.add_line(&hawaiian, 2)
    ///      │
    ///      ▼
    /// PizzaUnavailable("Hawaiian")  → order untouched
    /// ```
    #[error("Pizza '{0}' is not available")]
    PizzaUnavailable(String),

    /// Adding the line would exceed the order accumulator.
    #[error("Order total would overflow")]
    OrderOverflow,

    /// The operation needs state that has not been provided yet.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Money error (wraps MoneyError).
    #[error(transparent)]
    Money(#[from] MoneyError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// A closed set so that callers can match exhaustively on the violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is empty after trimming.
    #[error("Pizza name cannot be empty")]
    EmptyName,

    /// Name is longer than the allowed character count.
    #[error("Pizza name too long (max {max} chars)")]
    NameTooLong { max: usize },

    /// Name contains a character outside letters, digits, space, `-'&.`
    #[error("Pizza name contains invalid characters")]
    InvalidNameCharacters,

    /// Price text is not a decimal number.
    #[error("Invalid price format: '{input}'")]
    InvalidPriceFormat { input: String },

    /// Price is outside the inclusive catalog range.
    #[error("Price must be between {min} and {max}")]
    PriceOutOfRange { min: Money, max: Money },

    /// Quantity is zero or negative.
    #[error("Quantity must be positive")]
    InvalidQuantity,

    /// Quantity exceeds the per-line maximum.
    #[error("Quantity too large (max {max})")]
    QuantityTooLarge { max: i64 },

    /// Party size is zero or negative.
    #[error("Number of people must be positive")]
    InvalidPartyCount,

    /// Party size exceeds the maximum.
    #[error("Too many people (max {max})")]
    PartyCountTooLarge { max: i64 },

    /// A case-insensitive match already exists on the menu.
    #[error("Pizza type '{name}' already exists")]
    DuplicateName { name: String },

    /// The menu is full.
    #[error("Maximum number of pizza types ({max}) reached")]
    CapacityExceeded { max: usize },

    /// A persisted entry is missing a field or has the wrong JSON type.
    #[error("Malformed menu entry: {reason}")]
    MalformedEntry { reason: String },
}

// =============================================================================
// Money Error
// =============================================================================

/// Money parsing and arithmetic failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Text could not be parsed as a base-10 number.
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    /// Result does not fit the cent accumulator.
    #[error("Amount overflow")]
    AmountOverflow,

    /// Split requested among zero parts.
    #[error("Division by zero")]
    DivisionByZero,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with MoneyError.
pub type MoneyResult<T> = Result<T, MoneyError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::PizzaUnavailable("Hawaiian".to_string());
        assert_eq!(err.to_string(), "Pizza 'Hawaiian' is not available");

        let err = CoreError::PizzaNotFound("Calzone".to_string());
        assert_eq!(err.to_string(), "Pizza type 'Calzone' not found");
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::NameTooLong { max: 50 }.to_string(),
            "Pizza name too long (max 50 chars)"
        );

        let err = ValidationError::PriceOutOfRange {
            min: Money::from_cents(1),
            max: Money::from_cents(99_999),
        };
        assert_eq!(err.to_string(), "Price must be between 0.01 and 999.99");

        assert_eq!(
            ValidationError::CapacityExceeded { max: 20 }.to_string(),
            "Maximum number of pizza types (20) reached"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::EmptyName.into();
        assert!(matches!(
            core_err,
            CoreError::Validation(ValidationError::EmptyName)
        ));
        // transparent: no "Validation error:" prefix
        assert_eq!(core_err.to_string(), "Pizza name cannot be empty");
    }

    #[test]
    fn test_money_converts_to_core_error() {
        let core_err: CoreError = MoneyError::DivisionByZero.into();
        assert!(matches!(core_err, CoreError::Money(MoneyError::DivisionByZero)));
    }
}
