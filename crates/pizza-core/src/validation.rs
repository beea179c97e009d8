//! # Validation Module
//!
//! Input validation for menu entries and orders.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell (pizza-console)                                        │
//! │  ├── Line length cap, integer parsing, numeric menu ranges             │
//! │  └── Re-prompts on bad input                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Name rules (length, character class)                              │
//! │  ├── Price rules (format, inclusive range)                             │
//! │  └── Quantity / party size / capacity                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Load path (pizza-store)                                      │
//! │  └── Every persisted entry goes back through Layer 2                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizza_core::validation::{validate_name, validate_price, validate_quantity};
//!
//! assert_eq!(validate_name("  Margherita ").unwrap(), "Margherita");
//! assert_eq!(validate_price("10").unwrap().to_string(), "10.00");
//! assert!(validate_quantity(0).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::{parse_decimal_exact, Money};
use crate::{
    MAX_PARTY_COUNT, MAX_PIZZA_NAME_LENGTH, MAX_PIZZA_TYPES, MAX_PRICE, MAX_QUANTITY, MIN_PRICE,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a pizza name and returns the trimmed form.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 50 characters
/// - Only ASCII letters, digits, space, hyphen, apostrophe, ampersand, period
///
/// ## Example
/// ```rust
/// use pizza_core::validation::validate_name;
///
/// assert!(validate_name("Quattro Stagioni").is_ok());
/// assert!(validate_name("Mac & Cheese").is_ok());
/// assert!(validate_name("").is_err());
/// assert!(validate_name("<script>").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if name.chars().count() > MAX_PIZZA_NAME_LENGTH {
        return Err(ValidationError::NameTooLong {
            max: MAX_PIZZA_NAME_LENGTH,
        });
    }

    if !name.chars().all(is_name_char) {
        return Err(ValidationError::InvalidNameCharacters);
    }

    Ok(name.to_string())
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '\'' | '&' | '.')
}

// =============================================================================
// Price Validators
// =============================================================================

/// Parses and validates a price, returning it quantized.
///
/// The range check runs on the exact decimal before rounding, so `0.005`
/// and `999.994` are both rejected.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Menu: Add Pizza Type                                                   │
/// │                                                                         │
/// │  User enters price: "12.5"                                             │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_price("12.5") ← THIS FUNCTION                                │
/// │       │                                                                 │
/// │       ├── not a number?   → InvalidPriceFormat                         │
/// │       ├── < 0.01 / > 999.99? → PriceOutOfRange                          │
/// │       │                                                                 │
/// │       └── OK → Money 12.50                                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_price(text: &str) -> ValidationResult<Money> {
    let amount = parse_decimal_exact(text).map_err(|_| ValidationError::InvalidPriceFormat {
        input: text.trim().to_string(),
    })?;

    // Digits past the truncation push the value just above `truncated`.
    if amount.has_remainder && amount.truncated == MAX_PRICE.to_decimal() {
        return Err(price_out_of_range());
    }

    validate_price_decimal(amount.truncated)
}

/// Validates an already-parsed decimal price.
pub fn validate_price_decimal(amount: Decimal) -> ValidationResult<Money> {
    if amount < MIN_PRICE.to_decimal() || amount > MAX_PRICE.to_decimal() {
        return Err(price_out_of_range());
    }

    // In range, so it cannot overflow the cent accumulator.
    Money::from_decimal(amount).map_err(|_| price_out_of_range())
}

/// Validates a price that is already Money.
pub fn validate_price_amount(price: Money) -> ValidationResult<Money> {
    if price < MIN_PRICE || price > MAX_PRICE {
        return Err(price_out_of_range());
    }
    Ok(price)
}

fn price_out_of_range() -> ValidationError {
    ValidationError::PriceOutOfRange {
        min: MIN_PRICE,
        max: MAX_PRICE,
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an order line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_QUANTITY (1000)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::InvalidQuantity);
    }

    if qty > MAX_QUANTITY {
        return Err(ValidationError::QuantityTooLarge { max: MAX_QUANTITY });
    }

    Ok(())
}

/// Validates the number of people splitting the bill.
pub fn validate_party_count(people: i64) -> ValidationResult<()> {
    if people <= 0 {
        return Err(ValidationError::InvalidPartyCount);
    }

    if people > MAX_PARTY_COUNT {
        return Err(ValidationError::PartyCountTooLarge {
            max: MAX_PARTY_COUNT,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that one more entry fits on the menu.
pub fn validate_menu_capacity(current_entries: usize) -> ValidationResult<()> {
    if current_entries >= MAX_PIZZA_TYPES {
        return Err(ValidationError::CapacityExceeded {
            max: MAX_PIZZA_TYPES,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
