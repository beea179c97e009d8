//! # Domain Types
//!
//! The catalog entry and its persisted record form.
//!
//! ## Entry Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      PizzaCatalogEntry                                  │
//! │                                                                         │
//! │   user input ──► create(name, "12.50") ──┐                              │
//! │                                          ├──► Entry (immutable)         │
//! │   JSON object ──► from_json(value) ──────┘        │                     │
//! │                   (re-validated)                  │                     │
//! │                                                   ▼                     │
//! │                            with_availability / with_price               │
//! │                            (replacement, never mutation)                │
//! │                                                   │                     │
//! │                                                   ▼                     │
//! │                                 to_json() ──► {name, price, available}  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Two entries are "the same pizza" when their names match case-insensitively
//! ([`PizzaCatalogEntry::matches_name`]). Derived `PartialEq` compares every
//! field and is what round-trip tests use.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_name, validate_price, validate_price_amount, ValidationResult};

// =============================================================================
// Pizza Catalog Entry
// =============================================================================

/// One named, priced menu item.
///
/// Fields are private: the only way to obtain an entry is through a
/// validating constructor, so every live entry satisfies the name and price
/// rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogRecord")]
pub struct PizzaCatalogEntry {
    name: String,
    price: Money,
    available: bool,
}

impl PizzaCatalogEntry {
    /// Creates an entry from user-supplied text.
    ///
    /// ## Example
    /// ```rust
    /// use pizza_core::PizzaCatalogEntry;
    ///
    /// let entry = PizzaCatalogEntry::create(" Margherita ", "10", true).unwrap();
    /// assert_eq!(entry.name(), "Margherita");
    /// assert_eq!(entry.price().to_string(), "10.00");
    ///
    /// assert!(PizzaCatalogEntry::create("Margherita", "0", true).is_err());
    /// ```
    pub fn create(name: &str, price: &str, available: bool) -> ValidationResult<Self> {
        let name = validate_name(name)?;
        let price = validate_price(price)?;
        Ok(PizzaCatalogEntry {
            name,
            price,
            available,
        })
    }

    /// Creates an entry from an already-parsed price.
    pub fn new(name: &str, price: Money, available: bool) -> ValidationResult<Self> {
        let name = validate_name(name)?;
        let price = validate_price_amount(price)?;
        Ok(PizzaCatalogEntry {
            name,
            price,
            available,
        })
    }

    /// Display name (trimmed).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price, quantized.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Whether the pizza can currently be ordered.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Case-insensitive, trimmed name comparison.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    /// Returns a copy with a different availability flag.
    pub fn with_availability(&self, available: bool) -> Self {
        PizzaCatalogEntry {
            available,
            ..self.clone()
        }
    }

    /// Returns a copy with a different (validated) price.
    pub fn with_price(&self, price: Money) -> ValidationResult<Self> {
        Ok(PizzaCatalogEntry {
            price: validate_price_amount(price)?,
            ..self.clone()
        })
    }

    /// Serializes to the persisted object form.
    ///
    /// ```rust
    /// use pizza_core::PizzaCatalogEntry;
    ///
    /// let entry = PizzaCatalogEntry::create("Hawaiian", "13", false).unwrap();
    /// let value = entry.to_json();
    /// assert_eq!(value["price"], "13.00");
    /// assert_eq!(value["available"], false);
    /// ```
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "price": self.price.to_string(),
            "available": self.available,
        })
    }

    /// Deserializes one persisted object, re-validating every field.
    ///
    /// Hand-edited files are not trusted: a structurally valid object with a
    /// bad name or price is rejected with the specific rule it breaks.
    pub fn from_json(value: Value) -> ValidationResult<Self> {
        let record: CatalogRecord =
            serde_json::from_value(value).map_err(|err| ValidationError::MalformedEntry {
                reason: err.to_string(),
            })?;
        PizzaCatalogEntry::try_from(record)
    }
}

// =============================================================================
// Catalog Record
// =============================================================================

/// Unvalidated shape of one persisted entry.
///
/// `price` is normally a string (`"12.50"`); plain JSON numbers are accepted
/// for hand-written files. `available` defaults to `true`.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    pub name: String,
    pub price: PriceField,
    #[serde(default = "default_available")]
    pub available: bool,
}

/// Price as it appears in a JSON document.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PriceField {
    Text(String),
    Number(serde_json::Number),
}

fn default_available() -> bool {
    true
}

impl TryFrom<CatalogRecord> for PizzaCatalogEntry {
    type Error = ValidationError;

    fn try_from(record: CatalogRecord) -> Result<Self, Self::Error> {
        let name = validate_name(&record.name)?;
        let price = match record.price {
            PriceField::Text(text) => validate_price(&text)?,
            PriceField::Number(number) => validate_price(&number.to_string())?,
        };

        Ok(PizzaCatalogEntry {
            name,
            price,
            available: record.available,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
