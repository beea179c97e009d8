//! # pizza-core: Pure Business Logic for the Pizza Menu
//!
//! This crate holds the menu catalog, order building and bill-split
//! arithmetic as plain functions and values with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Pizza Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 pizza-console (shell + legacy CLI)              │   │
//! │  │    Main menu ──► Manage menu ──► Build order ──► Bill split    │   │
//! │  └──────────────┬──────────────────────────────────┬───────────────┘   │
//! │                 │                                  │                    │
//! │  ┌──────────────▼────────────────┐                 │                    │
//! │  │   pizza-store (JSON file)     │                 │                    │
//! │  │   path gate, load, save       │                 │                    │
//! │  └──────────────┬────────────────┘                 │                    │
//! │                 │                                  │                    │
//! │  ┌──────────────▼──────────────────────────────────▼───────────────┐   │
//! │  │               ★ pizza-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   order   │  │ validation│  │   │
//! │  │   │   Entry   │  │   Money   │  │   Order   │  │   rules   │  │   │
//! │  │   │   menu    │  │  quantize │  │ OrderLine │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO CONSOLE • NO NETWORK                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer cents and decimal parsing
//! - [`types`] - The validated catalog entry
//! - [`menu`] - The ordered, capped menu store
//! - [`order`] - Order lines, totals and the bill split
//! - [`validation`] - Input rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pizza_core::{MenuStore, Order};
//!
//! let mut menu = MenuStore::new();
//! menu.add("Margherita", "10.00").unwrap();
//! menu.add("Pepperoni", "12.50").unwrap();
//!
//! let mut order = Order::new();
//! order.add_line(menu.get_by_position(1).unwrap(), 2).unwrap();
//! order.add_line(menu.get_by_position(2).unwrap(), 1).unwrap();
//! order.set_party_count(3).unwrap();
//!
//! assert_eq!(order.total().to_string(), "32.50");
//! assert_eq!(order.cost_per_person().unwrap().to_string(), "10.83");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, MoneyError, MoneyResult, ValidationError};
pub use menu::{MenuStore, ReplaceReport, DEFAULT_MENU};
pub use money::Money;
pub use order::{BillSplit, Order, OrderLine, OrderSummary};
pub use types::PizzaCatalogEntry;
pub use validation::ValidationResult;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum characters in a pizza name (after trimming).
pub const MAX_PIZZA_NAME_LENGTH: usize = 50;

/// Maximum number of entries on the menu.
pub const MAX_PIZZA_TYPES: usize = 20;

/// Cheapest allowed price (0.01).
pub const MIN_PRICE: Money = Money::from_cents(1);

/// Most expensive allowed price (999.99).
pub const MAX_PRICE: Money = Money::from_cents(99_999);

/// Maximum quantity of one pizza in a single order line.
///
/// ## Business Reason
/// Catches typos such as 10000 instead of 10.
pub const MAX_QUANTITY: i64 = 1000;

/// Maximum number of people a bill can be split between.
pub const MAX_PARTY_COUNT: i64 = 1000;
