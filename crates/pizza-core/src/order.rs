//! # Order
//!
//! One transaction: the pizzas picked from the menu plus how many people
//! share the bill.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Order Operations                                │
//! │                                                                         │
//! │  Shell Action            Order Call                State Change         │
//! │  ────────────            ──────────                ────────────         │
//! │                                                                         │
//! │  Pick pizza + qty ──────► add_line(&entry, q) ───► lines.push(line)    │
//! │                                                    total += subtotal    │
//! │  Enter party size ──────► set_party_count(n) ────► party_count = n     │
//! │  Show result ───────────► split() ───────────────► (read only)         │
//! │                                                                         │
//! │  NOTE: lines are append-only. A failed add_line leaves both the lines  │
//! │        and the running total exactly as they were.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Semantics
//! An [`OrderLine`] copies the pizza name and unit price when it is created.
//! Editing or removing the catalog entry afterwards does not change lines
//! already in the order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::PizzaCatalogEntry;
use crate::validation::{validate_party_count, validate_quantity, ValidationResult};

// =============================================================================
// Order Line
// =============================================================================

/// A pizza and quantity frozen at the moment it was ordered.
///
/// Only [`Order::add_line`] builds lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    /// Pizza name at time of adding (frozen)
    pizza_name: String,

    /// Unit price at time of adding (frozen)
    unit_price: Money,

    quantity: i64,

    subtotal: Money,
}

impl OrderLine {
    /// Builds a line from a catalog entry.
    ///
    /// Validates the quantity and computes the subtotal. Availability is the
    /// order's concern, not the line's.
    pub fn from_entry(entry: &PizzaCatalogEntry, quantity: i64) -> CoreResult<Self> {
        validate_quantity(quantity)?;

        let subtotal = entry
            .price()
            .multiply_by_int(quantity)
            .map_err(|_| CoreError::OrderOverflow)?;

        Ok(OrderLine {
            pizza_name: entry.name().to_string(),
            unit_price: entry.price(),
            quantity,
            subtotal,
        })
    }

    pub fn pizza_name(&self) -> &str {
        &self.pizza_name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price × quantity.
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }
}

// =============================================================================
// Order
// =============================================================================

/// Lines, running total and party size for one bill.
///
/// ## Invariants
/// - `total` always equals the sum of line subtotals
/// - Every line quantity is within 1..=1000
/// - `party_count`, once set, is within 1..=1000
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    lines: Vec<OrderLine>,
    party_count: Option<i64>,
    total: Money,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new empty order.
    pub fn new() -> Self {
        Order {
            lines: Vec::new(),
            party_count: None,
            total: Money::zero(),
            created_at: Utc::now(),
        }
    }

    /// Appends a line for `entry`.
    ///
    /// ## Errors
    /// - `PizzaUnavailable` when the entry is switched off
    /// - `Validation(InvalidQuantity | QuantityTooLarge)` for a bad quantity
    /// - `OrderOverflow` when the running total would pass `Money::MAX`
    ///
    /// On any error the order is unchanged.
    pub fn add_line(
        &mut self,
        entry: &PizzaCatalogEntry,
        quantity: i64,
    ) -> CoreResult<&OrderLine> {
        if !entry.is_available() {
            return Err(CoreError::PizzaUnavailable(entry.name().to_string()));
        }

        let line = OrderLine::from_entry(entry, quantity)?;
        let total = self
            .total
            .checked_add(line.subtotal())
            .map_err(|_| CoreError::OrderOverflow)?;

        debug!(
            pizza = line.pizza_name(),
            quantity,
            subtotal = %line.subtotal(),
            "Added order line"
        );

        self.total = total;
        self.lines.push(line);
        let last = self.lines.len() - 1;
        Ok(&self.lines[last])
    }

    /// Sets how many people share the bill (1..=1000).
    pub fn set_party_count(&mut self, people: i64) -> ValidationResult<()> {
        validate_party_count(people)?;
        self.party_count = Some(people);
        Ok(())
    }

    /// Total divided evenly, rounded to the cent.
    ///
    /// Fails with `InvalidState` until a party count has been set.
    pub fn cost_per_person(&self) -> CoreResult<Money> {
        let people = self
            .party_count
            .ok_or_else(|| CoreError::InvalidState("party count not set".to_string()))?;
        Ok(self.total.divide_by_int(people)?)
    }

    /// Total, party size and per-person share together.
    pub fn split(&self) -> CoreResult<BillSplit> {
        let cost_per_person = self.cost_per_person()?;
        Ok(BillSplit {
            total: self.total,
            party_count: self.party_count.unwrap_or_default(),
            cost_per_person,
        })
    }

    /// Line count, quantity and total.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from(self)
    }

    /// Lines in the order they were added.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities over all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn party_count(&self) -> Option<i64> {
        self.party_count
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drops all lines and the party count, starting a fresh order.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.party_count = None;
        self.total = Money::zero();
        self.created_at = Utc::now();
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Results
// =============================================================================

/// The even split of an order's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillSplit {
    pub total: Money,
    pub party_count: i64,
    pub cost_per_person: Money,
}

impl BillSplit {
    /// Splits `total` between `party_count` people without an order.
    pub fn compute(total: Money, party_count: i64) -> CoreResult<Self> {
        validate_party_count(party_count)?;
        Ok(BillSplit {
            total,
            party_count,
            cost_per_person: total.divide_by_int(party_count)?,
        })
    }
}

/// Order totals summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub line_count: usize,
    pub total_quantity: i64,
    pub total: Money,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        OrderSummary {
            line_count: order.line_count(),
            total_quantity: order.total_quantity(),
            total: order.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::menu::MenuStore;
    use proptest::prelude::*;

    fn pizza(name: &str, price: &str) -> PizzaCatalogEntry {
        PizzaCatalogEntry::create(name, price, true).unwrap()
    }

    #[test]
    fn test_split_scenario() {
        let mut menu = MenuStore::new();
        menu.add("Margherita", "10.00").unwrap();
        menu.add("Pepperoni", "12.50").unwrap();

        let mut order = Order::new();
        order.add_line(menu.find_by_name("Margherita").unwrap(), 2).unwrap();
        order.add_line(menu.find_by_name("Pepperoni").unwrap(), 1).unwrap();
        order.set_party_count(3).unwrap();

        assert_eq!(order.total(), Money::from_cents(3250));
        assert_eq!(order.cost_per_person().unwrap(), Money::from_cents(1083));

        let split = order.split().unwrap();
        assert_eq!(
            split,
            BillSplit {
                total: Money::from_cents(3250),
                party_count: 3,
                cost_per_person: Money::from_cents(1083),
            }
        );
    }

    #[test]
    fn test_unavailable_pizza_leaves_order_unchanged() {
        let mut order = Order::new();
        order.add_line(&pizza("Margherita", "10.00"), 1).unwrap();

        let off = pizza("Hawaiian", "13.00").with_availability(false);
        // availability is checked before the quantity
        for quantity in [1, 5, 1000, 0, -1, 1001] {
            let err = order.add_line(&off, quantity).unwrap_err();
            assert!(matches!(err, CoreError::PizzaUnavailable(ref n) if n == "Hawaiian"));
        }

        assert_eq!(order.line_count(), 1);
        assert_eq!(order.total(), Money::from_cents(1000));
    }

    #[test]
    fn test_invalid_quantity() {
        let mut order = Order::new();
        let margherita = pizza("Margherita", "10.00");

        assert!(matches!(
            order.add_line(&margherita, 0),
            Err(CoreError::Validation(ValidationError::InvalidQuantity))
        ));
        assert!(matches!(
            order.add_line(&margherita, 1001),
            Err(CoreError::Validation(ValidationError::QuantityTooLarge { max: 1000 }))
        ));
        assert!(order.is_empty());
        assert!(order.total().is_zero());
    }

    #[test]
    fn test_overflow_rejected_and_order_unchanged() {
        let mut order = Order::new();
        order.add_line(&pizza("Margherita", "10.00"), 1).unwrap();
        order.total = Money::from_cents(i64::MAX - 500);

        let err = order.add_line(&pizza("Pepperoni", "12.50"), 1).unwrap_err();

        assert!(matches!(err, CoreError::OrderOverflow));
        assert_eq!(order.line_count(), 1);
        assert_eq!(order.total(), Money::from_cents(i64::MAX - 500));
    }

    #[test]
    fn test_lines_are_snapshots() {
        let mut menu = MenuStore::new();
        menu.add("Diavola", "13.00").unwrap();

        let mut order = Order::new();
        order.add_line(menu.find_by_name("Diavola").unwrap(), 2).unwrap();

        menu.remove("Diavola").unwrap();
        menu.add("Diavola", "20.00").unwrap();

        let line = &order.lines()[0];
        assert_eq!(line.pizza_name(), "Diavola");
        assert_eq!(line.unit_price(), Money::from_cents(1300));
        assert_eq!(line.subtotal(), Money::from_cents(2600));
    }

    #[test]
    fn test_order_serializes_for_display() {
        let mut order = Order::new();
        order.add_line(&pizza("Margherita", "10.00"), 2).unwrap();
        order.set_party_count(3).unwrap();

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["total"], "20.00");
        assert_eq!(value["party_count"], 3);
        assert_eq!(value["lines"][0]["pizza_name"], "Margherita");
        assert_eq!(value["lines"][0]["subtotal"], "20.00");
    }

    #[test]
    fn test_same_pizza_twice_appends_lines() {
        let mut order = Order::new();
        let margherita = pizza("Margherita", "10.00");

        order.add_line(&margherita, 2).unwrap();
        order.add_line(&margherita, 3).unwrap();

        assert_eq!(order.line_count(), 2);
        assert_eq!(order.total_quantity(), 5);
        assert_eq!(order.total(), Money::from_cents(5000));
    }

    #[test]
    fn test_cost_per_person_requires_party_count() {
        let mut order = Order::new();
        order.add_line(&pizza("Margherita", "10.00"), 1).unwrap();

        assert!(matches!(
            order.cost_per_person(),
            Err(CoreError::InvalidState(_))
        ));
        assert!(order.split().is_err());

        assert_eq!(
            order.set_party_count(0),
            Err(ValidationError::InvalidPartyCount)
        );
        assert_eq!(
            order.set_party_count(1001),
            Err(ValidationError::PartyCountTooLarge { max: 1000 })
        );
        assert_eq!(order.party_count(), None);
    }

    #[test]
    fn test_summary_and_clear() {
        let mut order = Order::new();
        order.add_line(&pizza("Margherita", "10.00"), 2).unwrap();
        order.add_line(&pizza("Pepperoni", "12.50"), 1).unwrap();
        order.set_party_count(2).unwrap();

        assert_eq!(
            order.summary(),
            OrderSummary {
                line_count: 2,
                total_quantity: 3,
                total: Money::from_cents(3250),
            }
        );

        order.clear();
        assert!(order.is_empty());
        assert!(order.total().is_zero());
        assert_eq!(order.party_count(), None);
    }

    #[test]
    fn test_bill_split_compute() {
        let split = BillSplit::compute(Money::from_cents(3000), 4).unwrap();
        assert_eq!(split.cost_per_person, Money::from_cents(750));

        assert!(BillSplit::compute(Money::from_cents(3000), 0).is_err());
    }

    proptest! {
        #[test]
        fn prop_unavailable_pizza_never_added(
            cents in 1i64..=99_999,
            quantity in any::<i64>(),
            existing in 1i64..=1000,
        ) {
            let mut order = Order::new();
            order.add_line(&pizza("Margherita", "10.00"), existing).unwrap();
            let before = order.total();

            let off = PizzaCatalogEntry::new("Hawaiian", Money::from_cents(cents), false).unwrap();
            let err = order.add_line(&off, quantity).unwrap_err();

            prop_assert!(matches!(err, CoreError::PizzaUnavailable(_)));
            prop_assert_eq!(order.line_count(), 1);
            prop_assert_eq!(order.total(), before);
        }
    }
}
