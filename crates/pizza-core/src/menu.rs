//! # Menu Store
//!
//! The in-memory, ordered pizza catalog.
//!
//! ## Invariants
//! - Insertion order is preserved (position 1 is the first entry added)
//! - No two entries share a name, compared case-insensitively
//! - At most [`MAX_PIZZA_TYPES`] entries
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Menu Store Operations                                │
//! │                                                                         │
//! │  Shell Action            Store Call                State Change         │
//! │  ────────────            ──────────                ────────────         │
//! │                                                                         │
//! │  First run ─────────────► seed_defaults() ───────► 6 fixed entries     │
//! │  Add pizza ─────────────► add(name, price) ──────► entries.push(e)     │
//! │  Remove pizza ──────────► remove(name) ──────────► entries.remove(i)   │
//! │  Toggle availability ───► toggle_availability() ─► entries[i] = e'     │
//! │  Pick by number ────────► get_by_position(n) ────► (read only)         │
//! │  File load ─────────────► replace_all(entries) ──► whole catalog       │
//! │                                                                         │
//! │  NOTE: the store does no I/O; pizza-store moves it to and from disk.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::PizzaCatalogEntry;
use crate::validation::{validate_menu_capacity, ValidationResult};
use crate::MAX_PIZZA_TYPES;

/// The fixed first-run catalog.
pub const DEFAULT_MENU: [(&str, &str); 6] = [
    ("Margherita", "10.00"),
    ("Pepperoni", "12.50"),
    ("Hawaiian", "13.00"),
    ("Quattro Stagioni", "14.50"),
    ("Vegetarian", "11.50"),
    ("Meat Lovers", "16.00"),
];

/// Ordered collection of catalog entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuStore {
    entries: Vec<PizzaCatalogEntry>,
}

/// What [`MenuStore::replace_all`] kept and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceReport {
    pub kept: usize,
    pub duplicates: usize,
    pub over_capacity: usize,
}

impl MenuStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MenuStore {
            entries: Vec::new(),
        }
    }

    /// Creates a store holding the default catalog.
    pub fn with_defaults() -> Self {
        let mut store = MenuStore::new();
        store.seed_defaults();
        store
    }

    /// Appends the six default pizzas.
    ///
    /// An entry that fails validation (or already exists) is skipped with a
    /// warning; seeding never fails as a whole.
    pub fn seed_defaults(&mut self) {
        for (name, price) in DEFAULT_MENU {
            if let Err(err) = self.add(name, price) {
                warn!(pizza = name, error = %err, "Could not add default pizza");
            }
        }
    }

    /// Adds a new pizza at the end of the menu.
    ///
    /// ## Checks (in order)
    /// 1. Capacity: `CapacityExceeded` once 20 entries exist
    /// 2. Uniqueness: `DuplicateName` on a case-insensitive match
    /// 3. Entry rules: name and price validation
    pub fn add(&mut self, name: &str, price: &str) -> ValidationResult<&PizzaCatalogEntry> {
        validate_menu_capacity(self.entries.len())?;

        if self.find_by_name(name).is_some() {
            return Err(ValidationError::DuplicateName {
                name: name.trim().to_string(),
            });
        }

        let entry = PizzaCatalogEntry::create(name, price, true)?;
        self.insert(entry)
    }

    /// Adds an already-built entry, applying the same capacity and
    /// uniqueness checks as [`MenuStore::add`].
    pub fn insert(&mut self, entry: PizzaCatalogEntry) -> ValidationResult<&PizzaCatalogEntry> {
        validate_menu_capacity(self.entries.len())?;

        if self.find_by_name(entry.name()).is_some() {
            return Err(ValidationError::DuplicateName {
                name: entry.name().to_string(),
            });
        }

        debug!(pizza = entry.name(), price = %entry.price(), "Adding pizza type");
        self.entries.push(entry);
        let last = self.entries.len() - 1;
        Ok(&self.entries[last])
    }

    /// Removes the entry matching `name`, returning it.
    pub fn remove(&mut self, name: &str) -> CoreResult<PizzaCatalogEntry> {
        let index = self
            .position_of(name)
            .ok_or_else(|| CoreError::PizzaNotFound(name.trim().to_string()))?;

        let removed = self.entries.remove(index);
        debug!(pizza = removed.name(), "Removed pizza type");
        Ok(removed)
    }

    /// Case-insensitive, trimmed lookup.
    pub fn find_by_name(&self, name: &str) -> Option<&PizzaCatalogEntry> {
        self.entries.iter().find(|entry| entry.matches_name(name))
    }

    /// One-based lookup; `None` outside `1..=len`.
    ///
    /// ```rust
    /// use pizza_core::MenuStore;
    ///
    /// let menu = MenuStore::with_defaults();
    /// assert_eq!(menu.get_by_position(1).unwrap().name(), "Margherita");
    /// assert!(menu.get_by_position(0).is_none());
    /// assert!(menu.get_by_position(7).is_none());
    /// ```
    pub fn get_by_position(&self, position: usize) -> Option<&PizzaCatalogEntry> {
        position
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
    }

    /// Replaces the named entry with a copy carrying `available`.
    pub fn set_availability(
        &mut self,
        name: &str,
        available: bool,
    ) -> CoreResult<&PizzaCatalogEntry> {
        let index = self
            .position_of(name)
            .ok_or_else(|| CoreError::PizzaNotFound(name.trim().to_string()))?;

        let replacement = self.entries[index].with_availability(available);
        debug!(pizza = replacement.name(), available, "Changed availability");
        self.entries[index] = replacement;
        Ok(&self.entries[index])
    }

    /// Flips availability of the named entry.
    pub fn toggle_availability(&mut self, name: &str) -> CoreResult<&PizzaCatalogEntry> {
        let available = self
            .find_by_name(name)
            .map(|entry| !entry.is_available())
            .ok_or_else(|| CoreError::PizzaNotFound(name.trim().to_string()))?;
        self.set_availability(name, available)
    }

    /// Replaces the whole catalog, e.g. after loading a file.
    ///
    /// Later case-insensitive duplicates and anything past the capacity are
    /// dropped. An empty input leaves the current catalog untouched.
    pub fn replace_all(&mut self, entries: Vec<PizzaCatalogEntry>) -> ReplaceReport {
        let mut report = ReplaceReport {
            kept: 0,
            duplicates: 0,
            over_capacity: 0,
        };

        if entries.is_empty() {
            report.kept = self.entries.len();
            return report;
        }

        let mut next = MenuStore::new();
        for entry in entries {
            match next.insert(entry) {
                Ok(_) => {}
                Err(ValidationError::DuplicateName { name }) => {
                    warn!(pizza = %name, "Dropping duplicate pizza type");
                    report.duplicates += 1;
                }
                Err(_) => report.over_capacity += 1,
            }
        }

        if report.over_capacity > 0 {
            warn!(
                dropped = report.over_capacity,
                max = MAX_PIZZA_TYPES,
                "Menu exceeds capacity, extra entries dropped"
            );
        }

        report.kept = next.len();
        *self = next;
        report
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the menu is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in menu order.
    pub fn entries(&self) -> &[PizzaCatalogEntry] {
        &self.entries
    }

    /// Iterates entries in menu order.
    pub fn iter(&self) -> std::slice::Iter<'_, PizzaCatalogEntry> {
        self.entries.iter()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.matches_name(name))
    }
}

impl<'a> IntoIterator for &'a MenuStore {
    type Item = &'a PizzaCatalogEntry;
    type IntoIter = std::slice::Iter<'a, PizzaCatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
