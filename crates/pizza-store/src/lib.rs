//! # pizza-store: Menu File Persistence
//!
//! Moves the [`pizza_core::MenuStore`] to and from a JSON file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Menu Data Flow                                   │
//! │                                                                         │
//! │  Shell startup / menu change / exit                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   pizza-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────────────────────────┐   │   │
//! │  │   │  Path gate    │    │  MenuRepository                   │   │   │
//! │  │   │  (path.rs)    │───►│  (repository.rs)                  │   │   │
//! │  │   │               │    │                                   │   │   │
//! │  │   │ data/ only    │    │ load_into: size cap, per-entry    │   │   │
//! │  │   │ no "..", no / │    │            validation             │   │   │
//! │  │   │               │    │ save:      temp file + rename     │   │   │
//! │  │   └───────────────┘    └───────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <root>/data/pizza_menu.json                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`path`] - Path safety gate
//! - [`repository`] - Load and save
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pizza_core::MenuStore;
//! use pizza_store::{LoadOutcome, MenuRepository, DEFAULT_MENU_PATH};
//!
//! # fn main() -> pizza_store::StoreResult<()> {
//! let repo = MenuRepository::open(".", DEFAULT_MENU_PATH)?;
//! let mut menu = MenuStore::new();
//!
//! match repo.load_into(&mut menu)? {
//!     LoadOutcome::Loaded { entries, .. } => println!("Loaded {entries} pizzas"),
//!     LoadOutcome::Missing | LoadOutcome::NoValidEntries { .. } => {
//!         menu.seed_defaults();
//!         repo.save(&menu)?;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod path;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use path::{validate_menu_path, DEFAULT_MENU_PATH, MENU_DIR};
pub use repository::{load_menu, save_menu, LoadOutcome, MenuRepository, MAX_MENU_FILE_BYTES};
