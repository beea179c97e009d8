//! # Session State
//!
//! The menu owned by the shell for the whole process, plus where it is
//! saved.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Session::load()                                                        │
//! │       │                                                                 │
//! │       ├── file loaded with ≥ 1 valid entry ──► Startup::Loaded         │
//! │       │                                                                 │
//! │       └── missing / unsafe path / unreadable / no valid entries         │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │           seed defaults, save ──────────────► Startup::Seeded          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pizza_core::MenuStore;
use pizza_store::{LoadOutcome, MenuRepository, StoreResult};
use tracing::warn;

use crate::error::AppResult;
use crate::state::ShellConfig;

/// What happened while loading the menu at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Startup {
    /// Menu came from the file.
    Loaded { entries: usize, skipped: usize },

    /// Defaults were seeded; `saved` tells whether writing them worked.
    Seeded { reason: String, saved: bool },
}

/// Menu plus configuration for one shell run.
#[derive(Debug)]
pub struct Session {
    menu: MenuStore,
    config: ShellConfig,
}

impl Session {
    /// Creates a session with an empty menu.
    pub fn new(config: ShellConfig) -> Self {
        Session {
            menu: MenuStore::new(),
            config,
        }
    }

    pub fn menu(&self) -> &MenuStore {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut MenuStore {
        &mut self.menu
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Opens the configured menu file through the path gate.
    pub fn repository(&self) -> StoreResult<MenuRepository> {
        MenuRepository::open(&self.config.home, &self.config.menu_file)
    }

    /// Loads the menu, falling back to the default catalog.
    pub fn load(&mut self) -> Startup {
        let outcome = self
            .repository()
            .and_then(|repo| repo.load_into(&mut self.menu));

        let reason = match outcome {
            Ok(LoadOutcome::Loaded { entries, skipped }) => {
                return Startup::Loaded { entries, skipped };
            }
            Ok(LoadOutcome::Missing) => "menu file not found".to_string(),
            Ok(LoadOutcome::NoValidEntries { skipped }) => {
                format!("menu file has no valid entries ({skipped} skipped)")
            }
            Err(err) => {
                warn!(error = %err, "Could not load menu");
                err.to_string()
            }
        };

        self.menu = MenuStore::with_defaults();
        let saved = self.save_or_warn();
        Startup::Seeded { reason, saved }
    }

    /// Writes the menu to the configured file.
    pub fn save(&self) -> AppResult<()> {
        self.repository()?.save(&self.menu)?;
        Ok(())
    }

    /// Saves, logging a failure instead of returning it.
    pub fn save_or_warn(&self) -> bool {
        match self.save() {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "Could not save menu");
                false
            }
        }
    }
}
