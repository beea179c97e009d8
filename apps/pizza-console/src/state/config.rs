//! # Shell Configuration
//!
//! Settings resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--menu-file`, `--home`)
//! 2. Environment variables (`PIZZA_*`)
//! 3. Defaults (this file)
//!
//! Read-only after startup.

use std::path::PathBuf;

use pizza_core::Money;
use pizza_store::DEFAULT_MENU_PATH;
use serde::Serialize;

/// Environment variable naming the menu file (relative, under `data/`).
pub const ENV_MENU_FILE: &str = "PIZZA_MENU_FILE";

/// Environment variable naming the directory the menu path is resolved in.
pub const ENV_HOME: &str = "PIZZA_HOME";

/// Environment variable overriding the currency symbol.
pub const ENV_CURRENCY_SYMBOL: &str = "PIZZA_CURRENCY_SYMBOL";

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    /// Menu file, relative to `home`. Checked by the path gate on use.
    pub menu_file: PathBuf,

    /// Root directory for the menu file.
    pub home: PathBuf,

    /// Currency symbol (for display)
    pub currency_symbol: String,
}

impl Default for ShellConfig {
    /// Menu at `./data/pizza_menu.json`, prices in euro.
    fn default() -> Self {
        ShellConfig {
            menu_file: PathBuf::from(DEFAULT_MENU_PATH),
            home: PathBuf::from("."),
            currency_symbol: "€".to_string(),
        }
    }
}

impl ShellConfig {
    /// Creates a ShellConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PIZZA_MENU_FILE`: Override the menu file path
    /// - `PIZZA_HOME`: Override the root directory
    /// - `PIZZA_CURRENCY_SYMBOL`: Override the currency symbol
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ShellConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ShellConfig::default();

        if let Some(menu_file) = lookup(ENV_MENU_FILE).filter(|v| !v.trim().is_empty()) {
            config.menu_file = PathBuf::from(menu_file.trim());
        }

        if let Some(home) = lookup(ENV_HOME).filter(|v| !v.trim().is_empty()) {
            config.home = PathBuf::from(home);
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Applies command-line overrides on top of the current values.
    pub fn with_overrides(mut self, menu_file: Option<PathBuf>, home: Option<PathBuf>) -> Self {
        if let Some(menu_file) = menu_file {
            self.menu_file = menu_file;
        }
        if let Some(home) = home {
            self.home = home;
        }
        self
    }

    /// Formats an amount with the currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use pizza_console::state::ShellConfig;
    /// use pizza_core::Money;
    ///
    /// let config = ShellConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1083)), "€10.83");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.cents() < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency_symbol,
            amount.units().abs(),
            amount.cents_part()
        )
    }
}
