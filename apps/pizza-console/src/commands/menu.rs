//! # Menu Commands
//!
//! Viewing and editing the pizza menu from the shell.
//!
//! ## Menu Management Screen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  === Pizza Menu Management ===                                          │
//! │  1. View Pizza Menu          ──► print_menu()                           │
//! │  2. Add New Pizza Type       ──► add_pizza()     ──► save              │
//! │  3. Remove Pizza Type        ──► remove_pizza()  ──► save              │
//! │  4. Toggle Availability      ──► toggle_pizza()  ──► save              │
//! │  5. Back to Main Menu                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every successful change is saved immediately. A failed save prints a
//! warning and the in-memory menu stays as edited.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use pizza_core::MenuStore;
use tracing::debug;

use crate::commands::recover;
use crate::error::AppResult;
use crate::prompt::Prompter;
use crate::state::{Session, ShellConfig};

/// Renders the numbered menu table.
///
/// ```text
/// === Pizza Menu ===
/// ID  Pizza Name                Price      Available
/// --------------------------------------------------
/// 1   Margherita                €10.00     Yes
/// ```
pub fn menu_table(menu: &MenuStore, config: &ShellConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== Pizza Menu ===");
    let _ = writeln!(
        out,
        "{:<3} {:<25} {:<10} {:<10}",
        "ID", "Pizza Name", "Price", "Available"
    );
    let _ = writeln!(out, "{}", "-".repeat(50));

    for (index, entry) in menu.iter().enumerate() {
        let available = if entry.is_available() { "Yes" } else { "No" };
        let _ = writeln!(
            out,
            "{:<3} {:<25} {:<10} {}",
            index + 1,
            entry.name(),
            config.format_currency(entry.price()),
            available
        );
    }

    out
}

/// Prints the menu table.
pub fn print_menu<R: BufRead, W: Write>(
    session: &Session,
    io: &mut Prompter<R, W>,
) -> AppResult<()> {
    io.say(menu_table(session.menu(), session.config()))
}

/// Runs the management sub-menu until the user picks "Back".
pub fn manage_menu<R: BufRead, W: Write>(
    session: &mut Session,
    io: &mut Prompter<R, W>,
) -> AppResult<()> {
    loop {
        io.say("\n=== Pizza Menu Management ===")?;
        io.say("1. View Pizza Menu")?;
        io.say("2. Add New Pizza Type")?;
        io.say("3. Remove Pizza Type")?;
        io.say("4. Toggle Pizza Availability")?;
        io.say("5. Back to Main Menu")?;

        let result = match io.choice("Choose an option (1-5): ", 1, 5)? {
            1 => print_menu(session, io),
            2 => add_pizza(session, io),
            3 => remove_pizza(session, io),
            4 => toggle_pizza(session, io),
            _ => return Ok(()),
        };
        recover(io, result)?;
    }
}

/// Asks for a name and a price and adds the pizza.
pub fn add_pizza<R: BufRead, W: Write>(
    session: &mut Session,
    io: &mut Prompter<R, W>,
) -> AppResult<()> {
    let name = io.read_line("Enter pizza name: ")?;
    let name = name.trim();
    if name.is_empty() {
        return io.say("Error: Pizza name cannot be empty.");
    }

    let price_prompt = format!("Enter price ({}): ", session.config().currency_symbol);
    let price = io.read_line(&price_prompt)?;

    let added = session.menu_mut().add(name, &price)?.name().to_string();
    debug!(pizza = %added, "Pizza added from shell");
    io.say(format!("Pizza type '{added}' added successfully!"))?;

    save_after_change(session, io)
}

/// Shows the menu, asks for a name and removes that pizza.
pub fn remove_pizza<R: BufRead, W: Write>(
    session: &mut Session,
    io: &mut Prompter<R, W>,
) -> AppResult<()> {
    print_menu(session, io)?;
    if session.menu().is_empty() {
        return io.say("No pizzas to remove.");
    }

    let name = io.read_line("Enter pizza name to remove: ")?;
    let name = name.trim();
    if name.is_empty() {
        return io.say("Error: Pizza name cannot be empty.");
    }

    let removed = session.menu_mut().remove(name)?;
    io.say(format!("Pizza type '{}' removed successfully!", removed.name()))?;

    save_after_change(session, io)
}

/// Shows the menu, asks for a name and flips its availability.
pub fn toggle_pizza<R: BufRead, W: Write>(
    session: &mut Session,
    io: &mut Prompter<R, W>,
) -> AppResult<()> {
    print_menu(session, io)?;
    if session.menu().is_empty() {
        return io.say("No pizzas to update.");
    }

    let name = io.read_line("Enter pizza name to toggle: ")?;
    let name = name.trim();
    if name.is_empty() {
        return io.say("Error: Pizza name cannot be empty.");
    }

    let entry = session.menu_mut().toggle_availability(name)?;
    let state = if entry.is_available() {
        "available"
    } else {
        "unavailable"
    };
    let message = format!("Pizza '{}' is now {state}.", entry.name());
    io.say(message)?;

    save_after_change(session, io)
}

fn save_after_change<R: BufRead, W: Write>(
    session: &Session,
    io: &mut Prompter<R, W>,
) -> AppResult<()> {
    if !session.save_or_warn() {
        io.say("Warning: Could not save menu to file.")?;
    }
    Ok(())
}
