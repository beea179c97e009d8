//! # Commands Module
//!
//! Shell actions, one function per numbered option.
//!
//! ## Available Commands
//!
//! ### Menu Commands (`menu.rs`)
//! - `print_menu` - Show the numbered menu
//! - `manage_menu` - Management sub-menu loop
//! - `add_pizza` / `remove_pizza` / `toggle_pizza` - Edit and save
//!
//! ### Order Commands (`order.rs`)
//! - `create_order` - Pick pizzas, set party size, print the split
//!
//! ## Error Handling
//! Commands return `AppResult`. [`recover`] prints recoverable errors as
//! `Error: <message>` and lets the loop continue; fatal ones (closed
//! input, broken output) pass through.

use std::io::{BufRead, Write};

use crate::error::AppResult;
use crate::prompt::Prompter;

pub mod menu;
pub mod order;

/// Prints a recoverable error and swallows it.
pub fn recover<R: BufRead, W: Write>(
    io: &mut Prompter<R, W>,
    result: AppResult<()>,
) -> AppResult<()> {
    match result {
        Ok(()) => Ok(()),
        Err(err) if err.is_fatal() => Err(err),
        Err(err) => io.say(format!("Error: {err}")),
    }
}
