//! # Legacy Bill Splitter
//!
//! `pizza-split <pizzas> <people>` at a fixed 10.00 per pizza.
//! Exits with status 1 and `Error: <message>` on stderr for bad input.

use std::process::ExitCode;

fn main() -> ExitCode {
    pizza_console::run_legacy()
}
