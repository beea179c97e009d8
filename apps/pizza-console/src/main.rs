//! # Pizza Shell Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr)
//! 2. Resolve configuration from flags and environment
//! 3. Load the menu, or seed and save the defaults
//! 4. Run the main menu until Exit or end of input

use std::process::ExitCode;

fn main() -> ExitCode {
    pizza_console::run()
}
