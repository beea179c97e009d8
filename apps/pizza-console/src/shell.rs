//! # Shell
//!
//! The top-level numbered menu.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  start ──► load or seed menu ──► "Pizza menu loaded successfully!"     │
//! │                │                                                        │
//! │                ▼                                                        │
//! │  ┌──────────────────────────────────────┐                              │
//! │  │ === Pizza Management System ===      │                              │
//! │  │ 1. Manage Pizza Menu      ───────────┼──► commands::menu            │
//! │  │ 2. Create Order & Calculate Split ───┼──► commands::order           │
//! │  │ 3. Exit                   ───────────┼──► save, goodbye             │
//! │  └──────────────────────────────────────┘                              │
//! │                                                                         │
//! │  End of input anywhere ──► "Input terminated." ──► exit status 0       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::info;

use crate::commands::{menu, order, recover};
use crate::error::{AppError, AppResult};
use crate::prompt::Prompter;
use crate::state::{Session, ShellConfig, Startup};

/// Interactive shell over any reader and writer.
#[derive(Debug)]
pub struct Shell<R, W> {
    session: Session,
    io: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(config: ShellConfig, input: R, output: W) -> Self {
        Shell {
            session: Session::new(config),
            io: Prompter::new(input, output),
        }
    }

    /// Runs until the user exits or input ends.
    ///
    /// End of input is a normal exit. Only output failures are errors.
    pub fn run(&mut self) -> AppResult<()> {
        match self.run_loop() {
            Err(AppError::InputTerminated) => {
                info!("Input closed, leaving shell");
                self.io.say("\nInput terminated.")
            }
            other => other,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the writer, for inspecting output.
    pub fn into_output(self) -> W {
        self.io.into_inner().1
    }

    fn run_loop(&mut self) -> AppResult<()> {
        self.start()?;

        loop {
            self.io.say("\n=== Pizza Management System ===")?;
            self.io.say("1. Manage Pizza Menu")?;
            self.io.say("2. Create Order & Calculate Split")?;
            self.io.say("3. Exit")?;

            let result = match self.io.choice("Choose an option (1-3): ", 1, 3)? {
                1 => menu::manage_menu(&mut self.session, &mut self.io),
                2 => order::create_order(&self.session, &mut self.io),
                _ => return self.exit(),
            };
            recover(&mut self.io, result)?;
        }
    }

    fn start(&mut self) -> AppResult<()> {
        self.io.say("=== Pizza Management System ===")?;
        self.io.say("Loading pizza menu...")?;

        match self.session.load() {
            Startup::Loaded { entries, skipped } => {
                info!(entries, skipped, "Menu loaded");
            }
            Startup::Seeded { reason, saved } => {
                info!(%reason, "Seeding default menu");
                self.io.say("Creating default pizza menu...")?;
                if !saved {
                    self.io.say("Warning: Could not save menu to file.")?;
                }
            }
        }

        self.io.say(format!(
            "Pizza menu loaded successfully! ({} pizza types available)",
            self.session.menu().len()
        ))
    }

    fn exit(&mut self) -> AppResult<()> {
        self.io.say("Thank you for using Pizza Management System!")?;
        self.io.say("Saving menu...")?;
        if !self.session.save_or_warn() {
            self.io.say("Warning: Could not save menu to file.")?;
        }
        Ok(())
    }
}
