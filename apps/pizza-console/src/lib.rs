//! # Pizza Console Library
//!
//! The interactive shell (`pizza`) and the one-shot calculator
//! (`pizza-split`) on top of pizza-core and pizza-store.
//!
//! ## Module Organization
//! ```text
//! pizza_console/
//! ├── lib.rs          ◄─── You are here (startup, logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── ShellConfig (flags, env, defaults)
//! │   └── session.rs  ◄─── Menu + save location
//! ├── commands/
//! │   ├── mod.rs      ◄─── Error recovery between commands
//! │   ├── menu.rs     ◄─── View / add / remove / toggle
//! │   └── order.rs    ◄─── Order building and bill split
//! ├── prompt.rs       ◄─── Bounded line reader
//! ├── shell.rs        ◄─── Main menu loop
//! ├── legacy.rs       ◄─── pizza-split calculator
//! └── error.rs        ◄─── AppError
//! ```

pub mod commands;
pub mod error;
pub mod legacy;
pub mod prompt;
pub mod shell;
pub mod state;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use error::AppError;
use legacy::LegacyArgs;
use shell::Shell;
use state::ShellConfig;

/// Environment variable holding the log filter (checked before `RUST_LOG`).
pub const ENV_LOG: &str = "PIZZA_LOG";

/// Pizza menu manager and bill splitter.
#[derive(Parser, Debug)]
#[command(name = "pizza")]
#[command(version, about, long_about = None)]
pub struct ShellArgs {
    /// Menu file, relative to the home directory and under data/
    #[arg(long, value_name = "PATH")]
    pub menu_file: Option<PathBuf>,

    /// Directory the menu file is resolved in
    #[arg(long, value_name = "DIR")]
    pub home: Option<PathBuf>,
}

/// Runs the interactive shell on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, stderr                        │
/// │     • Default: WARN, override with PIZZA_LOG or RUST_LOG                │
/// │                                                                         │
/// │  2. Resolve Configuration ────────────────────────────────────────────► │
/// │     • Defaults ◄── PIZZA_* env ◄── --menu-file / --home                 │
/// │                                                                         │
/// │  3. Run Shell ────────────────────────────────────────────────────────► │
/// │     • Load or seed the menu                                             │
/// │     • Main menu loop until Exit or end of input                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    init_tracing();

    let args = ShellArgs::parse();
    let config = ShellConfig::from_env().with_overrides(args.menu_file, args.home);
    info!(?config, "Starting pizza shell");

    let stdin = io::stdin();
    let mut shell = Shell::new(config, stdin.lock(), io::stdout());

    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Shell stopped");
            eprintln!("Fatal error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the legacy calculator with the process arguments.
pub fn run_legacy() -> ExitCode {
    init_tracing();

    // Usage errors exit 1 like validation errors; --help and --version exit 0.
    let args = match LegacyArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    let config = ShellConfig::from_env();
    let mut stdout = io::stdout().lock();

    let result = legacy::run_legacy(&args, &config, &mut stdout)
        .and_then(|()| stdout.flush().map_err(AppError::from));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `PIZZA_LOG=debug` - Show debug messages
/// - `RUST_LOG=pizza_store=info` - Standard filter syntax also works
/// - Default: WARN, so logs stay out of the prompts
fn init_tracing() {
    let filter = EnvFilter::try_from_env(ENV_LOG)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
