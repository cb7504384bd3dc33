//! # mcshell-cli: Terminal Front End for McShell
//!
//! Thin layer over `mcshell-core`: it asks, it prints, and it leaves every
//! calculation to the core crate.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse flags (clap)                                     main.rs      │
//! │  2. Initialize tracing (stderr, RUST_LOG)                  init_tracing │
//! │  3. Load AppConfig (env + flags)                           config.rs    │
//! │  4. Pick a prompter (arrow keys or numbered)               prompt.rs    │
//! │  5. Run the session: food ► beverages ► bill               session.rs   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod prompt;
pub mod receipt;
pub mod session;

use std::io;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub use cli::CommandLine;
pub use config::{AppConfig, ConfigError};
pub use error::{AppError, AppResult};
pub use session::{Phase, Session};

/// Runs one ordering session on the current terminal.
pub fn run(args: &CommandLine) -> AppResult<()> {
    let config = AppConfig::from_env()?.with_args(args);
    debug!(?config, "configuration loaded");

    if !config.color {
        colored::control::set_override(false);
    }

    let prompter = prompt::for_terminal(config.plain_prompt);
    let order = Session::new(prompter, io::stdout()).run()?;

    info!(items = order.len(), "order complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - Default: WARN, so prompts and the bill stay uncluttered
/// - `RUST_LOG=mcshell_cli=debug,mcshell_core=debug` - every selection
///
/// Events go to stderr; stdout carries only the session itself.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
