//! Interactive shell over the ledger services. Mirrors the dashboard pages:
//! one "open" venue at a time, a date cursor clamped to today, and point
//! edits against the day sheet.

pub mod commands;
pub mod output;
pub mod shell;
pub mod state;
pub mod table;

pub use shell::run_cli;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Ledger(#[from] crate::errors::LedgerError),
}

/// Whether the command loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}
