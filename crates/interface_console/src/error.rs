//! Console error handling

use thiserror::Error;

use core_kernel::{CoreError, MoneyError};

/// Errors raised while reading a command line
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}. Type 'help' for the list of commands.")]
    Unknown(String),

    #[error("Missing argument <{argument}> for '{command}'")]
    MissingArgument {
        command: String,
        argument: &'static str,
    },

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] MoneyError),
}

/// Console error types
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Invalid(#[from] CoreError),
}
