//! Console Interface Layer
//!
//! This crate is the caller-facing side of the billing registry: a
//! line-oriented console that parses commands, enforces the administrator
//! gate and prints the registry's reports.
//!
//! # Architecture
//!
//! - **Config**: tariff, simulated meter and log level from `BILLING_*` variables
//! - **Command**: line parser for the console commands
//! - **Session**: runs commands against a [`domain_billing::SharedRegistry`]
//! - **Error Handling**: parse, I/O and configuration errors
//!
//! # Example
//!
//! ```rust
//! use interface_console::{config::ConsoleConfig, session::Session};
//!
//! let config = ConsoleConfig::default();
//! let mut session = Session::buffered(config.registry_builder());
//! session.execute("register alice pw Alice Liddell 555-0100 alice@example.com 1 Rabbit Hole").unwrap();
//! assert!(session.output().contains("Consumer registered successfully."));
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use command::Command;
pub use config::ConsoleConfig;
pub use error::{CommandError, ConsoleError};
pub use session::{Flow, Session};
