//! Consumer Management Domain
//!
//! This crate manages utility consumers: their identity, contact data and
//! connection status.
//!
//! # Lifecycle
//!
//! - **Registration**: a consumer is created active under a unique username
//! - **Deactivation**: deleting a consumer only flips the `active` flag; the
//!   record and its username stay in the directory
//!
//! # Examples
//!
//! ```rust
//! use domain_consumer::{ConsumerDirectory, NewConsumer};
//!
//! let mut directory = ConsumerDirectory::new();
//! directory
//!     .register(
//!         NewConsumer::new("alice", "secret")
//!             .with_name("Alice", "Smith")
//!             .with_address("12 Grid Lane")
//!             .with_email("alice@example.com"),
//!     )
//!     .unwrap();
//!
//! assert!(directory.register(NewConsumer::new("alice", "other")).is_err());
//! ```

pub mod consumer;
pub mod directory;
pub mod error;

pub use consumer::{Consumer, NewConsumer};
pub use directory::ConsumerDirectory;
pub use error::ConsumerError;
