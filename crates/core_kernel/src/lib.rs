//! Core Kernel - Foundational types shared by the billing domains
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money and rate types with precise decimal arithmetic
//! - Sequential bill identifiers and consumer usernames

pub mod money;
pub mod identifiers;
pub mod error;

pub use money::{Money, Rate, MoneyError};
pub use identifiers::{BillId, BillSequence, Username};
pub use error::CoreError;
