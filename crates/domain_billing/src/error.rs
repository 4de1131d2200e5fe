//! Billing domain errors

use thiserror::Error;

use core_kernel::{BillId, Money};
use domain_consumer::ConsumerError;

use crate::bill::BillStatus;

/// Errors that can occur in the billing domain
///
/// Every variant is an expected, recoverable condition reported to the
/// immediate caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BillingError {
    /// Consumer lookup or registration failed
    #[error(transparent)]
    Consumer(#[from] ConsumerError),

    /// Consumer has no bill to show or pay
    #[error("No bill found for consumer: {0}")]
    NoBillFound(String),

    /// Latest bill is already paid
    #[error("Bill {0} has already been paid")]
    AlreadyPaid(BillId),

    /// Tendered amount is below the bill total
    #[error("Insufficient amount: {tendered} tendered, {due} due")]
    InsufficientAmount { due: Money, tendered: Money },

    /// Charge or payment below zero
    #[error("Amount must not be negative: {0}")]
    NegativeAmount(Money),

    /// Consumer already has at least one bill
    #[error("Consumer already has an opening bill: {0}")]
    OpeningBillExists(String),

    /// Bill status change not allowed by the lifecycle
    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: BillStatus, to: BillStatus },
}

impl BillingError {
    /// Creates a NoBillFound error from any username type
    pub fn no_bill(username: impl std::fmt::Display) -> Self {
        BillingError::NoBillFound(username.to_string())
    }

    /// True when registration failed on a taken username
    pub fn is_duplicate_username(&self) -> bool {
        matches!(self, BillingError::Consumer(ConsumerError::DuplicateUsername(_)))
    }

    /// True when the named consumer does not exist
    pub fn is_consumer_not_found(&self) -> bool {
        matches!(self, BillingError::Consumer(ConsumerError::ConsumerNotFound(_)))
    }
}
