//! Reporting channel
//!
//! Mutating registry operations publish a [`Notice`] describing their
//! outcome. The notice carries the typed result so callers can react to the
//! condition, and its `Display` gives the human-readable report line.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use core_kernel::{BillId, Money, Username};
use domain_consumer::ConsumerError;

use crate::bill::Bill;
use crate::error::BillingError;

/// Registry operation that produced a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    RegisterConsumer,
    IssueOpeningBill,
    PayBill,
    DeleteConsumer,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::RegisterConsumer => "register_consumer",
            Operation::IssueOpeningBill => "issue_opening_bill",
            Operation::PayBill => "pay_bill",
            Operation::DeleteConsumer => "delete_consumer",
        };
        f.write_str(name)
    }
}

/// Outcome of a registry operation
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    ConsumerRegistered { username: Username },
    ConsumerDeleted { username: Username, bills_removed: usize },
    OpeningBillIssued { bill: Bill },
    BillGenerated { bill: Bill, superseded: Option<BillId> },
    /// Generation ran with no consumers registered
    NoConsumers,
    BillPaid { username: Username, bill_id: BillId, change: Money },
    Rejected { operation: Operation, error: BillingError },
}

impl Notice {
    pub fn is_rejection(&self) -> bool {
        matches!(self, Notice::Rejected { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ConsumerRegistered { .. } => f.write_str("Consumer registered successfully."),
            Notice::ConsumerDeleted { .. } => f.write_str("Consumer deleted successfully."),
            Notice::OpeningBillIssued { bill } => write!(
                f,
                "Opening bill {} issued for consumer {}: {}",
                bill.id, bill.consumer, bill.total_amount
            ),
            Notice::BillGenerated { bill, .. } => {
                writeln!(f, "New Bill Generated for Consumer: {}", bill.consumer)?;
                writeln!(f, "Fixed Charge: {}", bill.fixed_charge)?;
                writeln!(f, "Units Consumed: {}", bill.units_consumed)?;
                writeln!(f, "Taxes: {}", bill.taxes)?;
                writeln!(f, "Adjustment: {}", bill.adjustment)?;
                writeln!(f, "Total Amount: {}", bill.total_amount)?;
                write!(f, "Status: {}", bill.status())
            }
            Notice::NoConsumers => f.write_str("No consumers found."),
            Notice::BillPaid { change, .. } => write!(f, "Bill paid successfully. Change: {}", change),
            Notice::Rejected { error, .. } => f.write_str(&rejection_message(error)),
        }
    }
}

/// Report line for a failed operation
pub fn rejection_message(error: &BillingError) -> String {
    match error {
        BillingError::Consumer(ConsumerError::DuplicateUsername(_)) => {
            "Username already exists. Please choose a different username.".to_string()
        }
        BillingError::Consumer(ConsumerError::ConsumerNotFound(_)) => "Consumer not found.".to_string(),
        BillingError::NoBillFound(_) => "No bill found for the consumer.".to_string(),
        BillingError::AlreadyPaid(_) => "The bill has already been paid.".to_string(),
        BillingError::InsufficientAmount { due, .. } => {
            format!("Insufficient amount. Please pay the full bill amount: {}", due)
        }
        other => other.to_string(),
    }
}

/// Destination of registry notices
pub trait ReportChannel {
    fn publish(&mut self, notice: &Notice);
}

/// Writes each notice to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingChannel;

impl ReportChannel for TracingChannel {
    fn publish(&mut self, notice: &Notice) {
        match notice {
            Notice::Rejected { operation, .. } => {
                tracing::warn!(target: "billing::report", %operation, "{}", notice);
            }
            _ => tracing::info!(target: "billing::report", "{}", notice),
        }
    }
}

/// Collects notices in memory; clones share the same log
#[derive(Debug, Clone, Default)]
pub struct RecordingChannel {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every notice published so far
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drains the log
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl ReportChannel for RecordingChannel {
    fn publish(&mut self, notice: &Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice.clone());
    }
}
