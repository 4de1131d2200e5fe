//! Report rendering
//!
//! Turns registry query results into the human-readable text shown to the
//! caller. Empty results always render a distinct line instead of an empty
//! table.

use std::fmt::Write as _;

use serde::Serialize;

use core_kernel::{BillId, Money, Username};
use domain_consumer::Consumer;

use crate::bill::{Bill, BillStatus};
use crate::registry::BillsByStatus;

pub const NO_CONSUMERS: &str = "No consumers found.";
pub const NO_BILL: &str = "No bill found for the consumer.";
pub const NO_HISTORY: &str = "No transaction history found for the consumer.";
pub const NO_BILLS: &str = "No bills found.";
pub const NO_PAID_BILLS: &str = "No paid bills found.";
pub const NO_PENDING_BILLS: &str = "No pending bills found.";

/// Latest bill of a consumer as shown to that consumer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillSummary {
    pub bill_id: BillId,
    pub username: Username,
    pub fixed_charge: Money,
    pub units_consumed: u32,
    pub taxes: Money,
    pub adjustment: Money,
    pub total_amount: Money,
    pub status: BillStatus,
}

impl From<&Bill> for BillSummary {
    fn from(bill: &Bill) -> Self {
        Self {
            bill_id: bill.id,
            username: bill.consumer.clone(),
            fixed_charge: bill.fixed_charge,
            units_consumed: bill.units_consumed,
            taxes: bill.taxes,
            adjustment: bill.adjustment,
            total_amount: bill.total_amount,
            status: bill.status(),
        }
    }
}

/// Consumer table, or [`NO_CONSUMERS`]
pub fn consumers(consumers: &[Consumer]) -> String {
    if consumers.is_empty() {
        return NO_CONSUMERS.to_string();
    }

    let mut out = String::from("Consumer List:\n");
    for consumer in consumers {
        let _ = writeln!(
            out,
            "Username: {}, Name: {}, Address: {}, Mobile: {}, Email: {}, Active: {}",
            consumer.username(),
            consumer.full_name(),
            consumer.address,
            consumer.mobile_number,
            consumer.email,
            if consumer.is_active() { "Yes" } else { "No" },
        );
    }
    trim_end(out)
}

/// The consumer's latest bill, or [`NO_BILL`]
pub fn bill_summary(summary: Option<&BillSummary>) -> String {
    let Some(summary) = summary else {
        return NO_BILL.to_string();
    };

    let mut out = String::new();
    let _ = writeln!(out, "Bill Details for Consumer: {}", summary.username);
    let _ = writeln!(out, "Bill ID: {}", summary.bill_id);
    let _ = writeln!(out, "Fixed Charge: {}", summary.fixed_charge);
    let _ = writeln!(out, "Units Consumed: {}", summary.units_consumed);
    let _ = writeln!(out, "Taxes: {}", summary.taxes);
    let _ = writeln!(out, "Adjustment: {}", summary.adjustment);
    let _ = writeln!(out, "Total Amount: {}", summary.total_amount);
    let _ = write!(out, "Status: {}", summary.status);
    out
}

/// A consumer's bills in issue order, or [`NO_HISTORY`]
pub fn transaction_history(username: &str, bills: &[&Bill]) -> String {
    if bills.is_empty() {
        return NO_HISTORY.to_string();
    }

    let mut out = format!("Transaction History for Consumer: {}\n", username);
    for bill in bills {
        let _ = writeln!(
            out,
            "Bill ID: {}, Total Amount: {}, Status: {}",
            bill.id,
            bill.total_amount,
            bill.status()
        );
    }
    trim_end(out)
}

/// Every bill, or [`NO_BILLS`]
pub fn all_bills(bills: &[Bill]) -> String {
    if bills.is_empty() {
        return NO_BILLS.to_string();
    }

    let mut out = String::from("All Bills:\n");
    for bill in bills {
        let _ = writeln!(out, "{}", bill_line(bill));
    }
    trim_end(out)
}

/// Paid and pending sections, each with its own empty line
pub fn paid_and_pending(partition: &BillsByStatus<'_>) -> String {
    let mut out = String::new();
    section(&mut out, "Paid Bills:", NO_PAID_BILLS, &partition.paid);
    out.push('\n');
    section(&mut out, "Pending Bills:", NO_PENDING_BILLS, &partition.pending);
    trim_end(out)
}

fn section(out: &mut String, heading: &str, empty: &str, bills: &[&Bill]) {
    if bills.is_empty() {
        let _ = writeln!(out, "{}", empty);
        return;
    }
    let _ = writeln!(out, "{}", heading);
    for bill in bills {
        let _ = writeln!(out, "{}", bill_line(bill));
    }
}

fn bill_line(bill: &Bill) -> String {
    format!(
        "Bill ID: {}, Consumer: {}, Units: {}, Total Amount: {}, Status: {}",
        bill.id,
        bill.consumer,
        bill.units_consumed,
        bill.total_amount,
        bill.status()
    )
}

fn trim_end(mut out: String) -> String {
    let len = out.trim_end().len();
    out.truncate(len);
    out
}
