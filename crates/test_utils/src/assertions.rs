//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give more
//! meaningful error messages than standard assertions.

use core_kernel::{BillId, Money};
use domain_billing::{Bill, BillStatus, BillingRegistry, BillsByStatus, Notice};
use rust_decimal::Decimal;

/// Asserts that two Money values are equal within a tolerance
///
/// # Panics
///
/// Panics if the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts the status of a bill
pub fn assert_bill_status(bill: &Bill, expected: BillStatus) {
    assert_eq!(
        bill.status(),
        expected,
        "Bill {} of {} has status {}, expected {}",
        bill.id,
        bill.consumer,
        bill.status(),
        expected
    );
}

/// Asserts the status of the consumer's latest bill
///
/// # Panics
///
/// Panics if the consumer has no bill
pub fn assert_latest_status(registry: &BillingRegistry, username: &str, expected: BillStatus) {
    let bill = registry
        .latest_bill(username)
        .unwrap_or_else(|| panic!("Consumer {} has no bill", username));
    assert_bill_status(bill, expected);
}

/// Asserts that bill identifiers are strictly increasing in collection order
pub fn assert_ids_strictly_increasing(bills: &[Bill]) {
    let ids: Vec<BillId> = bills.iter().map(|bill| bill.id).collect();
    for pair in ids.windows(2) {
        assert!(
            pair[0] < pair[1],
            "Bill ids are not strictly increasing: {} followed by {}",
            pair[0],
            pair[1]
        );
    }
}

/// Asserts that the paid/pending partition matches the full bill set
pub fn assert_partition_exact(all: &[Bill], partition: &BillsByStatus<'_>) {
    for bill in &partition.paid {
        assert_bill_status(bill, BillStatus::Paid);
    }
    for bill in &partition.pending {
        assert_bill_status(bill, BillStatus::Pending);
    }

    let undismissed = all.iter().filter(|bill| bill.status() != BillStatus::Dismissed).count();
    assert_eq!(
        partition.paid.len() + partition.pending.len(),
        undismissed,
        "Partition does not cover every paid and pending bill"
    );
}

/// Asserts that at least one notice is a rejection
pub fn assert_rejected(notices: &[Notice]) {
    assert!(
        notices.iter().any(Notice::is_rejection),
        "Expected a rejection notice, got {:?}",
        notices
    );
}
