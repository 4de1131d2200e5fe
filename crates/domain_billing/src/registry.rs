//! Billing registry
//!
//! The registry exclusively owns the consumer and bill collections and is the
//! only place either changes. Bills are appended in identifier order, so the
//! latest bill of a consumer is the one with the highest [`BillId`].
//!
//! # Deletion
//!
//! Deleting a consumer soft-deletes the consumer record but physically
//! removes every bill the consumer owns.

use std::fmt;

use serde::Serialize;

use core_kernel::{BillId, BillSequence, Money, Username};
use domain_consumer::{Consumer, ConsumerDirectory, ConsumerError, NewConsumer};

use crate::admin::AdminGate;
use crate::bill::{Bill, BillStatus};
use crate::error::BillingError;
use crate::meter::{MeterSource, RandomMeter};
use crate::notice::{Notice, Operation, ReportChannel, TracingChannel};
use crate::report::BillSummary;
use crate::tariff::Tariff;

/// A bill created by monthly generation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedBill {
    pub bill: Bill,
    /// Previous bill dismissed because it was still pending
    pub superseded: Option<BillId>,
}

/// Result of a successful payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentReceipt {
    pub bill_id: BillId,
    pub username: Username,
    pub status: BillStatus,
    pub amount_due: Money,
    pub tendered: Money,
    /// Returned to the payer, not kept anywhere
    pub change: Money,
}

/// Result of a successful deletion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedConsumer {
    pub username: Username,
    pub bills_removed: usize,
}

/// Paid and pending bills; dismissed bills are in neither bucket
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillsByStatus<'a> {
    pub paid: Vec<&'a Bill>,
    pub pending: Vec<&'a Bill>,
}

/// In-memory ledger of consumers and their bills
pub struct BillingRegistry {
    consumers: ConsumerDirectory,
    bills: Vec<Bill>,
    sequence: BillSequence,
    tariff: Tariff,
    admin: AdminGate,
    meter: Box<dyn MeterSource + Send>,
    channel: Box<dyn ReportChannel + Send>,
}

impl fmt::Debug for BillingRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BillingRegistry")
            .field("consumers", &self.consumers.len())
            .field("bills", &self.bills.len())
            .field("last_bill_id", &self.sequence.last_issued())
            .field("tariff", &self.tariff)
            .finish_non_exhaustive()
    }
}

impl Default for BillingRegistry {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl BillingRegistry {
    /// Registry with the default tariff, a random meter and a tracing channel
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    // ------------------------------------------------------------------
    // Consumer management
    // ------------------------------------------------------------------

    /// Registers a consumer under a username no consumer has ever held
    pub fn register_consumer(&mut self, request: NewConsumer) -> Result<&Consumer, BillingError> {
        let username = request.username.clone();
        if let Err(error) = self.consumers.register(request).map(|_| ()) {
            return Err(self.reject(Operation::RegisterConsumer, error.into()));
        }

        tracing::info!(username = %username, "consumer registered");
        self.channel.publish(&Notice::ConsumerRegistered {
            username: username.clone(),
        });
        self.consumer_record(username.as_str())
    }

    /// All consumers in registration order, including inactive ones
    pub fn list_consumers(&self) -> &[Consumer] {
        self.consumers.as_slice()
    }

    pub fn consumer(&self, username: &str) -> Option<&Consumer> {
        self.consumers.get(username)
    }

    /// Checks a consumer's password; only active consumers can sign in
    pub fn authenticate_consumer(&self, username: &str, password: &str) -> Result<&Consumer, BillingError> {
        let result = self.consumers.authenticate(username, password);
        if result.is_err() {
            tracing::debug!(username, "consumer authentication failed");
        }
        result.map_err(BillingError::from)
    }

    /// Deactivates the consumer and removes all of their bills
    pub fn delete_consumer(&mut self, username: &str) -> Result<DeletedConsumer, BillingError> {
        if let Err(error) = self.consumers.deactivate(username).map(|_| ()) {
            return Err(self.reject(Operation::DeleteConsumer, error.into()));
        }

        let before = self.bills.len();
        self.bills.retain(|bill| bill.consumer.as_str() != username);
        let bills_removed = before - self.bills.len();

        tracing::info!(username, bills_removed, "consumer deleted");
        let deleted = DeletedConsumer {
            username: Username::from(username),
            bills_removed,
        };
        self.channel.publish(&Notice::ConsumerDeleted {
            username: deleted.username.clone(),
            bills_removed,
        });
        Ok(deleted)
    }

    // ------------------------------------------------------------------
    // Bill lifecycle
    // ------------------------------------------------------------------

    /// Issues a consumer's first bill, which seeds the fixed charge
    ///
    /// A negative fixed charge is rejected before the consumer is looked up.
    pub fn issue_opening_bill(&mut self, username: &str, fixed_charge: Money) -> Result<&Bill, BillingError> {
        let owner = match self.check_opening(username, fixed_charge) {
            Ok(owner) => owner,
            Err(error) => return Err(self.reject(Operation::IssueOpeningBill, error)),
        };

        let bill = Bill::opening(self.sequence.next_id(), owner, fixed_charge);
        tracing::info!(username, bill_id = %bill.id, fixed_charge = %fixed_charge, "opening bill issued");
        self.channel.publish(&Notice::OpeningBillIssued { bill: bill.clone() });

        let index = self.bills.len();
        self.bills.push(bill);
        Ok(&self.bills[index])
    }

    /// The consumer's bill with the highest identifier
    pub fn latest_bill(&self, username: &str) -> Option<&Bill> {
        self.latest_index(username).map(|index| &self.bills[index])
    }

    /// Generates the next bill for every active consumer that has a prior bill
    ///
    /// Consumers without any bill are skipped. A previous bill still pending
    /// at generation time is dismissed; unpaid amounts are not carried over.
    pub fn generate_monthly_bills(&mut self) -> Vec<GeneratedBill> {
        if self.consumers.is_empty() {
            tracing::info!("no consumers registered, nothing to generate");
            self.channel.publish(&Notice::NoConsumers);
            return Vec::new();
        }

        let mut generated = Vec::new();
        for username in self.consumers.active_usernames() {
            let Some(previous_index) = self.latest_index(username.as_str()) else {
                tracing::debug!(username = %username, "skipping consumer without a prior bill");
                continue;
            };
            let Some(consumer) = self.consumers.get(username.as_str()) else {
                continue;
            };

            let reading = self.meter.read(consumer);
            let charges = self.tariff.assess(&self.bills[previous_index], &reading);

            let previous = &mut self.bills[previous_index];
            // only pending bills are superseded
            let superseded = previous.dismiss().ok().map(|()| previous.id);

            let bill = Bill::issue(self.sequence.next_id(), username.clone(), charges);
            tracing::info!(
                username = %username,
                bill_id = %bill.id,
                units = bill.units_consumed,
                total = %bill.total_amount,
                superseded = ?superseded,
                "monthly bill generated"
            );
            self.channel.publish(&Notice::BillGenerated {
                bill: bill.clone(),
                superseded,
            });

            self.bills.push(bill.clone());
            generated.push(GeneratedBill { bill, superseded });
        }
        generated
    }

    /// Pays the consumer's latest bill in full
    pub fn pay_bill(&mut self, username: &str, amount: Money) -> Result<PaymentReceipt, BillingError> {
        if amount.is_negative() {
            return Err(self.reject(Operation::PayBill, BillingError::NegativeAmount(amount)));
        }
        let Some(index) = self.latest_index(username) else {
            return Err(self.reject(Operation::PayBill, BillingError::no_bill(username)));
        };

        let (bill_id, status, amount_due) = {
            let bill = &self.bills[index];
            (bill.id, bill.status(), bill.total_amount)
        };
        if status == BillStatus::Paid {
            return Err(self.reject(Operation::PayBill, BillingError::AlreadyPaid(bill_id)));
        }
        if amount < amount_due {
            let error = BillingError::InsufficientAmount {
                due: amount_due,
                tendered: amount,
            };
            return Err(self.reject(Operation::PayBill, error));
        }
        if let Err(error) = self.bills[index].mark_paid() {
            return Err(self.reject(Operation::PayBill, error));
        }

        let change = amount - amount_due;
        tracing::info!(username, bill_id = %bill_id, change = %change, "bill paid");
        self.channel.publish(&Notice::BillPaid {
            username: Username::from(username),
            bill_id,
            change,
        });

        Ok(PaymentReceipt {
            bill_id,
            username: Username::from(username),
            status: BillStatus::Paid,
            amount_due,
            tendered: amount,
            change,
        })
    }

    // ------------------------------------------------------------------
    // Reporting
    // ------------------------------------------------------------------

    /// Summary of the consumer's latest bill
    pub fn consumer_bill(&self, username: &str) -> Result<BillSummary, BillingError> {
        self.latest_bill(username)
            .map(BillSummary::from)
            .ok_or_else(|| BillingError::no_bill(username))
    }

    /// Every bill of the consumer in issue order
    pub fn transaction_history(&self, username: &str) -> Vec<&Bill> {
        self.bills
            .iter()
            .filter(|bill| bill.consumer.as_str() == username)
            .collect()
    }

    pub fn all_bills(&self) -> &[Bill] {
        &self.bills
    }

    /// Partitions bills into paid and pending, leaving out dismissed ones
    pub fn bills_by_status(&self) -> BillsByStatus<'_> {
        let mut partition = BillsByStatus::default();
        for bill in &self.bills {
            match bill.status() {
                BillStatus::Paid => partition.paid.push(bill),
                BillStatus::Pending => partition.pending.push(bill),
                BillStatus::Dismissed => {}
            }
        }
        partition
    }

    pub fn admin_login(&self, username: &str, password: &str) -> bool {
        let granted = self.admin.login(username, password);
        tracing::debug!(username, granted, "admin login attempt");
        granted
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn latest_index(&self, username: &str) -> Option<usize> {
        self.bills
            .iter()
            .enumerate()
            .filter(|(_, bill)| bill.consumer.as_str() == username)
            .max_by_key(|(_, bill)| bill.id)
            .map(|(index, _)| index)
    }

    fn consumer_record(&self, username: &str) -> Result<&Consumer, BillingError> {
        self.consumers
            .get(username)
            .ok_or_else(|| ConsumerError::not_found(username).into())
    }

    fn check_opening(&self, username: &str, fixed_charge: Money) -> Result<Username, BillingError> {
        if fixed_charge.is_negative() {
            return Err(BillingError::NegativeAmount(fixed_charge));
        }
        let consumer = self.consumer_record(username)?;
        if !consumer.is_active() {
            return Err(ConsumerError::ConsumerInactive(username.to_string()).into());
        }
        if self.latest_index(username).is_some() {
            return Err(BillingError::OpeningBillExists(username.to_string()));
        }
        Ok(consumer.username().clone())
    }

    fn reject(&mut self, operation: Operation, error: BillingError) -> BillingError {
        tracing::warn!(%operation, %error, "billing operation rejected");
        self.channel.publish(&Notice::Rejected {
            operation,
            error: error.clone(),
        });
        error
    }
}

/// Builder for [`BillingRegistry`]
#[derive(Default)]
pub struct RegistryBuilder {
    tariff: Tariff,
    meter: Option<Box<dyn MeterSource + Send>>,
    channel: Option<Box<dyn ReportChannel + Send>>,
}

impl RegistryBuilder {
    pub fn tariff(mut self, tariff: Tariff) -> Self {
        self.tariff = tariff;
        self
    }

    pub fn meter(mut self, meter: impl MeterSource + Send + 'static) -> Self {
        self.meter = Some(Box::new(meter));
        self
    }

    pub fn channel(mut self, channel: impl ReportChannel + Send + 'static) -> Self {
        self.channel = Some(Box::new(channel));
        self
    }

    pub fn build(self) -> BillingRegistry {
        BillingRegistry {
            consumers: ConsumerDirectory::new(),
            bills: Vec::new(),
            sequence: BillSequence::new(),
            tariff: self.tariff,
            admin: AdminGate,
            meter: self.meter.unwrap_or_else(|| Box::new(RandomMeter::default())),
            channel: self.channel.unwrap_or_else(|| Box::new(TracingChannel)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meter::{FixedMeter, MeterReading};
    use crate::notice::RecordingChannel;

    fn registry() -> (BillingRegistry, RecordingChannel) {
        let recorder = RecordingChannel::new();
        let registry = BillingRegistry::builder()
            .meter(FixedMeter(MeterReading::new(10, Money::from_dollars(5))))
            .channel(recorder.clone())
            .build();
        (registry, recorder)
    }

    #[test]
    fn test_latest_bill_picks_highest_id() {
        let (mut registry, _) = registry();
        registry.register_consumer(NewConsumer::new("alice", "pw")).unwrap();
        registry.issue_opening_bill("alice", Money::from_dollars(20)).unwrap();
        registry.generate_monthly_bills();
        registry.generate_monthly_bills();

        assert_eq!(registry.latest_bill("alice").map(|b| b.id), Some(BillId::from_raw(3)));
    }

    #[test]
    fn test_rejections_are_published() {
        let (mut registry, recorder) = registry();
        let error = registry.pay_bill("ghost", Money::from_dollars(1)).unwrap_err();

        assert_eq!(error, BillingError::no_bill("ghost"));
        assert_eq!(
            recorder.last(),
            Some(Notice::Rejected {
                operation: Operation::PayBill,
                error,
            })
        );
    }

    #[test]
    fn test_debug_omits_boxed_collaborators() {
        let (registry, _) = registry();
        let debug = format!("{:?}", registry);
        assert!(debug.starts_with("BillingRegistry"));
        assert!(debug.contains("consumers: 0"));
    }
}
