//! Shared registry handle
//!
//! Serializes every operation through a single lock so that the
//! find-latest-bill-then-mutate steps of payment and generation apply
//! atomically when several callers hold the same registry.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use core_kernel::Money;
use domain_consumer::{Consumer, NewConsumer};

use crate::bill::Bill;
use crate::error::BillingError;
use crate::registry::{BillingRegistry, DeletedConsumer, GeneratedBill, PaymentReceipt};

/// Clonable handle to one [`BillingRegistry`]
#[derive(Debug, Clone)]
pub struct SharedRegistry {
    inner: Arc<Mutex<BillingRegistry>>,
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new(BillingRegistry::default())
    }
}

impl From<BillingRegistry> for SharedRegistry {
    fn from(registry: BillingRegistry) -> Self {
        Self::new(registry)
    }
}

impl SharedRegistry {
    pub fn new(registry: BillingRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Runs `f` while holding the registry lock
    pub fn with<R>(&self, f: impl FnOnce(&mut BillingRegistry) -> R) -> R {
        f(&mut *self.lock())
    }

    pub fn register_consumer(&self, request: NewConsumer) -> Result<Consumer, BillingError> {
        self.with(|registry| registry.register_consumer(request).cloned())
    }

    pub fn delete_consumer(&self, username: &str) -> Result<DeletedConsumer, BillingError> {
        self.with(|registry| registry.delete_consumer(username))
    }

    pub fn issue_opening_bill(&self, username: &str, fixed_charge: Money) -> Result<Bill, BillingError> {
        self.with(|registry| registry.issue_opening_bill(username, fixed_charge).cloned())
    }

    pub fn generate_monthly_bills(&self) -> Vec<GeneratedBill> {
        self.with(BillingRegistry::generate_monthly_bills)
    }

    pub fn pay_bill(&self, username: &str, amount: Money) -> Result<PaymentReceipt, BillingError> {
        self.with(|registry| registry.pay_bill(username, amount))
    }

    pub fn latest_bill(&self, username: &str) -> Option<Bill> {
        self.with(|registry| registry.latest_bill(username).cloned())
    }

    pub fn admin_login(&self, username: &str, password: &str) -> bool {
        self.with(|registry| registry.admin_login(username, password))
    }

    // A panic inside `with` cannot leave a half-applied mutation behind:
    // each operation validates before it changes anything.
    fn lock(&self) -> MutexGuard<'_, BillingRegistry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meter::{FixedMeter, MeterReading};
    use std::thread;

    #[test]
    fn test_concurrent_payments_apply_once() {
        let registry = BillingRegistry::builder()
            .meter(FixedMeter(MeterReading::zero()))
            .build();
        let shared = SharedRegistry::new(registry);
        shared.register_consumer(NewConsumer::new("alice", "pw")).unwrap();
        shared.issue_opening_bill("alice", Money::from_dollars(20)).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || shared.pay_bill("alice", Money::from_dollars(20)).is_ok())
            })
            .collect();
        let successes = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|paid| *paid)
            .count();

        assert_eq!(successes, 1);
    }

    #[test]
    fn test_clones_see_the_same_registry() {
        let shared = SharedRegistry::default();
        let other = shared.clone();
        shared.register_consumer(NewConsumer::new("bob", "pw")).unwrap();

        assert_eq!(other.with(|registry| registry.list_consumers().len()), 1);
    }
}
