//! Test Data Builders
//!
//! Provides a builder for registries that already hold consumers and opening
//! bills, so tests only state what matters to them.

use core_kernel::Money;
use domain_billing::{BillingRegistry, MeterReading, RecordingChannel, ScriptedMeter, Tariff};
use domain_consumer::NewConsumer;

use crate::fixtures::{ConsumerFixtures, MoneyFixtures, ReadingFixtures};

/// Builder for a populated [`BillingRegistry`]
pub struct TestRegistryBuilder {
    consumers: Vec<(NewConsumer, Option<Money>)>,
    readings: Vec<MeterReading>,
    fallback: MeterReading,
    tariff: Tariff,
}

impl Default for TestRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRegistryBuilder {
    /// Creates a builder with no consumers and the standard reading
    pub fn new() -> Self {
        Self {
            consumers: Vec::new(),
            readings: Vec::new(),
            fallback: ReadingFixtures::standard(),
            tariff: Tariff::default(),
        }
    }

    /// Adds a consumer with an opening bill of the standard fixed charge
    pub fn with_billed_consumer(self, username: &str) -> Self {
        self.with_consumer_request(ConsumerFixtures::minimal(username), Some(MoneyFixtures::fixed_charge()))
    }

    /// Adds a consumer with an opening bill of `fixed_charge`
    pub fn with_opening_bill(self, username: &str, fixed_charge: Money) -> Self {
        self.with_consumer_request(ConsumerFixtures::minimal(username), Some(fixed_charge))
    }

    /// Adds a consumer without any bill
    pub fn with_unbilled_consumer(self, username: &str) -> Self {
        self.with_consumer_request(ConsumerFixtures::minimal(username), None)
    }

    /// Adds a registration request and optional opening bill
    pub fn with_consumer_request(mut self, request: NewConsumer, opening: Option<Money>) -> Self {
        self.consumers.push((request, opening));
        self
    }

    /// Queues readings returned in order by generation
    pub fn with_readings(mut self, readings: impl IntoIterator<Item = MeterReading>) -> Self {
        self.readings.extend(readings);
        self
    }

    /// Sets the reading used after the queue runs out
    pub fn with_fallback_reading(mut self, reading: MeterReading) -> Self {
        self.fallback = reading;
        self
    }

    pub fn with_tariff(mut self, tariff: Tariff) -> Self {
        self.tariff = tariff;
        self
    }

    /// Builds the registry; notices published while seeding are discarded
    ///
    /// # Panics
    ///
    /// Panics if two seeded consumers share a username
    pub fn build(self) -> (BillingRegistry, RecordingChannel) {
        let recorder = RecordingChannel::new();
        let meter = ScriptedMeter::new(self.readings).with_fallback(self.fallback);
        let mut registry = BillingRegistry::builder()
            .tariff(self.tariff)
            .meter(meter)
            .channel(recorder.clone())
            .build();

        for (request, opening) in self.consumers {
            let username = request.username.clone();
            registry
                .register_consumer(request)
                .expect("seeded usernames must be unique");
            if let Some(fixed_charge) = opening {
                registry
                    .issue_opening_bill(username.as_str(), fixed_charge)
                    .expect("fresh consumer accepts an opening bill");
            }
        }

        recorder.take();
        (registry, recorder)
    }
}
