//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities. These fixtures are
//! consistent and predictable for unit tests.

use core_kernel::Money;
use domain_billing::MeterReading;
use domain_consumer::NewConsumer;
use rust_decimal_macros::dec;

/// Fixture for consumer registration requests
pub struct ConsumerFixtures;

impl ConsumerFixtures {
    /// Fully populated registration for "alice"
    pub fn alice() -> NewConsumer {
        NewConsumer::new("alice", "wonderland")
            .with_name("Alice", "Liddell")
            .with_address("1 Rabbit Hole, Oxford")
            .with_mobile_number("555-0100")
            .with_email("alice@example.com")
    }

    /// Fully populated registration for "bob"
    pub fn bob() -> NewConsumer {
        NewConsumer::new("bob", "builder")
            .with_name("Bob", "Stone")
            .with_address("22 Quarry Road")
            .with_mobile_number("555-0101")
            .with_email("bob@example.com")
    }

    /// Registration with credentials only
    pub fn minimal(username: &str) -> NewConsumer {
        NewConsumer::new(username, "password")
    }

    /// The console line that registers [`ConsumerFixtures::alice`]
    pub fn alice_register_line() -> &'static str {
        "register alice wonderland Alice Liddell 555-0100 alice@example.com 1 Rabbit Hole, Oxford"
    }
}

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard fixed charge of an opening bill
    pub fn fixed_charge() -> Money {
        Money::from_dollars(20)
    }

    /// Total of the first generated bill for [`ReadingFixtures::standard`]
    /// on top of [`MoneyFixtures::fixed_charge`]
    pub fn first_generated_total() -> Money {
        Money::new(dec!(125.625))
    }

    /// Amount large enough to settle any test bill
    pub fn generous_payment() -> Money {
        Money::from_dollars(10_000)
    }

    /// Creates a zero amount
    pub fn zero() -> Money {
        Money::zero()
    }
}

/// Fixture for meter readings
pub struct ReadingFixtures;

impl ReadingFixtures {
    /// 10 units with a $5 adjustment
    pub fn standard() -> MeterReading {
        MeterReading::new(10, Money::from_dollars(5))
    }

    /// No consumption and no adjustment
    pub fn idle() -> MeterReading {
        MeterReading::zero()
    }
}
