//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data that
//! maintains domain invariants, plus fake contact data for registrations.

use core_kernel::Money;
use domain_billing::MeterReading;
use domain_consumer::NewConsumer;
use fake::faker::address::en::StreetName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use proptest::prelude::*;

/// Strategy for amounts in whole cents within `[0, max_cents)`
pub fn money_strategy(max_cents: i64) -> impl Strategy<Value = Money> {
    (0..max_cents).prop_map(Money::from_cents)
}

/// Strategy for readings inside the default simulated meter bounds
pub fn reading_strategy() -> impl Strategy<Value = MeterReading> {
    (0u32..100u32, money_strategy(5_000)).prop_map(|(units, adjustment)| MeterReading::new(units, adjustment))
}

/// Strategy for usernames (lowercase, 3 to 12 characters)
pub fn username_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{2,11}"
}

/// Strategy for a set of distinct usernames
pub fn distinct_usernames_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set(username_strategy(), 1..=max.max(1)).prop_map(|names| {
        let mut names: Vec<String> = names.into_iter().collect();
        names.sort();
        names
    })
}

/// Registration request with fake contact data
pub fn fake_consumer(username: &str) -> NewConsumer {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    let street: String = StreetName().fake();
    let mobile_number: String = PhoneNumber().fake();
    let email: String = SafeEmail().fake();

    NewConsumer::new(username, "password")
        .with_name(first_name, last_name)
        .with_address(format!("{} {}", (1..999).fake::<u32>(), street))
        .with_mobile_number(mobile_number)
        .with_email(email)
}
