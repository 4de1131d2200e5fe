//! Metering sources
//!
//! Generation never samples randomness itself: it asks a [`MeterSource`] for
//! each consumer's reading. Real deployments plug in actual meter data; the
//! simulated [`RandomMeter`] stands in until then.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Money;
use domain_consumer::Consumer;

/// Consumption and adjustment for one cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterReading {
    pub units_consumed: u32,
    pub adjustment: Money,
}

impl MeterReading {
    pub fn new(units_consumed: u32, adjustment: Money) -> Self {
        Self { units_consumed, adjustment }
    }

    pub fn zero() -> Self {
        Self::new(0, Money::zero())
    }
}

/// Supplies a reading for a consumer at generation time
pub trait MeterSource {
    fn read(&mut self, consumer: &Consumer) -> MeterReading;
}

impl<F> MeterSource for F
where
    F: FnMut(&Consumer) -> MeterReading,
{
    fn read(&mut self, consumer: &Consumer) -> MeterReading {
        self(consumer)
    }
}

/// Exclusive upper bounds of simulated readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterLimits {
    /// Units are drawn from `[0, max_units)`
    pub max_units: u32,
    /// Adjustments are drawn from `[0, max_adjustment)` in whole cents
    pub max_adjustment: Money,
}

impl Default for MeterLimits {
    fn default() -> Self {
        Self {
            max_units: 100,
            max_adjustment: Money::from_dollars(50),
        }
    }
}

impl MeterLimits {
    /// Largest `max_adjustment` a simulated meter can draw from
    pub fn adjustment_ceiling() -> Money {
        Money::from_cents(i64::MAX)
    }

    /// Exclusive bound in cents; saturates above [`MeterLimits::adjustment_ceiling`]
    fn max_adjustment_cents(&self) -> i64 {
        if self.max_adjustment.is_negative() {
            return 0;
        }
        self.max_adjustment
            .amount()
            .checked_mul(dec!(100))
            .and_then(|cents| cents.trunc().to_i64())
            .unwrap_or(i64::MAX)
    }
}

/// Pseudo-random readings within [`MeterLimits`]
#[derive(Debug, Clone)]
pub struct RandomMeter {
    rng: StdRng,
    limits: MeterLimits,
}

impl RandomMeter {
    /// Seeds from system entropy
    pub fn new(limits: MeterLimits) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            limits,
        }
    }

    /// Reproducible sequence of readings
    pub fn seeded(seed: u64, limits: MeterLimits) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            limits,
        }
    }

    pub fn limits(&self) -> MeterLimits {
        self.limits
    }
}

impl Default for RandomMeter {
    fn default() -> Self {
        Self::new(MeterLimits::default())
    }
}

impl MeterSource for RandomMeter {
    fn read(&mut self, _consumer: &Consumer) -> MeterReading {
        let units_consumed = if self.limits.max_units == 0 {
            0
        } else {
            self.rng.gen_range(0..self.limits.max_units)
        };

        let max_cents = self.limits.max_adjustment_cents();
        let adjustment = if max_cents <= 0 {
            Money::zero()
        } else {
            Money::from_cents(self.rng.gen_range(0..max_cents))
        };

        MeterReading::new(units_consumed, adjustment)
    }
}

/// Returns the same reading for everyone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMeter(pub MeterReading);

impl MeterSource for FixedMeter {
    fn read(&mut self, _consumer: &Consumer) -> MeterReading {
        self.0
    }
}

/// Replays queued readings in order, then falls back to a default
#[derive(Debug, Clone, Default)]
pub struct ScriptedMeter {
    readings: VecDeque<MeterReading>,
    fallback: MeterReading,
}

impl ScriptedMeter {
    pub fn new(readings: impl IntoIterator<Item = MeterReading>) -> Self {
        Self {
            readings: readings.into_iter().collect(),
            fallback: MeterReading::zero(),
        }
    }

    /// Sets the reading used once the queue is exhausted
    pub fn with_fallback(mut self, fallback: MeterReading) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn remaining(&self) -> usize {
        self.readings.len()
    }
}

impl MeterSource for ScriptedMeter {
    fn read(&mut self, _consumer: &Consumer) -> MeterReading {
        self.readings.pop_front().unwrap_or(self.fallback)
    }
}
