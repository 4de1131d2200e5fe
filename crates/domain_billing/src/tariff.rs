//! Tariff applied when a monthly bill is generated
//!
//! Taxes are levied on the previous bill's total plus the new adjustment,
//! and the fixed charge is carried forward unchanged:
//!
//! ```text
//! taxes = (previous_total + adjustment) * tax_rate
//! total = previous_fixed_charge + units * unit_rate + taxes + adjustment
//! ```

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};
use crate::bill::{Bill, Charges};
use crate::meter::MeterReading;

/// Unit and tax rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    /// Charge per consumed unit
    pub unit_rate: Money,
    /// Tax rate
    pub tax_rate: Rate,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            unit_rate: Money::from_dollars(10),
            tax_rate: Rate::new(dec!(0.025)),
        }
    }
}

impl Tariff {
    pub fn new(unit_rate: Money, tax_rate: Rate) -> Self {
        Self { unit_rate, tax_rate }
    }

    /// Computes the next cycle's charges from the previous bill and a reading
    pub fn assess(&self, previous: &Bill, reading: &MeterReading) -> Charges {
        let taxes = self.tax_rate.apply(&(previous.total_amount + reading.adjustment));
        let energy_charge = self.unit_rate.per_unit(reading.units_consumed);

        Charges {
            fixed_charge: previous.fixed_charge,
            units_consumed: reading.units_consumed,
            taxes,
            adjustment: reading.adjustment,
            total_amount: previous.fixed_charge + energy_charge + taxes + reading.adjustment,
        }
    }
}
