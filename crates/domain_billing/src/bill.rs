//! Bill record and status lifecycle
//!
//! A bill is immutable once issued except for its status, which moves
//! `Pending → Paid` when settled or `Pending → Dismissed` when the next
//! cycle's bill supersedes it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{BillId, Money, Username};
use crate::error::BillingError;

/// Bill status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillStatus {
    /// Awaiting payment
    Pending,
    /// Settled in full
    Paid,
    /// Superseded while still unpaid
    Dismissed,
}

impl BillStatus {
    /// Checks if transition is valid
    pub fn can_transition_to(self, target: BillStatus) -> bool {
        use BillStatus::*;
        matches!((self, target), (Pending, Paid) | (Pending, Dismissed))
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BillStatus::Pending => "Pending",
            BillStatus::Paid => "Paid",
            BillStatus::Dismissed => "Dismissed",
        };
        f.write_str(label)
    }
}

/// Charge components of one billing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charges {
    pub fixed_charge: Money,
    pub units_consumed: u32,
    pub taxes: Money,
    pub adjustment: Money,
    pub total_amount: Money,
}

impl Charges {
    /// Charges of an opening bill: the fixed charge and nothing else
    pub fn opening(fixed_charge: Money) -> Self {
        Self {
            fixed_charge,
            units_consumed: 0,
            taxes: Money::zero(),
            adjustment: Money::zero(),
            total_amount: fixed_charge,
        }
    }
}

/// One billing cycle's charges and payment status for one consumer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Sequential identifier, also the recency order
    pub id: BillId,
    /// Owning consumer
    pub consumer: Username,
    /// Fixed charge carried from cycle to cycle
    pub fixed_charge: Money,
    /// Metered units
    pub units_consumed: u32,
    /// Tax amount
    pub taxes: Money,
    /// Adjustment amount
    pub adjustment: Money,
    /// Total computed at issue time
    pub total_amount: Money,
    /// Status
    status: BillStatus,
    /// Issue timestamp
    pub issued_at: DateTime<Utc>,
}

impl Bill {
    /// Issues a pending bill with the given charges
    pub fn issue(id: BillId, consumer: Username, charges: Charges) -> Self {
        Self {
            id,
            consumer,
            fixed_charge: charges.fixed_charge,
            units_consumed: charges.units_consumed,
            taxes: charges.taxes,
            adjustment: charges.adjustment,
            total_amount: charges.total_amount,
            status: BillStatus::Pending,
            issued_at: Utc::now(),
        }
    }

    /// Issues the first bill of a consumer, seeding the fixed charge
    pub fn opening(id: BillId, consumer: Username, fixed_charge: Money) -> Self {
        Self::issue(id, consumer, Charges::opening(fixed_charge))
    }

    pub fn status(&self) -> BillStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == BillStatus::Pending
    }

    /// Updates the status
    pub fn update_status(&mut self, status: BillStatus) -> Result<(), BillingError> {
        if !self.status.can_transition_to(status) {
            return Err(BillingError::InvalidStatusTransition {
                from: self.status,
                to: status,
            });
        }
        self.status = status;
        Ok(())
    }

    /// Settles the bill
    pub fn mark_paid(&mut self) -> Result<(), BillingError> {
        if self.status == BillStatus::Paid {
            return Err(BillingError::AlreadyPaid(self.id));
        }
        self.update_status(BillStatus::Paid)
    }

    /// Supersedes an unpaid bill
    pub fn dismiss(&mut self) -> Result<(), BillingError> {
        self.update_status(BillStatus::Dismissed)
    }
}
