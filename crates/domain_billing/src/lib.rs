//! Billing Domain - Utility Bill Ledger
//!
//! This crate implements the billing side of the utility: issuing bills,
//! generating the next cycle for every active consumer, taking payments and
//! reporting on the bill collections.
//!
//! # Bill Lifecycle
//!
//! - **Pending**: issued and awaiting payment
//! - **Paid**: settled in full by the consumer
//! - **Dismissed**: still unpaid when the next cycle's bill superseded it
//!
//! Only a consumer's latest bill (highest [`core_kernel::BillId`]) can be
//! paid. Unpaid amounts are never carried over into the next bill.
//!
//! # Metering
//!
//! Generation reads consumption through a [`MeterSource`]. The default
//! [`RandomMeter`] simulates readings; tests plug in [`FixedMeter`] or
//! [`ScriptedMeter`].
//!
//! # Example
//!
//! ```rust
//! use core_kernel::Money;
//! use domain_billing::{BillingRegistry, BillStatus, FixedMeter, MeterReading};
//! use domain_consumer::NewConsumer;
//!
//! let mut registry = BillingRegistry::builder()
//!     .meter(FixedMeter(MeterReading::new(10, Money::from_dollars(5))))
//!     .build();
//!
//! registry.register_consumer(NewConsumer::new("alice", "secret")).unwrap();
//! registry.issue_opening_bill("alice", Money::from_dollars(20)).unwrap();
//!
//! let generated = registry.generate_monthly_bills();
//! assert_eq!(generated.len(), 1);
//!
//! let total = generated[0].bill.total_amount;
//! let receipt = registry.pay_bill("alice", total).unwrap();
//! assert_eq!(receipt.status, BillStatus::Paid);
//! assert!(receipt.change.is_zero());
//! ```

pub mod admin;
pub mod bill;
pub mod error;
pub mod meter;
pub mod notice;
pub mod registry;
pub mod report;
pub mod shared;
pub mod tariff;

pub use admin::AdminGate;
pub use bill::{Bill, BillStatus, Charges};
pub use error::BillingError;
pub use meter::{FixedMeter, MeterLimits, MeterReading, MeterSource, RandomMeter, ScriptedMeter};
pub use notice::{Notice, Operation, RecordingChannel, ReportChannel, TracingChannel};
pub use registry::{BillingRegistry, BillsByStatus, DeletedConsumer, GeneratedBill, PaymentReceipt, RegistryBuilder};
pub use report::BillSummary;
pub use shared::SharedRegistry;
pub use tariff::Tariff;
