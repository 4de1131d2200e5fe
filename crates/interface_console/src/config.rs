//! Console configuration

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use core_kernel::{CoreError, Money, Rate};
use domain_billing::{BillingRegistry, MeterLimits, RandomMeter, RegistryBuilder, Tariff};

/// Console configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Charge per consumed unit
    pub unit_rate: Decimal,
    /// Tax rate as a decimal (0.025 for 2.5%)
    pub tax_rate: Decimal,
    /// Exclusive upper bound of simulated units
    pub max_units: u32,
    /// Exclusive upper bound of simulated adjustments
    pub max_adjustment: Decimal,
    /// Seed for reproducible simulated readings
    pub meter_seed: Option<u64>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            unit_rate: dec!(10),
            tax_rate: dec!(0.025),
            max_units: 100,
            max_adjustment: dec!(50),
            meter_seed: None,
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from `BILLING_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix("BILLING"))
    }

    /// Loads configuration from the given environment source
    pub fn from_environment(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Rejects negative rates and meter limits the simulated meter cannot draw from
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.unit_rate.is_sign_negative() {
            return Err(CoreError::configuration(format!("unit_rate must not be negative: {}", self.unit_rate)));
        }
        if self.tax_rate.is_sign_negative() {
            return Err(CoreError::configuration(format!("tax_rate must not be negative: {}", self.tax_rate)));
        }
        let max_adjustment = Money::new(self.max_adjustment);
        if max_adjustment.is_negative() {
            return Err(CoreError::validation(format!("max_adjustment must not be negative: {}", self.max_adjustment)));
        }
        if max_adjustment > MeterLimits::adjustment_ceiling() {
            return Err(CoreError::validation(format!(
                "max_adjustment exceeds {}: {}",
                MeterLimits::adjustment_ceiling(),
                self.max_adjustment
            )));
        }
        Ok(())
    }

    pub fn tariff(&self) -> Tariff {
        Tariff::new(Money::new(self.unit_rate), Rate::new(self.tax_rate))
    }

    pub fn meter_limits(&self) -> MeterLimits {
        MeterLimits {
            max_units: self.max_units,
            max_adjustment: Money::new(self.max_adjustment),
        }
    }

    /// Simulated meter, seeded when `meter_seed` is set
    pub fn meter(&self) -> RandomMeter {
        match self.meter_seed {
            Some(seed) => RandomMeter::seeded(seed, self.meter_limits()),
            None => RandomMeter::new(self.meter_limits()),
        }
    }

    /// Registry builder carrying the configured tariff and meter
    pub fn registry_builder(&self) -> RegistryBuilder {
        BillingRegistry::builder().tariff(self.tariff()).meter(self.meter())
    }
}
