//! Simulation parameter record shared by both actors

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Longest mortgage term accepted, in years
pub const MAX_MORTGAGE_YEARS: u32 = 100;

/// Immutable input record for one rent vs buy comparison
///
/// All currency amounts are per month unless the name says otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    // Shared
    /// Cash the buyer puts down; the renter invests it instead
    pub down_payment: f64,

    // Homeowner
    pub home_price: f64,
    /// Nominal annual mortgage rate in percent (6.0 = 6%)
    pub mortgage_rate_percent: f64,
    pub mortgage_years: u32,
    /// Rental income the owner receives from tenants
    pub tenant_income: f64,
    pub has_mortgage_insurance: bool,
    pub home_maintenance_budget: f64,
    pub home_owners_insurance: f64,
    /// One-time legal and closing fees paid by the buyer
    pub homebuyer_legal_fees: f64,
    pub home_owner_utilities: f64,
    pub home_owner_other_expenses: f64,

    // Renter
    pub monthly_rent: f64,
    pub renters_insurance: f64,
    pub renter_utilities: f64,
    pub renter_other_expenses: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::reference()
    }
}

impl SimulationParameters {
    /// Reference scenario: $600k home, 20% down, 6% over 25 years
    pub fn reference() -> Self {
        Self {
            down_payment: 120_000.0,
            home_price: 600_000.0,
            mortgage_rate_percent: 6.0,
            mortgage_years: 25,
            tenant_income: 1_500.0,
            has_mortgage_insurance: true,
            home_maintenance_budget: 400.0,
            home_owners_insurance: 200.0,
            homebuyer_legal_fees: 2_000.0,
            home_owner_utilities: 250.0,
            home_owner_other_expenses: 0.0,
            monthly_rent: 2_500.0,
            renters_insurance: 20.0,
            renter_utilities: 0.0,
            renter_other_expenses: 0.0,
        }
    }

    /// Number of monthly iterations the simulation runs
    ///
    /// Saturates rather than wrapping; `validate` rejects terms that long.
    pub fn term_months(&self) -> u32 {
        self.mortgage_years.saturating_mul(12)
    }

    /// Amount borrowed at closing
    pub fn original_principal(&self) -> f64 {
        self.home_price - self.down_payment
    }

    /// Renter's total recurring monthly cost
    pub fn renter_monthly_costs(&self) -> f64 {
        self.monthly_rent + self.renters_insurance + self.renter_utilities + self.renter_other_expenses
    }

    /// Homeowner's recurring costs that do not depend on the mortgage or tax model
    pub fn homeowner_running_costs(&self) -> f64 {
        self.home_owners_insurance
            + self.home_maintenance_budget
            + self.home_owner_utilities
            + self.home_owner_other_expenses
    }

    /// Check ranges before the simulation loop runs
    ///
    /// A zero rate is accepted (the payment degenerates to principal / n).
    /// A zero-year term is accepted and produces empty output.
    pub fn validate(&self) -> Result<()> {
        let currency_fields = [
            ("down_payment", self.down_payment),
            ("tenant_income", self.tenant_income),
            ("home_maintenance_budget", self.home_maintenance_budget),
            ("home_owners_insurance", self.home_owners_insurance),
            ("homebuyer_legal_fees", self.homebuyer_legal_fees),
            ("home_owner_utilities", self.home_owner_utilities),
            ("home_owner_other_expenses", self.home_owner_other_expenses),
            ("monthly_rent", self.monthly_rent),
            ("renters_insurance", self.renters_insurance),
            ("renter_utilities", self.renter_utilities),
            ("renter_other_expenses", self.renter_other_expenses),
            ("mortgage_rate_percent", self.mortgage_rate_percent),
        ];

        for (field, value) in currency_fields {
            if !value.is_finite() {
                return Err(SimulationError::invalid(field, value, "must be finite"));
            }
            if value < 0.0 {
                return Err(SimulationError::invalid(field, value, "must not be negative"));
            }
        }

        if !self.home_price.is_finite() || self.home_price <= 0.0 {
            return Err(SimulationError::invalid(
                "home_price",
                self.home_price,
                "must be a positive finite amount",
            ));
        }

        if self.mortgage_years > MAX_MORTGAGE_YEARS {
            return Err(SimulationError::invalid(
                "mortgage_years",
                self.mortgage_years as f64,
                "must be at most 100",
            ));
        }

        if self.down_payment > self.home_price {
            return Err(SimulationError::DownPaymentExceedsPrice {
                down_payment: self.down_payment,
                home_price: self.home_price,
            });
        }

        Ok(())
    }
}
