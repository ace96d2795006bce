//! Model assumptions: market growth, property tax, and mortgage insurance tiers

mod growth;
mod insurance;
pub mod loader;

pub use growth::{MarketGrowth, monthly_property_tax, DEFAULT_PROPERTY_TAX_RATE};
pub use insurance::MortgageInsuranceSchedule;
pub use loader::LoadedAssumptions;

use std::path::Path;

use crate::error::{Result, SimulationError};

/// Container for all simulation assumptions
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    pub growth: MarketGrowth,
    /// Annual property tax as a fraction of the home price
    pub property_tax_rate: f64,
    pub mortgage_insurance: MortgageInsuranceSchedule,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_model()
    }
}

impl Assumptions {
    /// Built-in assumptions: long-run index and housing growth, single residential tax rate
    pub fn default_model() -> Self {
        Self {
            growth: MarketGrowth::default(),
            property_tax_rate: DEFAULT_PROPERTY_TAX_RATE,
            mortgage_insurance: MortgageInsuranceSchedule::default(),
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    ///
    /// Market values missing from the file keep their built-in defaults.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedAssumptions::load_from(path)?;
        Self::from_loaded(&loaded)
    }

    pub fn from_loaded(loaded: &LoadedAssumptions) -> Result<Self> {
        let mut assumptions = Self::default_model();

        for (name, &value) in &loaded.market {
            match name.as_str() {
                "monthly_investment_growth" => assumptions.growth.monthly_investment_growth = value,
                "monthly_real_estate_growth" => assumptions.growth.monthly_real_estate_growth = value,
                "property_tax_rate" => assumptions.property_tax_rate = value,
                other => return Err(SimulationError::UnknownAssumption(other.to_string())),
            }
        }

        assumptions.mortgage_insurance = MortgageInsuranceSchedule::from_loaded(&loaded.insurance_tiers);

        assumptions.validate()?;
        Ok(assumptions)
    }

    /// Reject values that would push non-finite numbers into the engine
    pub fn validate(&self) -> Result<()> {
        let factors = [
            ("monthly_investment_growth", self.growth.monthly_investment_growth),
            ("monthly_real_estate_growth", self.growth.monthly_real_estate_growth),
        ];
        for (field, value) in factors {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::invalid(field, value, "must be a positive finite factor"));
            }
        }

        if !self.property_tax_rate.is_finite() || self.property_tax_rate < 0.0 {
            return Err(SimulationError::invalid(
                "property_tax_rate",
                self.property_tax_rate,
                "must be a non-negative finite rate",
            ));
        }

        let tiers = self.mortgage_insurance.tiers();
        if tiers.is_empty() {
            return Err(SimulationError::invalid(
                "mortgage_insurance_tiers",
                0.0,
                "at least one tier is required",
            ));
        }
        for &(max_ltv, rate) in tiers {
            if !max_ltv.is_finite() || max_ltv < 0.0 {
                return Err(SimulationError::invalid("max_ltv", max_ltv, "must be a non-negative finite ratio"));
            }
            if !rate.is_finite() || rate < 0.0 {
                return Err(SimulationError::invalid("annual_rate", rate, "must be a non-negative finite rate"));
            }
        }

        Ok(())
    }
}
