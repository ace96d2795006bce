//! Load simulation parameters from JSON files and scenario CSVs

use super::SimulationParameters;
use crate::error::{Result, SimulationError};
use csv::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Default scenario file used by the batch binary
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.csv";

/// A named parameter set read from one CSV row
#[derive(Debug, Clone)]
pub struct NamedScenario {
    pub name: String,
    pub params: SimulationParameters,
}

/// Raw CSV row matching scenarios.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    scenario: String,
    down_payment: f64,
    home_price: f64,
    mortgage_rate_percent: f64,
    mortgage_years: u32,
    tenant_income: f64,
    has_mortgage_insurance: String,
    home_maintenance_budget: f64,
    home_owners_insurance: f64,
    homebuyer_legal_fees: f64,
    home_owner_utilities: f64,
    home_owner_other_expenses: f64,
    monthly_rent: f64,
    renters_insurance: f64,
    renter_utilities: f64,
    renter_other_expenses: f64,
}

impl CsvRow {
    fn to_scenario(self) -> Result<NamedScenario> {
        let has_mortgage_insurance = match self.has_mortgage_insurance.trim() {
            "true" | "TRUE" | "Y" | "1" => true,
            "false" | "FALSE" | "N" | "0" => false,
            other => {
                return Err(SimulationError::Parse {
                    what: "has_mortgage_insurance",
                    value: other.to_string(),
                })
            }
        };

        Ok(NamedScenario {
            name: self.scenario,
            params: SimulationParameters {
                down_payment: self.down_payment,
                home_price: self.home_price,
                mortgage_rate_percent: self.mortgage_rate_percent,
                mortgage_years: self.mortgage_years,
                tenant_income: self.tenant_income,
                has_mortgage_insurance,
                home_maintenance_budget: self.home_maintenance_budget,
                home_owners_insurance: self.home_owners_insurance,
                homebuyer_legal_fees: self.homebuyer_legal_fees,
                home_owner_utilities: self.home_owner_utilities,
                home_owner_other_expenses: self.home_owner_other_expenses,
                monthly_rent: self.monthly_rent,
                renters_insurance: self.renters_insurance,
                renter_utilities: self.renter_utilities,
                renter_other_expenses: self.renter_other_expenses,
            },
        })
    }
}

/// Load every scenario row from a CSV file
pub fn load_parameter_sets<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>> {
    let file = File::open(path)?;
    load_parameter_sets_from_reader(file)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_parameter_sets_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<NamedScenario>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }

    Ok(scenarios)
}

/// Load a single parameter set from a JSON file
///
/// Missing fields fall back to the reference scenario.
pub fn load_parameters_json<P: AsRef<Path>>(path: P) -> Result<SimulationParameters> {
    let file = File::open(path)?;
    let params = serde_json::from_reader(BufReader::new(file))?;
    Ok(params)
}
