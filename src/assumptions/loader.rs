//! CSV-based assumption loader
//!
//! Loads model assumptions from CSV files in data/assumptions/

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, SimulationError};

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// Load mortgage insurance tiers from CSV
/// Returns Vec<(max_ltv, annual_rate)> in file order
pub fn load_insurance_tiers(path: &Path) -> Result<Vec<(f64, f64)>> {
    let file = File::open(path.join("mortgage_insurance_tiers.csv"))?;
    load_insurance_tiers_from_reader(file)
}

/// Load mortgage insurance tiers from any reader
pub fn load_insurance_tiers_from_reader<R: Read>(reader: R) -> Result<Vec<(f64, f64)>> {
    let mut reader = csv::Reader::from_reader(reader);

    let mut tiers = Vec::new();

    for result in reader.records() {
        let record = result?;
        let max_ltv = parse_field(column(&record, 0, "max_ltv")?, "max_ltv")?;
        let rate = parse_field(column(&record, 1, "annual_rate")?, "annual_rate")?;
        tiers.push((max_ltv, rate));
    }

    Ok(tiers)
}

/// Load named market assumptions from CSV
/// Returns HashMap<name, value>
pub fn load_market_assumptions(path: &Path) -> Result<HashMap<String, f64>> {
    let file = File::open(path.join("market_assumptions.csv"))?;
    load_market_assumptions_from_reader(file)
}

/// Load named market assumptions from any reader
pub fn load_market_assumptions_from_reader<R: Read>(reader: R) -> Result<HashMap<String, f64>> {
    let mut reader = csv::Reader::from_reader(reader);

    let mut values = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let name = column(&record, 0, "market assumption name")?.trim().to_string();
        let value = parse_field(column(&record, 1, "value")?, "market assumption value")?;
        values.insert(name, value);
    }

    Ok(values)
}

fn column<'r>(record: &'r csv::StringRecord, index: usize, what: &'static str) -> Result<&'r str> {
    record.get(index).ok_or_else(|| SimulationError::Parse {
        what,
        value: format!("missing column {} in {:?}", index + 1, record),
    })
}

fn parse_field(raw: &str, what: &'static str) -> Result<f64> {
    raw.trim().parse().map_err(|_| SimulationError::Parse {
        what,
        value: raw.to_string(),
    })
}

/// All assumptions read from a directory
pub struct LoadedAssumptions {
    pub insurance_tiers: Vec<(f64, f64)>,
    pub market: HashMap<String, f64>,
}

impl LoadedAssumptions {
    /// Load all assumptions from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all assumptions from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(Self {
            insurance_tiers: load_insurance_tiers(path)?,
            market: load_market_assumptions(path)?,
        })
    }
}
