//! Rent vs Buy - month-by-month balance sheet simulation for a renter and a homeowner
//!
//! This library provides:
//! - Mortgage amortization with semi-annual compounding rate conversion
//! - Mortgage insurance premium lookup by loan-to-value tier
//! - A deterministic monthly simulation of both actors' assets and liabilities
//! - Monthly ledger and quarterly net worth output series
//! - Batch and rate-sweep scenario runs

pub mod error;
pub mod params;
pub mod assumptions;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::SimulationError;
pub use params::SimulationParameters;
pub use assumptions::{Assumptions, MarketGrowth, MortgageInsuranceSchedule};
pub use projection::{SimulationEngine, SimulationConfig, SimulationResult, LedgerRow, NetWorthPoint};
pub use scenario::ScenarioRunner;
