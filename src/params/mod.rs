//! Simulation parameters and scenario loading

mod data;
pub mod loader;

pub use data::{SimulationParameters, MAX_MORTGAGE_YEARS};
pub use loader::{load_parameter_sets, load_parameter_sets_from_reader, load_parameters_json, NamedScenario};
