//! Error types for parameter validation and data loading

use thiserror::Error;

/// Errors that can occur while preparing or running a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid parameter {field}: {value} ({reason})")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Down payment {down_payment} exceeds home price {home_price}")]
    DownPaymentExceedsPrice { down_payment: f64, home_price: f64 },

    #[error("Unknown market assumption: {0}")]
    UnknownAssumption(String),

    #[error("Failed to parse {what}: {value}")]
    Parse { what: &'static str, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimulationError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        SimulationError::InvalidParameter { field, value, reason }
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
