//! Simulation engine for the renter and homeowner balance sheets

mod amortization;
mod state;
mod engine;
mod ledger;

pub use amortization::{annuity_payment, effective_annual_factor, monthly_rate, Mortgage};
pub use state::{month_abbrev, net_worth, Actor, ActorState, Calendar};
pub use engine::{SimulationEngine, SimulationConfig};
pub use ledger::{round_cents, LedgerRow, NetWorthPoint, SimulationResult, SimulationSummary};
