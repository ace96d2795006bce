//! Scenario runner for batch simulations
//!
//! Builds assumptions once, then runs many parameter sets or rate variations
//! against them in parallel.

use log::info;
use rayon::prelude::*;

use crate::error::Result;
use crate::params::{NamedScenario, SimulationParameters};
use crate::projection::{SimulationConfig, SimulationEngine, SimulationResult};
use crate::Assumptions;

/// Outcome of one named scenario in a batch
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: Result<SimulationResult>,
}

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv()?;
///
/// for outcome in runner.run_batch(&scenarios, SimulationConfig::starting(2026)) {
///     println!("{}: {:?}", outcome.name, outcome.result.map(|r| r.summary()));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Create runner with the built-in assumptions
    pub fn new() -> Self {
        Self {
            base_assumptions: Assumptions::default_model(),
        }
    }

    /// Create runner by loading assumptions from CSV files
    pub fn from_csv() -> Result<Self> {
        Ok(Self {
            base_assumptions: Assumptions::from_csv()?,
        })
    }

    /// Create runner from specific assumptions directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self> {
        Ok(Self {
            base_assumptions: Assumptions::from_csv_path(path)?,
        })
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            base_assumptions: assumptions,
        }
    }

    /// Run a single simulation
    pub fn run(&self, params: &SimulationParameters, config: SimulationConfig) -> Result<SimulationResult> {
        let engine = SimulationEngine::new(self.base_assumptions.clone(), config);
        engine.run(params)
    }

    /// Run every named scenario in parallel, preserving input order
    pub fn run_batch(&self, scenarios: &[NamedScenario], config: SimulationConfig) -> Vec<ScenarioOutcome> {
        info!("Running {} scenarios", scenarios.len());

        let engine = SimulationEngine::new(self.base_assumptions.clone(), config);
        scenarios
            .par_iter()
            .map(|scenario| ScenarioOutcome {
                name: scenario.name.clone(),
                result: engine.run(&scenario.params),
            })
            .collect()
    }

    /// Re-run one parameter set at each mortgage rate (percent)
    pub fn run_rate_sweep(
        &self,
        params: &SimulationParameters,
        rates_percent: &[f64],
        config: SimulationConfig,
    ) -> Vec<Result<SimulationResult>> {
        info!("Sweeping {} mortgage rates", rates_percent.len());

        let engine = SimulationEngine::new(self.base_assumptions.clone(), config);
        rates_percent
            .par_iter()
            .map(|&rate| {
                let swept = SimulationParameters {
                    mortgage_rate_percent: rate,
                    ..params.clone()
                };
                engine.run(&swept)
            })
            .collect()
    }

    /// Get reference to base assumptions for inspection/modification
    pub fn assumptions(&self) -> &Assumptions {
        &self.base_assumptions
    }

    /// Get mutable reference to base assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.base_assumptions
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::net_worth;

    fn config() -> SimulationConfig {
        SimulationConfig::starting(2026)
    }

    #[test]
    fn test_batch_preserves_order_and_errors() {
        let runner = ScenarioRunner::new();
        let scenarios = vec![
            NamedScenario {
                name: "base".to_string(),
                params: SimulationParameters::reference(),
            },
            NamedScenario {
                name: "broken".to_string(),
                params: SimulationParameters {
                    home_price: -1.0,
                    ..SimulationParameters::reference()
                },
            },
            NamedScenario {
                name: "short".to_string(),
                params: SimulationParameters {
                    mortgage_years: 5,
                    ..SimulationParameters::reference()
                },
            },
        ];

        let outcomes = runner.run_batch(&scenarios, config());
        let names: Vec<&str> = outcomes.iter().map(|o| o.name.as_str()).collect();

        assert_eq!(names, vec!["base", "broken", "short"]);
        assert!(outcomes[0].result.is_ok());
        assert!(outcomes[1].result.is_err());
        assert_eq!(outcomes[2].result.as_ref().unwrap().ledger.len(), 60);
    }

    #[test]
    fn test_batch_matches_single_run() {
        let runner = ScenarioRunner::new();
        let params = SimulationParameters::reference();
        let scenarios = vec![NamedScenario {
            name: "base".to_string(),
            params: params.clone(),
        }];

        let single = runner.run(&params, config()).unwrap();
        let batch = runner.run_batch(&scenarios, config());

        assert_eq!(batch[0].result.as_ref().unwrap(), &single);
    }

    #[test]
    fn test_rate_sweep() {
        let runner = ScenarioRunner::new();
        let results = runner.run_rate_sweep(&SimulationParameters::reference(), &[4.0, 6.0, 8.0], config());

        assert_eq!(results.len(), 3);
        let payments: Vec<f64> = results.iter().map(|r| r.as_ref().unwrap().monthly_payment).collect();

        // Higher rates cost more each month
        assert!(payments[0] < payments[1] && payments[1] < payments[2]);

        // The owner's cost sets the shared budget, so a dearer mortgage
        // widens the renter's monthly surplus
        let renter_worth: Vec<f64> = results
            .iter()
            .map(|r| net_worth(&r.as_ref().unwrap().final_renter))
            .collect();
        assert!(renter_worth[2] > renter_worth[0]);
    }

    #[test]
    fn test_custom_assumptions() {
        let mut runner = ScenarioRunner::new();
        runner.assumptions_mut().property_tax_rate = 0.0;

        let result = runner.run(&SimulationParameters::reference(), config()).unwrap();
        assert_eq!(result.monthly_property_tax, 0.0);
    }
}
