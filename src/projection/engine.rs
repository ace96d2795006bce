//! Core simulation engine for the monthly rent vs buy comparison

use chrono::{Datelike, Local};
use log::debug;

use crate::assumptions::{monthly_property_tax, Assumptions};
use crate::error::Result;
use crate::params::SimulationParameters;
use super::amortization::Mortgage;
use super::ledger::{LedgerRow, NetWorthPoint, SimulationResult};
use super::state::{Actor, ActorState, Calendar};

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Calendar year of the first simulated month (always January)
    pub start_year: i32,

    /// Whether to keep the month-by-month ledger
    pub detailed_output: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            start_year: Local::now().year(),
            detailed_output: true,
        }
    }
}

impl SimulationConfig {
    pub fn starting(start_year: i32) -> Self {
        Self {
            start_year,
            ..Default::default()
        }
    }
}

/// Recurring monthly costs fixed for the whole run
#[derive(Debug, Clone, Copy)]
struct MonthlyCosts {
    renter: f64,
    homeowner: f64,
    property_tax: f64,
    insurance_premium: f64,
}

/// Main simulation engine
pub struct SimulationEngine {
    assumptions: Assumptions,
    config: SimulationConfig,
}

impl SimulationEngine {
    /// Create a new simulation engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: SimulationConfig) -> Self {
        Self { assumptions, config }
    }

    /// Run the full term for one parameter set
    pub fn run(&self, params: &SimulationParameters) -> Result<SimulationResult> {
        params.validate()?;
        self.assumptions.validate()?;

        let term_months = params.term_months();
        let mortgage = Mortgage::new(
            params.original_principal(),
            params.mortgage_rate_percent,
            term_months,
        );

        let mut renter = ActorState::opening(Actor::Renter, params);
        let mut homeowner = ActorState::opening(Actor::Homeowner, params);

        let costs = self.monthly_costs(params, &mortgage, homeowner.liability);
        let housing_budget = costs.renter.max(costs.homeowner);

        debug!(
            "payment={:.2} premium={:.2} tax={:.2} budget={:.2} months={}",
            mortgage.payment, costs.insurance_premium, costs.property_tax, housing_budget, term_months
        );

        let growth = self.assumptions.growth;
        let mut calendar = Calendar::starting(self.config.start_year);

        let mut result = SimulationResult {
            ledger: Vec::with_capacity(if self.config.detailed_output { term_months as usize } else { 0 }),
            net_worth: Vec::with_capacity(term_months as usize / 3),
            housing_budget,
            monthly_payment: mortgage.payment,
            mortgage_insurance_premium: costs.insurance_premium,
            monthly_property_tax: costs.property_tax,
            total_interest_paid: 0.0,
            total_equity_built: 0.0,
            months_simulated: 0,
            final_homeowner: homeowner,
            final_renter: renter,
        };

        for _month in 0..term_months {
            // Split is taken on the opening balance, before this month's repayment
            let (interest, equity) = mortgage.split_payment(homeowner.liability);

            let mut renter_budget = housing_budget;
            let mut homeowner_budget = housing_budget;

            // Growth applies to last month's balances before the budget lands
            let (renter_investment_growth, renter_property_growth) = renter.grow(
                growth.monthly_investment_growth,
                growth.monthly_real_estate_growth,
            );
            let (homeowner_investment_growth, homeowner_property_growth) = homeowner.grow(
                growth.monthly_investment_growth,
                growth.monthly_real_estate_growth,
            );

            homeowner.liability -= equity;

            renter_budget -= costs.renter;
            homeowner_budget -= costs.homeowner;
            homeowner_budget += params.tenant_income;

            renter.absorb(renter_budget);
            homeowner.absorb(homeowner_budget);

            result.total_interest_paid += interest;
            result.total_equity_built += equity;
            result.months_simulated += 1;

            if self.config.detailed_output {
                result.add_row(LedgerRow {
                    year: calendar.year,
                    month: calendar.month,
                    mortgage_payment: mortgage.payment,
                    interest_paid: interest,
                    equity_built: equity,
                    homeowner_investment_growth,
                    homeowner_property_growth,
                    renter_investment_growth,
                    renter_property_growth,
                });
            }

            if calendar.advance() {
                result
                    .net_worth
                    .push(NetWorthPoint::new(calendar.quarter_label(), &homeowner, &renter));
            }
        }

        result.final_homeowner = homeowner;
        result.final_renter = renter;

        Ok(result)
    }

    /// Derive each actor's recurring monthly cost from month-one figures
    fn monthly_costs(
        &self,
        params: &SimulationParameters,
        mortgage: &Mortgage,
        initial_liability: f64,
    ) -> MonthlyCosts {
        let property_tax = monthly_property_tax(self.assumptions.property_tax_rate, params.home_price);
        let insurance_premium = self.assumptions.mortgage_insurance.monthly_premium(
            params.has_mortgage_insurance,
            initial_liability,
            params.home_price,
            mortgage.term_months,
        );

        MonthlyCosts {
            renter: params.renter_monthly_costs(),
            homeowner: mortgage.payment
                + property_tax
                + insurance_premium
                + params.homeowner_running_costs(),
            property_tax,
            insurance_premium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::state::net_worth;
    use crate::SimulationError;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn engine() -> SimulationEngine {
        SimulationEngine::new(Assumptions::default_model(), SimulationConfig::starting(2026))
    }

    #[test]
    fn test_simulation_runs() {
        let params = SimulationParameters::reference();
        let result = engine().run(&params).unwrap();

        assert_eq!(result.ledger.len(), 300);
        assert_eq!(result.net_worth.len(), 100);
        assert_eq!(result.months_simulated, 300);
    }

    #[test]
    fn test_reference_budget() {
        let result = engine().run(&SimulationParameters::reference()).unwrap();

        assert_relative_eq!(result.monthly_payment, 3071.071793648324, epsilon = 1e-6);
        assert_abs_diff_eq!(result.mortgage_insurance_premium, 38.4, epsilon = 1e-9);
        assert_abs_diff_eq!(result.monthly_property_tax, 328.59, epsilon = 1e-9);

        // Owning costs more than renting, so the owner's cost sets the budget
        let expected = result.monthly_payment + 200.0 + 328.59 + 38.4 + 250.0 + 400.0;
        assert_abs_diff_eq!(result.housing_budget, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_term_is_empty() {
        let params = SimulationParameters {
            mortgage_years: 0,
            ..SimulationParameters::reference()
        };
        let result = engine().run(&params).unwrap();

        assert!(result.ledger.is_empty());
        assert!(result.net_worth.is_empty());
        assert_eq!(result.final_renter, ActorState::opening(Actor::Renter, &params));
    }

    #[test]
    fn test_series_lengths() {
        for years in [1, 7, 15, 30] {
            let params = SimulationParameters {
                mortgage_years: years,
                ..SimulationParameters::reference()
            };
            let result = engine().run(&params).unwrap();

            assert_eq!(result.ledger.len(), (years * 12) as usize);
            assert_eq!(result.net_worth.len(), (years * 12 / 3) as usize);
        }
    }

    #[test]
    fn test_amortization_closes() {
        let params = SimulationParameters::reference();
        let result = engine().run(&params).unwrap();

        let equity: f64 = result.ledger.iter().map(|r| r.equity_built).sum();
        let initial = params.original_principal();

        assert_abs_diff_eq!(equity, initial - result.final_homeowner.liability, epsilon = 1e-6);
        assert_abs_diff_eq!(result.final_homeowner.liability, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(result.total_equity_built, equity, epsilon = 1e-9);
    }

    #[test]
    fn test_liability_decreases_monotonically() {
        let result = engine().run(&SimulationParameters::reference()).unwrap();
        assert!(result.ledger.iter().all(|r| r.equity_built > 0.0));
        assert!(result.ledger.windows(2).all(|w| w[1].interest_paid < w[0].interest_paid));
    }

    #[test]
    fn test_paid_in_full_has_no_premium() {
        let params = SimulationParameters {
            down_payment: 600_000.0,
            has_mortgage_insurance: true,
            ..SimulationParameters::reference()
        };
        let result = engine().run(&params).unwrap();

        assert_eq!(result.mortgage_insurance_premium, 0.0);
        assert_eq!(result.monthly_payment, 0.0);
        assert_eq!(result.final_homeowner.liability, 0.0);
    }

    #[test]
    fn test_renter_never_owns_property() {
        let result = engine().run(&SimulationParameters::reference()).unwrap();

        assert!(result.ledger.iter().all(|r| r.renter_property_growth == 0.0));
        assert_eq!(result.final_renter.property_assets, 0.0);
        assert_eq!(result.final_renter.liability, 0.0);
    }

    #[test]
    fn test_repeat_runs_identical() {
        let params = SimulationParameters::reference();
        let first = engine().run(&params).unwrap();
        let second = engine().run(&params).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_first_month() {
        let params = SimulationParameters::reference();
        let result = engine().run(&params).unwrap();
        let row = &result.ledger[0];

        assert_eq!(row.year, 2026);
        assert_eq!(row.month, chrono::Month::January);

        // Growth is measured on the opening balances
        assert_abs_diff_eq!(row.renter_investment_growth, 122_000.0 * 0.006, epsilon = 1e-6);
        assert_eq!(row.homeowner_investment_growth, 0.0);
        assert_abs_diff_eq!(row.homeowner_property_growth, 600_000.0 * 0.0015697, epsilon = 1e-6);

        assert_relative_eq!(row.interest_paid, 480_000.0 * 0.004938622031196882, epsilon = 1e-9);
        assert_abs_diff_eq!(row.interest_paid + row.equity_built, row.mortgage_payment, epsilon = 1e-9);
    }

    #[test]
    fn test_surplus_goes_to_cheaper_actor() {
        // Owner's costs set the budget; the renter banks the difference
        let params = SimulationParameters {
            mortgage_years: 1,
            tenant_income: 0.0,
            ..SimulationParameters::reference()
        };
        let result = engine().run(&params).unwrap();

        let surplus = result.housing_budget - params.renter_monthly_costs();
        let mut renter = ActorState::opening(Actor::Renter, &params);
        for _ in 0..12 {
            renter.grow(1.006, 1.0015697);
            renter.absorb(surplus);
        }

        assert_relative_eq!(result.final_renter.liquid_assets, renter.liquid_assets, epsilon = 1e-12);
        assert_abs_diff_eq!(result.final_homeowner.liquid_assets, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_quarter_labels() {
        let params = SimulationParameters {
            mortgage_years: 2,
            ..SimulationParameters::reference()
        };
        let result = engine().run(&params).unwrap();
        let labels: Vec<&str> = result.net_worth.iter().map(|p| p.quarter.as_str()).collect();

        assert_eq!(
            labels,
            vec!["2026 Q2", "2026 Q3", "2026 Q4", "2027 Q1", "2027 Q2", "2027 Q3", "2027 Q4", "2028 Q1"]
        );
    }

    #[test]
    fn test_net_worth_points_match_state() {
        let params = SimulationParameters {
            mortgage_years: 5,
            ..SimulationParameters::reference()
        };
        let result = engine().run(&params).unwrap();
        let last = result.net_worth.last().unwrap();

        assert_abs_diff_eq!(last.homeowner, net_worth(&result.final_homeowner), epsilon = 0.005);
        assert_abs_diff_eq!(last.renter, net_worth(&result.final_renter), epsilon = 0.005);
    }

    #[test]
    fn test_summary_without_ledger() {
        let config = SimulationConfig {
            start_year: 2026,
            detailed_output: false,
        };
        let engine = SimulationEngine::new(Assumptions::default_model(), config);
        let result = engine.run(&SimulationParameters::reference()).unwrap();

        assert!(result.ledger.is_empty());
        assert_eq!(result.net_worth.len(), 100);

        let summary = result.summary();
        assert_eq!(summary.total_months, 300);
        assert_abs_diff_eq!(summary.total_equity_built, 480_000.0, epsilon = 1e-4);
        assert_abs_diff_eq!(
            summary.total_interest_paid,
            300.0 * result.monthly_payment - 480_000.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let params = SimulationParameters {
            down_payment: -5.0,
            ..SimulationParameters::reference()
        };
        assert!(matches!(
            engine().run(&params),
            Err(SimulationError::InvalidParameter { field: "down_payment", .. })
        ));
    }

    #[test]
    fn test_overlong_term_rejected_before_loop() {
        let params = SimulationParameters {
            mortgage_years: 400_000_000,
            ..SimulationParameters::reference()
        };
        assert!(matches!(
            engine().run(&params),
            Err(SimulationError::InvalidParameter { field: "mortgage_years", .. })
        ));
    }
}
