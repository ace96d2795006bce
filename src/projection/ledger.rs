//! Simulation output: monthly ledger, quarterly net worth, and summary

use chrono::Month;
use serde::{Deserialize, Serialize};
use std::io::Write;

use super::state::{month_abbrev, net_worth, ActorState};
use crate::error::Result;

/// One simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    // Timing
    pub year: i32,
    pub month: Month,

    // Mortgage
    pub mortgage_payment: f64,
    pub interest_paid: f64,
    pub equity_built: f64,

    // Growth applied this month
    pub homeowner_investment_growth: f64,
    pub homeowner_property_growth: f64,
    pub renter_investment_growth: f64,
    pub renter_property_growth: f64,
}

/// Net worth of both actors at the start of a quarter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthPoint {
    /// e.g. "2027 Q1"
    pub quarter: String,
    pub homeowner: f64,
    pub renter: f64,
}

impl NetWorthPoint {
    pub fn new(quarter: String, homeowner: &ActorState, renter: &ActorState) -> Self {
        Self {
            quarter,
            homeowner: round_cents(net_worth(homeowner)),
            renter: round_cents(net_worth(renter)),
        }
    }
}

/// Round a currency amount to two decimal places
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Complete result of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Monthly rows (empty when detailed output is off)
    pub ledger: Vec<LedgerRow>,

    /// Quarterly net worth series
    pub net_worth: Vec<NetWorthPoint>,

    /// Monthly amount both actors start each month with
    pub housing_budget: f64,

    /// Fixed monthly mortgage payment
    pub monthly_payment: f64,

    /// Fixed monthly mortgage insurance premium
    pub mortgage_insurance_premium: f64,

    pub monthly_property_tax: f64,

    pub total_interest_paid: f64,
    pub total_equity_built: f64,

    pub months_simulated: u32,

    /// Balance sheets after the last month
    pub final_homeowner: ActorState,
    pub final_renter: ActorState,
}

impl SimulationResult {
    /// Add a ledger row
    pub fn add_row(&mut self, row: LedgerRow) {
        self.ledger.push(row);
    }

    /// First quarter at which owning has caught up with renting
    pub fn break_even_quarter(&self) -> Option<&str> {
        self.net_worth
            .iter()
            .find(|p| p.homeowner >= p.renter)
            .map(|p| p.quarter.as_str())
    }

    /// Get summary statistics
    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            total_months: self.months_simulated,
            housing_budget: self.housing_budget,
            monthly_payment: self.monthly_payment,
            total_interest_paid: self.total_interest_paid,
            total_equity_built: self.total_equity_built,
            final_homeowner_net_worth: net_worth(&self.final_homeowner),
            final_renter_net_worth: net_worth(&self.final_renter),
            break_even_quarter: self.break_even_quarter().map(str::to_string),
        }
    }

    /// Write the monthly ledger as CSV, amounts to the cent
    pub fn write_ledger_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record([
            "Year",
            "Month",
            "MortgagePayment",
            "InterestPaid",
            "EquityBuilt",
            "HomeownerInvestmentGrowth",
            "HomeownerHomeValueGrowth",
            "RenterInvestmentGrowth",
            "RenterHomeValueGrowth",
        ])?;

        for row in &self.ledger {
            csv.write_record([
                row.year.to_string(),
                month_abbrev(row.month),
                format!("{:.2}", row.mortgage_payment),
                format!("{:.2}", row.interest_paid),
                format!("{:.2}", row.equity_built),
                format!("{:.2}", row.homeowner_investment_growth),
                format!("{:.2}", row.homeowner_property_growth),
                format!("{:.2}", row.renter_investment_growth),
                format!("{:.2}", row.renter_property_growth),
            ])?;
        }

        csv.flush()?;
        Ok(())
    }

    /// Write the quarterly net worth series as CSV
    pub fn write_net_worth_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(["Quarter", "Homeowner", "Renter"])?;
        for point in &self.net_worth {
            csv.write_record([
                point.quarter.clone(),
                format!("{:.2}", point.homeowner),
                format!("{:.2}", point.renter),
            ])?;
        }

        csv.flush()?;
        Ok(())
    }
}

/// Summary statistics for a simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub total_months: u32,
    pub housing_budget: f64,
    pub monthly_payment: f64,
    pub total_interest_paid: f64,
    pub total_equity_built: f64,
    pub final_homeowner_net_worth: f64,
    pub final_renter_net_worth: f64,
    pub break_even_quarter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(quarter: &str, homeowner: f64, renter: f64) -> NetWorthPoint {
        NetWorthPoint {
            quarter: quarter.to_string(),
            homeowner,
            renter,
        }
    }

    fn empty_result() -> SimulationResult {
        let zero = ActorState {
            liquid_assets: 0.0,
            property_assets: 0.0,
            liability: 0.0,
        };
        SimulationResult {
            ledger: Vec::new(),
            net_worth: Vec::new(),
            housing_budget: 0.0,
            monthly_payment: 0.0,
            mortgage_insurance_premium: 0.0,
            monthly_property_tax: 0.0,
            total_interest_paid: 0.0,
            total_equity_built: 0.0,
            months_simulated: 0,
            final_homeowner: zero,
            final_renter: zero,
        }
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(1234.5678), 1234.57);
        assert_eq!(round_cents(-0.004), -0.0);
    }

    #[test]
    fn test_break_even() {
        let mut result = empty_result();
        result.net_worth = vec![
            point("2026 Q2", 100.0, 200.0),
            point("2026 Q3", 250.0, 250.0),
            point("2026 Q4", 300.0, 260.0),
        ];

        assert_eq!(result.break_even_quarter(), Some("2026 Q3"));
        assert_eq!(result.summary().break_even_quarter.as_deref(), Some("2026 Q3"));
    }

    #[test]
    fn test_no_break_even() {
        let mut result = empty_result();
        result.net_worth = vec![point("2026 Q2", 100.0, 200.0)];
        assert_eq!(result.break_even_quarter(), None);
    }

    #[test]
    fn test_ledger_csv() {
        let mut result = empty_result();
        result.add_row(LedgerRow {
            year: 2026,
            month: Month::March,
            mortgage_payment: 3071.0718,
            interest_paid: 2370.5386,
            equity_built: 700.5332,
            homeowner_investment_growth: 0.0,
            homeowner_property_growth: 941.82,
            renter_investment_growth: 732.0,
            renter_property_growth: 0.0,
        });

        let mut out = Vec::new();
        result.write_ledger_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Year,Month,MortgagePayment"));
        assert_eq!(lines[1], "2026,MAR,3071.07,2370.54,700.53,0.00,941.82,732.00,0.00");
    }
}
