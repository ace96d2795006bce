//! Mortgage default insurance premium schedule by loan-to-value tier

use log::warn;

/// Premium tiers keyed by maximum loan-to-value ratio
///
/// Tiers are kept sorted by `max_ltv` and evaluated low to high; the first
/// tier whose ceiling is at or above the LTV wins.
#[derive(Debug, Clone, PartialEq)]
pub struct MortgageInsuranceSchedule {
    /// (max_ltv, annual premium rate of the insured loan)
    tiers: Vec<(f64, f64)>,
}

impl Default for MortgageInsuranceSchedule {
    fn default() -> Self {
        Self {
            tiers: vec![
                (0.65, 0.006),
                (0.75, 0.017),
                (0.80, 0.024),
                (0.85, 0.028),
                (0.90, 0.031),
                (0.95, 0.040),
            ],
        }
    }
}

impl MortgageInsuranceSchedule {
    /// Create from loaded CSV data
    pub fn from_loaded(tiers: &[(f64, f64)]) -> Self {
        let mut tiers = tiers.to_vec();
        tiers.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { tiers }
    }

    pub fn tiers(&self) -> &[(f64, f64)] {
        &self.tiers
    }

    /// Annual premium rate for a loan-to-value ratio, if any tier covers it
    pub fn annual_rate(&self, loan_to_value: f64) -> Option<f64> {
        self.tiers
            .iter()
            .find(|(max_ltv, _)| loan_to_value <= *max_ltv)
            .map(|(_, rate)| *rate)
    }

    /// Monthly premium for the whole amortization
    ///
    /// Evaluated once from the balance at closing and held constant for the
    /// term. An LTV above every tier is uninsurable here and costs nothing.
    pub fn monthly_premium(
        &self,
        enabled: bool,
        initial_liability: f64,
        home_price: f64,
        term_months: u32,
    ) -> f64 {
        if !enabled || term_months == 0 {
            return 0.0;
        }

        let loan_to_value = initial_liability / home_price;

        match self.annual_rate(loan_to_value) {
            Some(rate) => rate * initial_liability / term_months as f64,
            None => {
                warn!(
                    "Loan-to-value {:.4} is above every insurance tier, premium set to 0",
                    loan_to_value
                );
                0.0
            }
        }
    }
}
