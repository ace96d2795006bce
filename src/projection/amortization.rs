//! Fixed-payment mortgage amortization
//!
//! Quoted mortgage rates are nominal annual rates compounded semi-annually.
//! The monthly rate is the twelfth root of the effective annual rate, not
//! the quoted rate divided by twelve.

/// Effective annual rate for a nominal rate compounded twice a year
///
/// Returned as a growth factor: 6% nominal gives 1.0609.
pub fn effective_annual_factor(nominal_rate_percent: f64) -> f64 {
    (1.0 + nominal_rate_percent * 0.005).powi(2)
}

/// Monthly periodic rate equivalent to a semi-annually compounded nominal rate
pub fn monthly_rate(nominal_rate_percent: f64) -> f64 {
    effective_annual_factor(nominal_rate_percent).powf(1.0 / 12.0) - 1.0
}

/// Level payment that retires `principal` over `months` at `rate` per month
///
/// A zero rate falls back to straight-line repayment. Zero months has no payment.
pub fn annuity_payment(principal: f64, rate: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    if rate == 0.0 {
        return principal / months as f64;
    }

    let growth = (1.0 + rate).powi(months as i32);
    principal * (rate * growth) / (growth - 1.0)
}

/// Loan terms derived once before the simulation loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mortgage {
    pub principal: f64,
    pub monthly_rate: f64,
    pub term_months: u32,
    pub payment: f64,
}

impl Mortgage {
    pub fn new(principal: f64, nominal_rate_percent: f64, term_months: u32) -> Self {
        let monthly_rate = monthly_rate(nominal_rate_percent);
        Self {
            principal,
            monthly_rate,
            term_months,
            payment: annuity_payment(principal, monthly_rate, term_months),
        }
    }

    /// Interest charged on a balance for one month
    pub fn interest_on(&self, balance: f64) -> f64 {
        balance * self.monthly_rate
    }

    /// Split of this month's payment into (interest, equity) for a balance
    pub fn split_payment(&self, balance: f64) -> (f64, f64) {
        let interest = self.interest_on(balance);
        (interest, self.payment - interest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_semi_annual_conversion() {
        assert_relative_eq!(effective_annual_factor(6.0), 1.0609, epsilon = 1e-12);
        assert_relative_eq!(monthly_rate(6.0), 0.004938622031196882, epsilon = 1e-12);

        // Not the same as a simple nominal / 12 rate
        assert!((monthly_rate(6.0) - 0.005).abs() > 1e-5);
    }

    #[test]
    fn test_reference_payment() {
        let mortgage = Mortgage::new(480_000.0, 6.0, 300);
        assert_relative_eq!(mortgage.payment, 3071.071793648324, epsilon = 1e-6);
        assert!(mortgage.payment > 3065.0 && mortgage.payment < 3100.0);
    }

    #[test]
    fn test_payment_retires_principal() {
        let mortgage = Mortgage::new(250_000.0, 4.5, 240);
        let mut balance = mortgage.principal;

        for _ in 0..mortgage.term_months {
            let (_, equity) = mortgage.split_payment(balance);
            balance -= equity;
        }

        assert_abs_diff_eq!(balance, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let mortgage = Mortgage::new(120_000.0, 0.0, 120);
        assert_eq!(mortgage.monthly_rate, 0.0);
        assert_eq!(mortgage.payment, 1_000.0);
        assert_eq!(mortgage.split_payment(60_000.0), (0.0, 1_000.0));
    }

    #[test]
    fn test_zero_term() {
        assert_eq!(annuity_payment(480_000.0, 0.004, 0), 0.0);
    }
}
