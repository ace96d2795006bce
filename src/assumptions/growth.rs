//! Market growth and property tax assumptions

/// Monthly growth factors applied to each actor's balances
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketGrowth {
    /// Multiplier applied to liquid (stock market) assets each month
    pub monthly_investment_growth: f64,

    /// Multiplier applied to property values each month
    pub monthly_real_estate_growth: f64,
}

impl Default for MarketGrowth {
    fn default() -> Self {
        Self {
            monthly_investment_growth: 1.006,
            monthly_real_estate_growth: 1.0015697,
        }
    }
}

impl MarketGrowth {
    /// Equivalent annual investment growth rate
    pub fn annual_investment_rate(&self) -> f64 {
        self.monthly_investment_growth.powi(12) - 1.0
    }

    /// Equivalent annual real estate appreciation rate
    pub fn annual_real_estate_rate(&self) -> f64 {
        self.monthly_real_estate_growth.powi(12) - 1.0
    }
}

/// Annual residential property tax as a fraction of the home price
pub const DEFAULT_PROPERTY_TAX_RATE: f64 = 0.0065718;

/// Monthly property tax charge for a home
pub fn monthly_property_tax(annual_rate: f64, home_price: f64) -> f64 {
    annual_rate * home_price / 12.0
}
