//! Per-actor balance sheets and the simulation calendar

use chrono::Month;

use crate::params::SimulationParameters;

/// Which side of the comparison a balance sheet belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Renter,
    Homeowner,
}

/// Balance sheet of one actor at a point in time
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ActorState {
    /// Invested wealth; compounds monthly and absorbs each month's surplus or deficit
    pub liquid_assets: f64,

    /// Market value of real property held
    pub property_assets: f64,

    /// Outstanding mortgage balance
    pub liability: f64,
}

impl ActorState {
    /// Opening balance sheet for an actor
    ///
    /// The renter keeps the down payment and closing fees invested. The
    /// homeowner starts with the house and the mortgage and nothing liquid.
    pub fn opening(actor: Actor, params: &SimulationParameters) -> Self {
        match actor {
            Actor::Renter => Self {
                liquid_assets: params.down_payment + params.homebuyer_legal_fees,
                property_assets: 0.0,
                liability: 0.0,
            },
            Actor::Homeowner => Self {
                liquid_assets: 0.0,
                property_assets: params.home_price,
                liability: params.original_principal(),
            },
        }
    }

    /// Apply one month of market growth, returning (investment growth, property growth)
    pub fn grow(&mut self, investment_factor: f64, real_estate_factor: f64) -> (f64, f64) {
        let investment_growth = self.liquid_assets * (investment_factor - 1.0);
        let property_growth = self.property_assets * (real_estate_factor - 1.0);

        self.liquid_assets *= investment_factor;
        self.property_assets *= real_estate_factor;

        (investment_growth, property_growth)
    }

    /// Move the month's leftover budget (or shortfall) into liquid assets
    pub fn absorb(&mut self, budget: f64) {
        self.liquid_assets += budget;
    }
}

/// Net worth of a balance sheet
pub fn net_worth(state: &ActorState) -> f64 {
    state.liquid_assets + state.property_assets - state.liability
}

/// Calendar position of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    pub year: i32,
    pub month: Month,
}

impl Calendar {
    /// Calendar starting in January of `year`
    pub fn starting(year: i32) -> Self {
        Self {
            year,
            month: Month::January,
        }
    }

    /// Move to the next month, rolling the year after December
    ///
    /// Returns true when the new month opens a quarter.
    pub fn advance(&mut self) -> bool {
        if self.month == Month::December {
            self.year += 1;
        }
        self.month = self.month.succ();
        self.month_index() % 3 == 0
    }

    /// Zero-based month index (January = 0)
    pub fn month_index(&self) -> u32 {
        self.month.number_from_month() - 1
    }

    /// Quarter (1-4) containing the current month
    pub fn quarter(&self) -> u32 {
        self.month_index() / 3 + 1
    }

    /// Label such as "2026 Q3"
    pub fn quarter_label(&self) -> String {
        format!("{} Q{}", self.year, self.quarter())
    }
}

/// Three-letter upper-case month label (JAN..DEC)
pub fn month_abbrev(month: Month) -> String {
    month.name()[..3].to_uppercase()
}
