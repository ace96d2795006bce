//! Rent vs Buy CLI
//!
//! Command-line interface for running a single rent vs buy simulation

use anyhow::{Context, Result};
use clap::Parser;
use rent_vs_buy::{
    params::load_parameters_json,
    projection::{month_abbrev, SimulationConfig},
    Assumptions, ScenarioRunner, SimulationParameters,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rent_vs_buy",
    about = "Simulate renter and homeowner net worth month by month over a mortgage term"
)]
struct Cli {
    /// Read parameters from a JSON file instead of the flags below
    #[arg(long)]
    params: Option<PathBuf>,

    /// Directory with mortgage_insurance_tiers.csv and market_assumptions.csv
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Calendar year of the first simulated month (defaults to this year)
    #[arg(long)]
    start_year: Option<i32>,

    /// Write the monthly ledger to this CSV file
    #[arg(long)]
    ledger_csv: Option<PathBuf>,

    /// Write the quarterly net worth series to this CSV file
    #[arg(long)]
    net_worth_csv: Option<PathBuf>,

    /// Print the full result as JSON instead of a report
    #[arg(long)]
    json: bool,

    #[arg(long, default_value_t = 120_000.0)]
    down_payment: f64,
    #[arg(long, default_value_t = 600_000.0)]
    home_price: f64,
    #[arg(long, default_value_t = 6.0, help = "Nominal annual rate in percent")]
    mortgage_rate_percent: f64,
    #[arg(long, default_value_t = 25)]
    mortgage_years: u32,
    #[arg(long, default_value_t = 1_500.0)]
    tenant_income: f64,
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    has_mortgage_insurance: bool,
    #[arg(long, default_value_t = 400.0)]
    home_maintenance_budget: f64,
    #[arg(long, default_value_t = 200.0)]
    home_owners_insurance: f64,
    #[arg(long, default_value_t = 2_000.0)]
    homebuyer_legal_fees: f64,
    #[arg(long, default_value_t = 250.0)]
    home_owner_utilities: f64,
    #[arg(long, default_value_t = 0.0)]
    home_owner_other_expenses: f64,
    #[arg(long, default_value_t = 2_500.0)]
    monthly_rent: f64,
    #[arg(long, default_value_t = 20.0)]
    renters_insurance: f64,
    #[arg(long, default_value_t = 0.0)]
    renter_utilities: f64,
    #[arg(long, default_value_t = 0.0)]
    renter_other_expenses: f64,
}

impl Cli {
    fn parameters(&self) -> Result<SimulationParameters> {
        if let Some(path) = &self.params {
            return load_parameters_json(path)
                .with_context(|| format!("failed to read parameters from {}", path.display()));
        }

        Ok(SimulationParameters {
            down_payment: self.down_payment,
            home_price: self.home_price,
            mortgage_rate_percent: self.mortgage_rate_percent,
            mortgage_years: self.mortgage_years,
            tenant_income: self.tenant_income,
            has_mortgage_insurance: self.has_mortgage_insurance,
            home_maintenance_budget: self.home_maintenance_budget,
            home_owners_insurance: self.home_owners_insurance,
            homebuyer_legal_fees: self.homebuyer_legal_fees,
            home_owner_utilities: self.home_owner_utilities,
            home_owner_other_expenses: self.home_owner_other_expenses,
            monthly_rent: self.monthly_rent,
            renters_insurance: self.renters_insurance,
            renter_utilities: self.renter_utilities,
            renter_other_expenses: self.renter_other_expenses,
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let params = cli.parameters()?;

    let assumptions = match &cli.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("failed to load assumptions from {}", dir.display()))?,
        None => Assumptions::default_model(),
    };

    let mut config = SimulationConfig::default();
    if let Some(year) = cli.start_year {
        config.start_year = year;
    }

    let runner = ScenarioRunner::with_assumptions(assumptions);
    let result = runner.run(&params, config).context("simulation failed")?;

    if let Some(path) = &cli.ledger_csv {
        let file = File::create(path).with_context(|| format!("unable to create {}", path.display()))?;
        result.write_ledger_csv(BufWriter::new(file))?;
    }

    if let Some(path) = &cli.net_worth_csv {
        let file = File::create(path).with_context(|| format!("unable to create {}", path.display()))?;
        result.write_net_worth_csv(BufWriter::new(file))?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let summary = result.summary();

    println!("Rent vs Buy ({} months)", summary.total_months);
    println!("======================\n");
    println!("  Monthly housing budget:   ${:.2}", summary.housing_budget);
    println!("  Mortgage payment:         ${:.2}", summary.monthly_payment);
    println!("  Mortgage insurance:       ${:.2}", result.mortgage_insurance_premium);
    println!("  Property tax:             ${:.2}", result.monthly_property_tax);

    let growth = runner.assumptions().growth;
    println!("  Investment growth:        {:.2}%/yr", growth.annual_investment_rate() * 100.0);
    println!("  Home value growth:        {:.2}%/yr", growth.annual_real_estate_rate() * 100.0);
    println!();

    // First two years month by month
    println!("{:>4} {:>3} {:>10} {:>10} {:>10} {:>12} {:>12}",
        "Year", "Mon", "Payment", "Interest", "Equity", "OwnerInvGr", "RenterInvGr");
    println!("{}", "-".repeat(67));
    for row in result.ledger.iter().take(24) {
        println!("{:>4} {:>3} {:>10.2} {:>10.2} {:>10.2} {:>12.2} {:>12.2}",
            row.year,
            month_abbrev(row.month),
            row.mortgage_payment,
            row.interest_paid,
            row.equity_built,
            row.homeowner_investment_growth,
            row.renter_investment_growth,
        );
    }
    if result.ledger.len() > 24 {
        println!("... ({} more months)", result.ledger.len() - 24);
    }

    println!("\nNet worth by year:");
    for point in result.net_worth.iter().filter(|p| p.quarter.ends_with("Q1")) {
        println!("  {:<8} Homeowner ${:>14.2}  Renter ${:>14.2}", point.quarter, point.homeowner, point.renter);
    }

    println!("\nSummary:");
    println!("  Total interest paid:      ${:.2}", summary.total_interest_paid);
    println!("  Total equity built:       ${:.2}", summary.total_equity_built);
    println!("  Final homeowner net worth: ${:.2}", summary.final_homeowner_net_worth);
    println!("  Final renter net worth:    ${:.2}", summary.final_renter_net_worth);
    match &summary.break_even_quarter {
        Some(quarter) => println!("  Owning catches up with renting in {}", quarter),
        None => println!("  Owning never catches up with renting over the term"),
    }

    Ok(())
}
