//! Run every scenario in a CSV file and compare the outcomes
//!
//! Usage: cargo run --bin compare_scenarios -- --scenarios data/scenarios.csv
//!        cargo run --bin compare_scenarios -- --sweep reference --rates 4,5,6,7

use anyhow::{bail, Context, Result};
use clap::Parser;
use rent_vs_buy::{
    params::{load_parameter_sets, loader::DEFAULT_SCENARIOS_PATH},
    projection::{round_cents, SimulationConfig, SimulationSummary},
    Assumptions, ScenarioRunner,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "compare_scenarios", about = "Batch rent vs buy comparison")]
struct Cli {
    /// Scenario CSV, one parameter set per row
    #[arg(long, default_value = DEFAULT_SCENARIOS_PATH)]
    scenarios: PathBuf,

    /// Assumptions directory (built-in model if omitted)
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Summary CSV to write
    #[arg(long, default_value = "scenario_summary.csv")]
    output: PathBuf,

    #[arg(long)]
    start_year: Option<i32>,

    /// Sweep mortgage rates for the named scenario instead of running the batch
    #[arg(long)]
    sweep: Option<String>,

    /// Mortgage rates in percent for --sweep
    #[arg(long, value_delimiter = ',', default_values_t = vec![3.0, 4.0, 5.0, 6.0, 7.0, 8.0])]
    rates: Vec<f64>,
}

/// One line of the summary output
#[derive(serde::Serialize)]
struct SummaryRow {
    scenario: String,
    mortgage_rate_percent: f64,
    housing_budget: f64,
    monthly_payment: f64,
    total_interest_paid: f64,
    final_homeowner_net_worth: f64,
    final_renter_net_worth: f64,
    break_even_quarter: String,
}

impl SummaryRow {
    fn new(scenario: String, mortgage_rate_percent: f64, summary: SimulationSummary) -> Self {
        Self {
            scenario,
            mortgage_rate_percent,
            housing_budget: round_cents(summary.housing_budget),
            monthly_payment: round_cents(summary.monthly_payment),
            total_interest_paid: round_cents(summary.total_interest_paid),
            final_homeowner_net_worth: round_cents(summary.final_homeowner_net_worth),
            final_renter_net_worth: round_cents(summary.final_renter_net_worth),
            break_even_quarter: summary.break_even_quarter.unwrap_or_else(|| "never".to_string()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let start = Instant::now();

    let scenarios = load_parameter_sets(&cli.scenarios)
        .with_context(|| format!("failed to load scenarios from {}", cli.scenarios.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let assumptions = match &cli.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("failed to load assumptions from {}", dir.display()))?,
        None => Assumptions::default_model(),
    };
    let runner = ScenarioRunner::with_assumptions(assumptions);

    let mut config = SimulationConfig {
        detailed_output: false,
        ..SimulationConfig::default()
    };
    if let Some(year) = cli.start_year {
        config.start_year = year;
    }

    let mut rows = Vec::new();

    if let Some(name) = &cli.sweep {
        let Some(base) = scenarios.iter().find(|s| &s.name == name) else {
            bail!("scenario {} not found in {}", name, cli.scenarios.display());
        };

        let results = runner.run_rate_sweep(&base.params, &cli.rates, config);
        for (rate, result) in cli.rates.iter().zip(results) {
            let result = result.with_context(|| format!("{} at {}%", name, rate))?;
            rows.push(SummaryRow::new(name.clone(), *rate, result.summary()));
        }
    } else {
        let outcomes = runner.run_batch(&scenarios, config);
        for (scenario, outcome) in scenarios.iter().zip(outcomes) {
            match outcome.result {
                Ok(result) => {
                    let rate = scenario.params.mortgage_rate_percent;
                    rows.push(SummaryRow::new(outcome.name, rate, result.summary()));
                }
                Err(e) => log::warn!("Skipping scenario {}: {}", outcome.name, e),
            }
        }
    }

    println!("Simulations complete in {:?}\n", start.elapsed());

    println!("{:<14} {:>6} {:>10} {:>10} {:>16} {:>16} {:>10}",
        "Scenario", "Rate%", "Budget", "Payment", "Owner NW", "Renter NW", "BreakEven");
    println!("{}", "-".repeat(88));
    for row in &rows {
        println!("{:<14} {:>6.2} {:>10.2} {:>10.2} {:>16.2} {:>16.2} {:>10}",
            row.scenario,
            row.mortgage_rate_percent,
            row.housing_budget,
            row.monthly_payment,
            row.final_homeowner_net_worth,
            row.final_renter_net_worth,
            row.break_even_quarter,
        );
    }

    let file = File::create(&cli.output)
        .with_context(|| format!("unable to create {}", cli.output.display()))?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("\nSummary written to {}", cli.output.display());
    Ok(())
}
