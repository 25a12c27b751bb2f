//! Minpaku projection CLI
//!
//! Runs revenue projections for short-term rental scenarios

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use minpaku_projection::params::loader::{load_calendar, load_scenario};
use minpaku_projection::report::{format_currency, payback_label, render_summary, write_monthly_csv, write_sensitivity_csv};
use minpaku_projection::{ProjectionConfig, Scenario, ScenarioRunner};

/// Short-term rental revenue and payback projections
#[derive(Parser)]
#[command(name = "minpaku")]
#[command(about = "Project monthly revenue, costs and payback for a short-term rental", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project one scenario and print a summary
    Project {
        /// Scenario JSON file (defaults to the built-in sample)
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// Seasonality calendar CSV (month,season) replacing the scenario's calendar
        #[arg(short, long)]
        calendar: Option<PathBuf>,

        /// Write rounded monthly results to this CSV file
        #[arg(long, value_name = "FILE")]
        monthly_csv: Option<PathBuf>,

        /// Write the occupancy sensitivity curve to this CSV file
        #[arg(long, value_name = "FILE")]
        sensitivity_csv: Option<PathBuf>,

        /// Print the full result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Advance one month's season and show the effect on annual profit
    Toggle {
        /// Calendar month to advance (1-12)
        #[arg(short, long)]
        month: u32,

        /// Scenario JSON file (defaults to the built-in sample)
        #[arg(short, long)]
        scenario: Option<PathBuf>,
    },

    /// Project several scenario files in parallel and compare them
    Batch {
        /// Scenario JSON files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let runner = ScenarioRunner::with_config(ProjectionConfig::default());
    let display_limit = runner.engine().config().payback_display_limit_months;

    match cli.command {
        Commands::Project {
            scenario,
            calendar,
            monthly_csv,
            sensitivity_csv,
            json,
        } => {
            let mut scenario = read_scenario(scenario.as_deref())?;
            if let Some(path) = calendar {
                scenario.calendar = load_calendar(&path)
                    .with_context(|| format!("Failed to load calendar {}", path.display()))?;
            }

            let result = runner.run(&scenario).context("Projection failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render_summary(&result, display_limit));
            }

            if let Some(path) = monthly_csv {
                let file = File::create(&path).with_context(|| format!("Unable to create {}", path.display()))?;
                write_monthly_csv(BufWriter::new(file), &result.months)?;
                log::info!("Monthly results written to {}", path.display());
            }

            if let Some(path) = sensitivity_csv {
                let file = File::create(&path).with_context(|| format!("Unable to create {}", path.display()))?;
                write_sensitivity_csv(BufWriter::new(file), &result.sensitivity)?;
                log::info!("Sensitivity curve written to {}", path.display());
            }
        }

        Commands::Toggle { month, scenario } => {
            let scenario = read_scenario(scenario.as_deref())?;
            let before = runner.engine().summarize(&scenario).context("Projection failed")?;

            let mut toggled = scenario.clone();
            let season = toggled
                .calendar
                .toggle(month)
                .with_context(|| format!("Cannot toggle month {}", month))?;
            let after = runner.engine().summarize(&toggled).context("Projection failed")?;

            println!("{}", serde_json::to_string(&toggled.calendar)?);
            println!("Month {} is now {}", month, season);
            println!(
                "Annual net profit: {} -> {} ({})",
                format_currency(before.annual_net_profit),
                format_currency(after.annual_net_profit),
                format_currency(after.annual_net_profit - before.annual_net_profit)
            );
        }

        Commands::Batch { files } => {
            let scenarios = files
                .iter()
                .map(|path| read_scenario(Some(path.as_path())))
                .collect::<Result<Vec<_>>>()?;

            let mut results = runner.run_batch(&scenarios).context("Batch projection failed")?;
            results.sort_by(|a, b| b.summary.annual_net_profit.total_cmp(&a.summary.annual_net_profit));

            println!(
                "{:<24} {:>14} {:>14} {:>14} {:>8} {:>12}",
                "Scenario", "Revenue", "Expense", "Net profit", "ROI", "Payback"
            );
            println!("{}", "-".repeat(92));
            for r in &results {
                let s = &r.summary;
                println!(
                    "{:<24} {:>14} {:>14} {:>14} {:>7.1}% {:>12}",
                    r.scenario,
                    format_currency(s.total_revenue),
                    format_currency(s.total_expense),
                    format_currency(s.annual_net_profit),
                    s.roi_pct,
                    payback_label(&s.payback, display_limit)
                );
            }
        }
    }

    Ok(())
}

/// Load a scenario file, or the sample scenario when no path is given
fn read_scenario(path: Option<&Path>) -> Result<Scenario> {
    match path {
        Some(path) => load_scenario(path).with_context(|| format!("Failed to load scenario {}", path.display())),
        None => Ok(Scenario::sample()),
    }
}
