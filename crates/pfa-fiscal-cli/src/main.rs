mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::deductibility::{ScheduleArgs, SuggestArgs};
use commands::tax::{CashFiscalArgs, TaxYearArgs, YearsArgs};

/// Tax and deductibility calculations for Romanian sole traders (PFA)
#[derive(Parser)]
#[command(
    name = "pfa",
    version,
    about = "Tax and deductibility calculations for Romanian sole traders",
    long_about = "A CLI for computing the yearly CAS/CASS/income-tax picture of a PFA \
                  ledger with decimal precision. Supports monthly tax summaries, \
                  deductible-expense schedules with linear asset depreciation and \
                  annual limited-group caps, cash-vs-fiscal comparisons, and a \
                  deductibility suggestion advisor."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the monthly and annual tax summary for one year
    TaxYear(TaxYearArgs),
    /// Expand expenses into a month-by-month deductible schedule
    DeductibleSchedule(ScheduleArgs),
    /// Suggest a deductibility treatment for a prospective expense
    Suggest(SuggestArgs),
    /// Compare the fiscal net against plain cash movements for one year
    CashFiscal(CashFiscalArgs),
    /// List calendar years with recorded activity
    Years(YearsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::TaxYear(args) => commands::tax::run_tax_year(args),
        Commands::DeductibleSchedule(args) => commands::deductibility::run_schedule(args),
        Commands::Suggest(args) => commands::deductibility::run_suggest(args),
        Commands::CashFiscal(args) => commands::tax::run_cash_fiscal(args),
        Commands::Years(args) => commands::tax::run_years(args),
        Commands::Version => {
            println!("pfa {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
