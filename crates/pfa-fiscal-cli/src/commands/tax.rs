use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use pfa_fiscal_core::tax::{calculate_cash_fiscal, calculate_tax_year, years_with_activity};
use pfa_fiscal_core::tax::TaxYearInput;
use pfa_fiscal_core::RateConfig;

use super::LedgerFile;
use crate::input;

/// Arguments for the yearly tax summary
#[derive(Args)]
pub struct TaxYearArgs {
    /// Path to a JSON ledger file ({ revenues, expenses, year?, config? })
    #[arg(long)]
    pub input: Option<String>,

    /// Target calendar year (overrides the ledger file's year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Path to a JSON or YAML rate-config file (overrides the ledger's config)
    #[arg(long)]
    pub config: Option<String>,

    /// Minimum gross salary driving the CAS/CASS thresholds
    #[arg(long)]
    pub min_gross_salary: Option<Decimal>,

    /// CAS (pension) rate as a fraction, e.g. 0.25
    #[arg(long)]
    pub cas_rate: Option<Decimal>,

    /// CASS (health) rate as a fraction, e.g. 0.10
    #[arg(long)]
    pub cass_rate: Option<Decimal>,

    /// Income tax rate as a fraction, e.g. 0.10
    #[arg(long)]
    pub income_tax_rate: Option<Decimal>,
}

/// Arguments for the cash-vs-fiscal comparison
#[derive(Args)]
pub struct CashFiscalArgs {
    /// Path to a JSON ledger file ({ revenues, expenses, year?, config? })
    #[arg(long)]
    pub input: Option<String>,

    /// Target calendar year (overrides the ledger file's year)
    #[arg(long)]
    pub year: Option<i32>,
}

/// Arguments for listing years with activity
#[derive(Args)]
pub struct YearsArgs {
    /// Path to a JSON ledger file ({ revenues, expenses })
    #[arg(long)]
    pub input: Option<String>,
}

fn read_ledger(path: &Option<String>) -> Result<LedgerFile, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        input::file::read_json(path)
    } else if let Some(data) = input::stdin::read_stdin()? {
        Ok(serde_json::from_value(data)?)
    } else {
        Err("provide --input or pipe a JSON ledger on stdin".into())
    }
}

fn build_input(
    ledger: LedgerFile,
    year: Option<i32>,
    config: Option<RateConfig>,
) -> Result<TaxYearInput, Box<dyn std::error::Error>> {
    let year = year
        .or(ledger.year)
        .ok_or("--year is required (or set \"year\" in the ledger file)")?;
    Ok(TaxYearInput {
        revenues: ledger.revenues,
        expenses: ledger.expenses,
        year,
        config: config.or(ledger.config).unwrap_or_default(),
    })
}

pub fn run_tax_year(args: TaxYearArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let ledger = read_ledger(&args.input)?;

    let mut config: Option<RateConfig> = match &args.config {
        Some(path) => Some(input::file::read_config(path)?),
        None => None,
    };

    // Individual flags refine whichever config is in effect.
    let has_overrides = args.min_gross_salary.is_some()
        || args.cas_rate.is_some()
        || args.cass_rate.is_some()
        || args.income_tax_rate.is_some();
    if has_overrides {
        let mut effective = config
            .clone()
            .or_else(|| ledger.config.clone())
            .unwrap_or_default();
        if let Some(v) = args.min_gross_salary {
            effective.min_gross_salary = v;
        }
        if let Some(v) = args.cas_rate {
            effective.rates.cas_rate = v;
        }
        if let Some(v) = args.cass_rate {
            effective.rates.cass_rate = v;
        }
        if let Some(v) = args.income_tax_rate {
            effective.rates.income_tax_rate = v;
        }
        config = Some(effective);
    }

    let input = build_input(ledger, args.year, config)?;
    let result = calculate_tax_year(&input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_cash_fiscal(args: CashFiscalArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let ledger = read_ledger(&args.input)?;
    let input = build_input(ledger, args.year, None)?;
    let result = calculate_cash_fiscal(&input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_years(args: YearsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let ledger = read_ledger(&args.input)?;
    let years = years_with_activity(&ledger.revenues, &ledger.expenses);
    Ok(serde_json::to_value(years)?)
}
