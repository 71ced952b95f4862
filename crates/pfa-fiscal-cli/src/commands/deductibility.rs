use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use pfa_fiscal_core::deductibility::{
    calculate_deductible_schedule, suggest_deductibility, ActivityDomain,
    DeductibleScheduleInput, SuggestionInput,
};

use super::LedgerFile;
use crate::input;

/// Arguments for the deductible schedule
#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to a JSON ledger file ({ expenses, year? })
    #[arg(long)]
    pub input: Option<String>,

    /// Target calendar year (overrides the ledger file's year)
    #[arg(long)]
    pub year: Option<i32>,
}

/// Arguments for the deductibility advisor
#[derive(Args)]
pub struct SuggestArgs {
    /// Activity domain: IT, MEDICAL or OTHER
    #[arg(long)]
    pub domain: String,

    /// Expense category identifier (e.g. training, equipment, car)
    #[arg(long)]
    pub category: String,

    /// Expense name/description
    #[arg(long)]
    pub title: String,

    /// Expense amount in RON
    #[arg(long, default_value = "0")]
    pub amount: Decimal,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let ledger: LedgerFile = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("provide --input or pipe a JSON ledger on stdin".into());
    };

    let year = args
        .year
        .or(ledger.year)
        .ok_or("--year is required (or set \"year\" in the ledger file)")?;

    let input = DeductibleScheduleInput {
        expenses: ledger.expenses,
        year,
    };
    let result = calculate_deductible_schedule(&input)?;
    Ok(serde_json::to_value(result)?)
}

fn parse_domain(raw: &str) -> Result<ActivityDomain, Box<dyn std::error::Error>> {
    match raw.trim().to_uppercase().as_str() {
        "IT" => Ok(ActivityDomain::It),
        "MEDICAL" => Ok(ActivityDomain::Medical),
        "OTHER" => Ok(ActivityDomain::Other),
        other => Err(format!("unknown domain '{other}' (expected IT, MEDICAL or OTHER)").into()),
    }
}

pub fn run_suggest(args: SuggestArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = SuggestionInput {
        domain: parse_domain(&args.domain)?,
        category: args.category,
        title: args.title,
        amount: args.amount,
    };
    let suggestion = suggest_deductibility(&input);
    Ok(serde_json::to_value(suggestion)?)
}
