pub mod deductibility;
pub mod tax;

use serde::Deserialize;

use pfa_fiscal_core::{ExpenseEntry, RateConfig, RevenueEntry};

/// On-disk ledger shape shared by the year-scoped commands.
#[derive(Debug, Default, Deserialize)]
pub struct LedgerFile {
    #[serde(default)]
    pub revenues: Vec<RevenueEntry>,
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub config: Option<RateConfig>,
}
