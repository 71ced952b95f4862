use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// All monetary values, in RON. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.25 = 25%). Never as percentages.
pub type Rate = Decimal;

/// Percentages on the 0..=100 scale (business use, partial deductibility).
pub type Percent = Decimal;

/// A revenue (invoice) record from the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueRecord {
    #[serde(default)]
    pub amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Whether the invoice has been collected. Absent means paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// An expense record from the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    #[serde(default)]
    pub amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deductibility: Option<Deductibility>,
}

/// A ledger entry as held by the external store: identifier plus record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueEntry {
    pub id: String,
    #[serde(flatten)]
    pub record: RevenueRecord,
}

/// An expense ledger entry: identifier plus record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: String,
    #[serde(flatten)]
    pub record: ExpenseRecord,
}

/// Deductibility treatment attached to an expense.
///
/// Closed set of treatments; variant payloads carry only the fields that
/// treatment needs, so an `asset` without depreciation data cannot be
/// represented. An expense with no descriptor at all is treated as fully
/// deductible at 100% business use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Deductibility {
    /// Fully deductible, scaled by business use.
    Full {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        business_use_pct: Option<Percent>,
    },
    /// Deductible at a fixed percentage (e.g. mixed-use vehicles at 50%).
    Partial {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        business_use_pct: Option<Percent>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        partial_pct: Option<Percent>,
    },
    /// Deductible up to an annual cap shared across a named group
    /// (e.g. health contributions, third-pillar pension).
    Limited {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        business_use_pct: Option<Percent>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit_group: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit_annual_ron: Option<Money>,
    },
    /// Fixed asset written off linearly over its useful life.
    Asset {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        business_use_pct: Option<Percent>,
        asset: AssetDepreciation,
    },
    /// Not deductible; tracked for cashflow only.
    None,
}

/// Depreciation parameters for a fixed-asset expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDepreciation {
    /// Falls back to the expense amount when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition_cost_ron: Option<Money>,
    /// Falls back to the expense's creation date when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub useful_life_months: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<DepreciationMethod>,
    /// Inventory-vs-asset cutoff in RON. Defaults to 2500.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_ron: Option<Money>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepreciationMethod {
    Linear,
}

/// CAS threshold selector: 12 or 24 minimum gross salaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SalaryThreshold {
    #[default]
    Twelve,
    TwentyFour,
}

impl TryFrom<u8> for SalaryThreshold {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            12 => Ok(SalaryThreshold::Twelve),
            24 => Ok(SalaryThreshold::TwentyFour),
            other => Err(format!("threshold must be 12 or 24, got {other}")),
        }
    }
}

impl From<SalaryThreshold> for u8 {
    fn from(value: SalaryThreshold) -> Self {
        match value {
            SalaryThreshold::Twelve => 12,
            SalaryThreshold::TwentyFour => 24,
        }
    }
}

/// Contribution and income-tax rates, as fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRates {
    pub cas_rate: Rate,
    pub cass_rate: Rate,
    pub income_tax_rate: Rate,
}

impl Default for TaxRates {
    fn default() -> Self {
        Self {
            cas_rate: dec!(0.25),
            cass_rate: dec!(0.10),
            income_tax_rate: dec!(0.10),
        }
    }
}

/// Rate and threshold parameters driving the tax computation.
///
/// The `threshold`, `apply_cas` and `cass_on_revenue` fields are part of the
/// stored configuration shape but are not consulted by the engine math: the
/// CAS gate is fixed at 12 minimum salaries and CASS is always assessed on
/// net income. The envelope layer warns when a non-default value is supplied
/// for one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateConfig {
    pub min_gross_salary: Money,
    pub threshold: SalaryThreshold,
    pub rates: TaxRates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_cas: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cass_on_revenue: Option<bool>,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            min_gross_salary: dec!(4050),
            threshold: SalaryThreshold::Twelve,
            rates: TaxRates::default(),
            apply_cas: Some(false),
            cass_on_revenue: Some(true),
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
