use chrono::Datelike;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use crate::rounding::{add_months, round2};
use crate::types::*;
use crate::PfaFiscalResult;

/// Inventory-vs-asset cutoff when the descriptor does not set one.
const DEFAULT_ASSET_THRESHOLD_RON: Decimal = dec!(2500);
const DEFAULT_USEFUL_LIFE_MONTHS: u32 = 36;
const DEFAULT_PARTIAL_PCT: Decimal = dec!(50);
const HUNDRED: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationSource {
    Expense,
    AssetAmortization,
}

/// One month's deductible slice of an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductibleAllocation {
    /// Calendar month, 1-12, within the target year.
    pub month: u32,
    pub deductible_ron: Money,
    pub source: AllocationSource,
    pub expense_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductibleScheduleInput {
    pub expenses: Vec<ExpenseEntry>,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductibleScheduleOutput {
    pub allocations: Vec<DeductibleAllocation>,
    /// Deductible RON per calendar month, all 12 months present.
    pub monthly: BTreeMap<u32, Money>,
    pub annual_total: Money,
}

// ---------------------------------------------------------------------------
// Allocation
// ---------------------------------------------------------------------------

fn business_use_fraction(pct: Option<Percent>) -> Decimal {
    pct.unwrap_or(HUNDRED).clamp(Decimal::ZERO, HUNDRED) / HUNDRED
}

fn allocation(
    month: u32,
    deductible_ron: Money,
    source: AllocationSource,
    expense_id: &str,
) -> DeductibleAllocation {
    DeductibleAllocation {
        month,
        deductible_ron,
        source,
        expense_id: expense_id.to_string(),
    }
}

/// Expand one expense into its deductible allocations for `target_year`.
///
/// `remaining_by_group` is the shared annual cap table for limited-group
/// expenses: the caller owns it for the duration of one allocation pass and
/// entries are decremented here. Consumption is order dependent, so batch
/// callers must fix an ordering (see [`allocate_expenses`]). A multi-year
/// asset yields only the slice of its schedule that falls inside
/// `target_year`; run one pass per year with a fresh cap table to cover the
/// whole span.
///
/// Degenerate inputs (missing dates, non-positive amounts, a limited group
/// with no cap) produce no allocations rather than an error, so bad data can
/// never overstate deductions.
pub fn allocate_deductible(
    expense_id: &str,
    expense: &ExpenseRecord,
    target_year: i32,
    remaining_by_group: &mut HashMap<String, Money>,
) -> Vec<DeductibleAllocation> {
    // An expense without a descriptor is fully deductible at 100% business use.
    let descriptor = expense
        .deductibility
        .clone()
        .unwrap_or(Deductibility::Full {
            business_use_pct: None,
        });

    if let Deductibility::None = descriptor {
        return Vec::new();
    }

    if let Deductibility::Asset {
        business_use_pct,
        asset,
    } = &descriptor
    {
        return allocate_asset(expense_id, expense, asset, *business_use_pct, target_year);
    }

    // Current-year expense paths: the record itself must fall in the target
    // year and carry a positive amount.
    let Some(created_at) = expense.created_at else {
        return Vec::new();
    };
    if created_at.year() != target_year {
        return Vec::new();
    }
    let amount = expense.amount;
    if amount <= Decimal::ZERO {
        return Vec::new();
    }
    let month = created_at.month();

    match descriptor {
        Deductibility::Full { business_use_pct } => {
            let bu = business_use_fraction(business_use_pct);
            vec![allocation(
                month,
                round2(amount * bu),
                AllocationSource::Expense,
                expense_id,
            )]
        }
        Deductibility::Partial {
            business_use_pct,
            partial_pct,
        } => {
            let bu = business_use_fraction(business_use_pct);
            let pct = partial_pct
                .unwrap_or(DEFAULT_PARTIAL_PCT)
                .clamp(Decimal::ZERO, HUNDRED)
                / HUNDRED;
            vec![allocation(
                month,
                round2(amount * bu * pct),
                AllocationSource::Expense,
                expense_id,
            )]
        }
        Deductibility::Limited {
            business_use_pct,
            limit_group,
            limit_annual_ron,
        } => {
            let group = limit_group
                .as_deref()
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .unwrap_or("default")
                .to_string();
            let cap = limit_annual_ron.unwrap_or(Decimal::ZERO).max(Decimal::ZERO);
            if cap <= Decimal::ZERO {
                // No cap configured: treat as non-deductible rather than
                // overstate the deduction.
                return Vec::new();
            }

            let bu = business_use_fraction(business_use_pct);
            let remaining = remaining_by_group.get(&group).copied().unwrap_or(cap);
            let wanted = round2(amount * bu);
            let used = remaining.min(wanted).max(Decimal::ZERO);
            remaining_by_group.insert(group, round2(remaining - used));
            if used <= Decimal::ZERO {
                return Vec::new();
            }
            vec![allocation(month, used, AllocationSource::Expense, expense_id)]
        }
        Deductibility::Asset { .. } | Deductibility::None => unreachable!("handled above"),
    }
}

fn allocate_asset(
    expense_id: &str,
    expense: &ExpenseRecord,
    asset: &AssetDepreciation,
    business_use_pct: Option<Percent>,
    target_year: i32,
) -> Vec<DeductibleAllocation> {
    let bu = business_use_fraction(business_use_pct);
    let threshold = asset.threshold_ron.unwrap_or(DEFAULT_ASSET_THRESHOLD_RON);
    let Some(start) = asset.start_date.or(expense.created_at) else {
        return Vec::new();
    };
    let cost = asset.acquisition_cost_ron.unwrap_or(expense.amount);
    let life_months = asset
        .useful_life_months
        .unwrap_or(DEFAULT_USEFUL_LIFE_MONTHS)
        .max(1);

    // Below the cutoff the purchase is a low-value inventory item, written
    // off in full in the month of acquisition.
    if cost > Decimal::ZERO && cost < threshold {
        if start.year() != target_year {
            return Vec::new();
        }
        return vec![allocation(
            start.month(),
            round2(cost * bu),
            AllocationSource::Expense,
            expense_id,
        )];
    }

    let monthly = round2(cost / Decimal::from(life_months) * bu);
    if monthly <= Decimal::ZERO {
        return Vec::new();
    }

    let mut allocations = Vec::new();
    for i in 0..life_months {
        let (year, month) = add_months(start.year(), start.month(), i);
        if year != target_year {
            continue;
        }
        allocations.push(allocation(
            month,
            monthly,
            AllocationSource::AssetAmortization,
            expense_id,
        ));
    }
    allocations
}

/// Run one allocation pass over a batch of expenses for a target year.
///
/// Limited-group caps are consumed in ascending creation-date order, ties
/// broken by entry id, regardless of the input slice order. Caps do not
/// carry across years; every call starts from a fresh table.
pub fn allocate_expenses(entries: &[ExpenseEntry], target_year: i32) -> Vec<DeductibleAllocation> {
    let mut ordered: Vec<&ExpenseEntry> = entries.iter().collect();
    ordered.sort_by(|a, b| {
        a.record
            .created_at
            .cmp(&b.record.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut remaining_by_group: HashMap<String, Money> = HashMap::new();
    let mut allocations = Vec::new();
    for entry in ordered {
        allocations.extend(allocate_deductible(
            &entry.id,
            &entry.record,
            target_year,
            &mut remaining_by_group,
        ));
    }
    allocations
}

/// Sum allocations into a per-month table covering all 12 months.
pub fn sum_allocations_by_month(
    allocations: &[DeductibleAllocation],
) -> BTreeMap<u32, Money> {
    let mut by_month: BTreeMap<u32, Money> = (1..=12).map(|m| (m, Decimal::ZERO)).collect();
    for a in allocations {
        if let Some(slot) = by_month.get_mut(&a.month) {
            *slot = round2(*slot + a.deductible_ron);
        }
    }
    by_month
}

/// Batch allocation pass behind the audit envelope: allocations, per-month
/// sums, and the annual total.
pub fn calculate_deductible_schedule(
    input: &DeductibleScheduleInput,
) -> PfaFiscalResult<ComputationOutput<DeductibleScheduleOutput>> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    let uncapped: Vec<&str> = input
        .expenses
        .iter()
        .filter(|e| {
            matches!(
                e.record.deductibility,
                Some(Deductibility::Limited {
                    limit_annual_ron, ..
                }) if limit_annual_ron.unwrap_or(Decimal::ZERO) <= Decimal::ZERO
            )
        })
        .map(|e| e.id.as_str())
        .collect();
    if !uncapped.is_empty() {
        warnings.push(format!(
            "{} limited expense(s) have no annual cap set and were treated as \
             non-deductible: {}",
            uncapped.len(),
            uncapped.join(", ")
        ));
    }

    let allocations = allocate_expenses(&input.expenses, input.year);
    let monthly = sum_allocations_by_month(&allocations);
    let annual_total = round2(monthly.values().copied().sum::<Decimal>());

    let result = DeductibleScheduleOutput {
        allocations,
        monthly,
        annual_total,
    };

    let assumptions = serde_json::json!({
        "year": input.year,
        "expense_records": input.expenses.len(),
        "order": "created_at ascending, ties by id",
    });

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Per-expense deductibility expansion with linear asset depreciation and \
         annual limited-group caps",
        &assumptions,
        warnings,
        elapsed,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
