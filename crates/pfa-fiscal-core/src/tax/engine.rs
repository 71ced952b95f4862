use chrono::Datelike;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::PfaFiscalError;
use crate::rounding::round2;
use crate::types::*;
use crate::PfaFiscalResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One month of cash-basis figures with the assessed contributions and tax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCalc {
    /// Calendar month, 1-12.
    pub month: u32,
    pub revenues: Money,
    pub expenses: Money,
    pub cas: Money,
    pub cass: Money,
    pub income_tax: Money,
    pub net_income: Money,
}

/// Month-wise sums over the year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearTotals {
    pub revenues: Money,
    pub expenses: Money,
    pub cas: Money,
    pub cass: Money,
    pub income_tax: Money,
    pub net_income: Money,
}

/// Deficit-reconciliation adjustment, attached when at least one month spent
/// more than it earned. Reductions are applied to the year totals only; the
/// monthly rows keep their unreduced figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferenceAdjustment {
    /// Sum of (expenses - revenues) over months where expenses exceeded revenues.
    pub total_difference: Money,
    pub cas_reduction: Money,
    pub cass_reduction: Money,
    pub income_tax_reduction: Money,
    /// Raw per-month CASS sum, before the reduction hit the totals.
    pub cass_month_sum: Money,
    /// Residual between the per-month CASS sum and the reduced CASS total.
    pub cass_rest: Money,
}

/// The full year picture: 12 monthly rows, totals, and the optional
/// deficit adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: i32,
    pub months: Vec<MonthlyCalc>,
    pub totals: YearTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub differences: Option<DifferenceAdjustment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxYearInput {
    pub revenues: Vec<RevenueEntry>,
    pub expenses: Vec<ExpenseEntry>,
    pub year: i32,
    #[serde(default)]
    pub config: RateConfig,
}

/// Cash-basis vs fiscal-basis year comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFiscalComparison {
    /// All revenue booked in the year, collected or not.
    pub total_cash_revenues: Money,
    /// All expenses booked in the year, deductible or not.
    pub total_cash_expenses: Money,
    /// CAS + CASS + income tax assessed across the monthly rows.
    pub total_taxes: Money,
    /// The fiscal net from the year summary totals.
    pub fiscal_net_after_taxes: Money,
    /// Money actually left after every outflow.
    pub cash_net_after_all: Money,
    /// Fiscal net minus cash net: depreciation and timing effects.
    pub timing_difference: Money,
}

// ---------------------------------------------------------------------------
// Year summary
// ---------------------------------------------------------------------------

/// Compute the monthly and annual tax picture for one calendar year.
///
/// Cash-basis aggregation: collected revenues and all expenses are summed per
/// month; deductibility descriptors are not consulted here (the deductible
/// schedule is a separate computation). Records without a creation date are
/// skipped and malformed amounts contribute zero; this function never errors.
pub fn compute_year_summary(
    revenues: &[RevenueEntry],
    expenses: &[ExpenseEntry],
    year: i32,
    config: &RateConfig,
) -> YearSummary {
    let rates = &config.rates;

    let mut month_revenues = [Decimal::ZERO; 12];
    let mut month_expenses = [Decimal::ZERO; 12];

    for entry in revenues {
        let Some(date) = entry.record.created_at else {
            continue;
        };
        if date.year() != year || !entry.record.paid.unwrap_or(true) {
            continue;
        }
        month_revenues[date.month() as usize - 1] += entry.record.amount;
    }

    for entry in expenses {
        let Some(date) = entry.record.created_at else {
            continue;
        };
        if date.year() != year {
            continue;
        }
        month_expenses[date.month() as usize - 1] += entry.record.amount;
    }

    // Taxable pre-tax net per month: a month with no revenue is floored to
    // zero even when it has expenses; the deficit is tracked separately.
    let monthly_net_pre: Vec<Decimal> = (0..12)
        .map(|i| {
            if month_revenues[i] > Decimal::ZERO {
                (month_revenues[i] - month_expenses[i]).max(Decimal::ZERO)
            } else {
                Decimal::ZERO
            }
        })
        .collect();

    let annual_net: Decimal = monthly_net_pre.iter().copied().sum();

    // CASS above 6 minimum salaries, CAS above 12; both strictly greater.
    // The 12/24 selector in the config is not consulted here.
    let cass_applicable = annual_net > dec!(6) * config.min_gross_salary;
    let cas_applicable = annual_net > dec!(12) * config.min_gross_salary;

    let mut total_difference = Decimal::ZERO;

    let months: Vec<MonthlyCalc> = (0..12)
        .map(|i| {
            let rev = month_revenues[i];
            let exp = month_expenses[i];
            let net_pre = monthly_net_pre[i];

            let cas = if cas_applicable {
                round2(net_pre * rates.cas_rate)
            } else {
                Decimal::ZERO
            };
            let cass = if cass_applicable {
                round2(net_pre * rates.cass_rate)
            } else {
                Decimal::ZERO
            };
            let income_tax = round2(
                ((net_pre - cas - cass) * rates.income_tax_rate).max(Decimal::ZERO),
            );
            let net_after = round2(net_pre - cas - cass - income_tax);

            if exp > rev {
                total_difference += round2(exp - rev);
            }

            MonthlyCalc {
                month: i as u32 + 1,
                revenues: round2(rev),
                // Display rule: a month with zero revenue reports zero
                // expenses; its deficit only feeds total_difference.
                expenses: if rev == Decimal::ZERO {
                    Decimal::ZERO
                } else {
                    round2(exp)
                },
                cas,
                cass,
                income_tax,
                net_income: net_after,
            }
        })
        .collect();

    let mut totals = YearTotals::default();
    for m in &months {
        totals.revenues += m.revenues;
        totals.expenses += m.expenses;
        totals.cas += m.cas;
        totals.cass += m.cass;
        totals.income_tax += m.income_tax;
        totals.net_income += m.net_income;
    }
    totals.revenues = round2(totals.revenues);
    totals.expenses = round2(totals.expenses);
    totals.cas = round2(totals.cas);
    totals.cass = round2(totals.cass);
    totals.income_tax = round2(totals.income_tax);
    totals.net_income = round2(totals.net_income);

    // Deficit reconciliation: reduce the contribution totals by the rates
    // applied to the accumulated deficit, and hand the reduction back to the
    // net income total. Reductions never push a total below zero.
    let cas_reduction = if cas_applicable {
        round2(total_difference * rates.cas_rate)
    } else {
        Decimal::ZERO
    };
    let cass_reduction = if cass_applicable {
        round2(total_difference * rates.cass_rate)
    } else {
        Decimal::ZERO
    };
    let income_tax_reduction = round2(
        ((total_difference - cas_reduction - cass_reduction) * rates.income_tax_rate)
            .max(Decimal::ZERO),
    );

    totals.cas = round2((totals.cas - cas_reduction).max(Decimal::ZERO));
    totals.cass = round2((totals.cass - cass_reduction).max(Decimal::ZERO));
    totals.income_tax = round2((totals.income_tax - income_tax_reduction).max(Decimal::ZERO));
    totals.net_income = round2(
        totals.net_income + cas_reduction + cass_reduction + income_tax_reduction,
    );

    let differences = if total_difference > Decimal::ZERO {
        let cass_month_sum = round2(months.iter().map(|m| m.cass).sum::<Decimal>());
        Some(DifferenceAdjustment {
            total_difference: round2(total_difference),
            cas_reduction,
            cass_reduction,
            income_tax_reduction,
            cass_month_sum,
            cass_rest: round2(cass_month_sum - totals.cass),
        })
    } else {
        None
    };

    YearSummary {
        year,
        months,
        totals,
        differences,
    }
}

/// Compute a year summary behind the audit envelope, with configuration
/// validation up front.
pub fn calculate_tax_year(
    input: &TaxYearInput,
) -> PfaFiscalResult<ComputationOutput<YearSummary>> {
    let start = Instant::now();
    let warnings = validate_config(&input.config)?;

    let result = compute_year_summary(&input.revenues, &input.expenses, input.year, &input.config);

    let assumptions = serde_json::json!({
        "year": input.year,
        "min_gross_salary": input.config.min_gross_salary.to_string(),
        "cas_rate": input.config.rates.cas_rate.to_string(),
        "cass_rate": input.config.rates.cass_rate.to_string(),
        "income_tax_rate": input.config.rates.income_tax_rate.to_string(),
        "revenue_records": input.revenues.len(),
        "expense_records": input.expenses.len(),
    });

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Cash-basis monthly aggregation with threshold-gated CAS/CASS and deficit reconciliation",
        &assumptions,
        warnings,
        elapsed,
        result,
    ))
}

/// Validate the rate configuration, collecting warnings for inert fields.
fn validate_config(config: &RateConfig) -> PfaFiscalResult<Vec<String>> {
    if config.min_gross_salary <= Decimal::ZERO {
        return Err(PfaFiscalError::InvalidInput {
            field: "min_gross_salary".to_string(),
            reason: "Minimum gross salary must be positive".to_string(),
        });
    }
    for (name, rate) in [
        ("cas_rate", config.rates.cas_rate),
        ("cass_rate", config.rates.cass_rate),
        ("income_tax_rate", config.rates.income_tax_rate),
    ] {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(PfaFiscalError::InvalidInput {
                field: name.to_string(),
                reason: "Rates are fractions and must lie within [0, 1]".to_string(),
            });
        }
    }

    let mut warnings = Vec::new();
    if config.threshold == SalaryThreshold::TwentyFour {
        warnings.push(
            "The 24-salary CAS threshold selector is accepted but not applied; CAS is \
             gated at 12 minimum gross salaries."
                .to_string(),
        );
    }
    if config.apply_cas == Some(true) {
        warnings.push(
            "apply_cas is accepted but not applied; CAS applicability is derived solely \
             from the annual net threshold."
                .to_string(),
        );
    }
    if config.cass_on_revenue == Some(false) {
        warnings.push(
            "cass_on_revenue is accepted but not applied; CASS is always assessed on \
             monthly net income."
                .to_string(),
        );
    }
    Ok(warnings)
}

// ---------------------------------------------------------------------------
// Cash vs fiscal comparison
// ---------------------------------------------------------------------------

/// Compare the fiscal year picture against plain cash movements.
///
/// The cash side counts every dated record in the year, including uncollected
/// invoices and non-deductible expenses.
pub fn compare_cash_fiscal(
    revenues: &[RevenueEntry],
    expenses: &[ExpenseEntry],
    summary: &YearSummary,
) -> CashFiscalComparison {
    let year = summary.year;

    let total_cash_revenues: Decimal = revenues
        .iter()
        .filter(|e| e.record.created_at.is_some_and(|d| d.year() == year))
        .map(|e| e.record.amount)
        .sum();
    let total_cash_expenses: Decimal = expenses
        .iter()
        .filter(|e| e.record.created_at.is_some_and(|d| d.year() == year))
        .map(|e| e.record.amount)
        .sum();

    let total_taxes: Decimal = summary
        .months
        .iter()
        .map(|m| m.cas + m.cass + m.income_tax)
        .sum();

    let fiscal_net_after_taxes = summary.totals.net_income;
    let cash_net_after_all = total_cash_revenues - total_cash_expenses - total_taxes;

    CashFiscalComparison {
        total_cash_revenues: round2(total_cash_revenues),
        total_cash_expenses: round2(total_cash_expenses),
        total_taxes: round2(total_taxes),
        fiscal_net_after_taxes: round2(fiscal_net_after_taxes),
        cash_net_after_all: round2(cash_net_after_all),
        timing_difference: round2(fiscal_net_after_taxes - cash_net_after_all),
    }
}

/// Cash-vs-fiscal comparison behind the audit envelope.
pub fn calculate_cash_fiscal(
    input: &TaxYearInput,
) -> PfaFiscalResult<ComputationOutput<CashFiscalComparison>> {
    let start = Instant::now();
    let warnings = validate_config(&input.config)?;

    let summary =
        compute_year_summary(&input.revenues, &input.expenses, input.year, &input.config);
    let result = compare_cash_fiscal(&input.revenues, &input.expenses, &summary);

    let assumptions = serde_json::json!({
        "year": input.year,
        "revenue_records": input.revenues.len(),
        "expense_records": input.expenses.len(),
    });

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Cash movements for the year compared against the fiscal net after taxes",
        &assumptions,
        warnings,
        elapsed,
        result,
    ))
}

/// Distinct calendar years with at least one dated record, newest first.
pub fn years_with_activity(revenues: &[RevenueEntry], expenses: &[ExpenseEntry]) -> Vec<i32> {
    let mut years: Vec<i32> = revenues
        .iter()
        .filter_map(|e| e.record.created_at)
        .chain(expenses.iter().filter_map(|e| e.record.created_at))
        .map(|d| d.year())
        .collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn revenue(id: &str, amount: Money, created: NaiveDate) -> RevenueEntry {
        RevenueEntry {
            id: id.to_string(),
            record: RevenueRecord {
                amount,
                series: None,
                number: None,
                paid: None,
                created_at: Some(created),
                paid_at: None,
                note: None,
            },
        }
    }

    fn expense(id: &str, amount: Money, created: NaiveDate) -> ExpenseEntry {
        ExpenseEntry {
            id: id.to_string(),
            record: ExpenseRecord {
                amount,
                category: None,
                name: None,
                created_at: Some(created),
                note: None,
                deductibility: None,
            },
        }
    }

    #[test]
    fn test_empty_year_has_twelve_zero_months() {
        let summary = compute_year_summary(&[], &[], 2024, &RateConfig::default());

        assert_eq!(summary.months.len(), 12);
        for (i, m) in summary.months.iter().enumerate() {
            assert_eq!(m.month, i as u32 + 1);
            assert_eq!(m.revenues, dec!(0));
            assert_eq!(m.net_income, dec!(0));
        }
        assert_eq!(summary.totals, YearTotals::default());
        assert!(summary.differences.is_none());
    }

    #[test]
    fn test_months_below_cass_threshold_pay_income_tax_only() {
        // 10_000/month for 2 months = 20_000 annual net, below 6 * 4050.
        let revenues = vec![
            revenue("r1", dec!(10000), date(2024, 1, 10)),
            revenue("r2", dec!(10000), date(2024, 2, 10)),
        ];
        let summary = compute_year_summary(&revenues, &[], 2024, &RateConfig::default());

        let jan = &summary.months[0];
        assert_eq!(jan.cas, dec!(0));
        assert_eq!(jan.cass, dec!(0));
        assert_eq!(jan.income_tax, dec!(1000));
        assert_eq!(jan.net_income, dec!(9000));
        assert_eq!(summary.totals.net_income, dec!(18000));
    }

    #[test]
    fn test_cass_applies_above_six_salaries() {
        // 48_000 annual net: above 24_300 (CASS), below 48_600 (CAS).
        let revenues: Vec<_> = (1..=6)
            .map(|m| revenue(&format!("r{m}"), dec!(10000), date(2024, m, 5)))
            .collect();
        let expenses: Vec<_> = (1..=6)
            .map(|m| expense(&format!("e{m}"), dec!(2000), date(2024, m, 20)))
            .collect();
        let summary = compute_year_summary(&revenues, &expenses, 2024, &RateConfig::default());

        let jan = &summary.months[0];
        assert_eq!(jan.revenues, dec!(10000));
        assert_eq!(jan.expenses, dec!(2000));
        assert_eq!(jan.cas, dec!(0));
        assert_eq!(jan.cass, dec!(800));
        assert_eq!(jan.income_tax, dec!(720));
        assert_eq!(jan.net_income, dec!(6480));

        assert_eq!(summary.totals.revenues, dec!(60000));
        assert_eq!(summary.totals.expenses, dec!(12000));
        assert_eq!(summary.totals.cass, dec!(4800));
        assert_eq!(summary.totals.income_tax, dec!(4320));
        assert_eq!(summary.totals.net_income, dec!(38880));
        assert!(summary.differences.is_none());
    }

    #[test]
    fn test_cas_threshold_is_strictly_greater() {
        // Exactly 12 * 4050 = 48_600: CAS must not trigger.
        let at_threshold = vec![revenue("r1", dec!(48600), date(2024, 3, 1))];
        let summary = compute_year_summary(&at_threshold, &[], 2024, &RateConfig::default());
        assert_eq!(summary.months[2].cas, dec!(0));
        assert_eq!(summary.months[2].cass, dec!(4860));

        // One cent over: CAS triggers.
        let over = vec![revenue("r1", dec!(48600.01), date(2024, 3, 1))];
        let summary = compute_year_summary(&over, &[], 2024, &RateConfig::default());
        assert_eq!(summary.months[2].cas, dec!(12150.00));
    }

    #[test]
    fn test_unpaid_revenue_is_excluded() {
        let mut entry = revenue("r1", dec!(5000), date(2024, 1, 10));
        entry.record.paid = Some(false);
        let summary = compute_year_summary(&[entry], &[], 2024, &RateConfig::default());
        assert_eq!(summary.totals.revenues, dec!(0));
    }

    #[test]
    fn test_records_outside_year_or_undated_are_excluded() {
        let mut undated = revenue("r1", dec!(5000), date(2024, 1, 10));
        undated.record.created_at = None;
        let other_year = revenue("r2", dec!(5000), date(2023, 6, 1));
        let summary =
            compute_year_summary(&[undated, other_year], &[], 2024, &RateConfig::default());
        assert_eq!(summary.totals.revenues, dec!(0));
    }

    #[test]
    fn test_deficit_month_floors_to_zero_and_feeds_difference() {
        // March: no revenue, 500 spent. The row shows zero everywhere; the
        // deficit only surfaces through the difference adjustment.
        let expenses = vec![expense("e1", dec!(500), date(2024, 3, 5))];
        let summary = compute_year_summary(&[], &expenses, 2024, &RateConfig::default());

        let march = &summary.months[2];
        assert_eq!(march.revenues, dec!(0));
        assert_eq!(march.expenses, dec!(0));
        assert_eq!(march.net_income, dec!(0));

        let diff = summary.differences.expect("difference row expected");
        assert_eq!(diff.total_difference, dec!(500));
        assert_eq!(diff.cas_reduction, dec!(0));
        assert_eq!(diff.cass_reduction, dec!(0));
        // The income-tax reduction is computed from the deficit even though
        // no tax was assessed, and it flows back into the net total.
        assert_eq!(diff.income_tax_reduction, dec!(50));
        assert_eq!(summary.totals.income_tax, dec!(0));
        assert_eq!(summary.totals.net_income, dec!(50));
    }

    #[test]
    fn test_reductions_hit_totals_not_months() {
        // Jan earns 10_000 clean; Feb spends 3_000 with no revenue.
        let revenues = vec![revenue("r1", dec!(10000), date(2024, 1, 10))];
        let expenses = vec![expense("e1", dec!(3000), date(2024, 2, 15))];
        let summary = compute_year_summary(&revenues, &expenses, 2024, &RateConfig::default());

        assert_eq!(summary.months[0].income_tax, dec!(1000));
        assert_eq!(summary.months[0].net_income, dec!(9000));

        let monthly_net_sum: Decimal = summary.months.iter().map(|m| m.net_income).sum();
        assert_eq!(monthly_net_sum, dec!(9000));

        let diff = summary.differences.expect("difference row expected");
        assert_eq!(diff.total_difference, dec!(3000));
        assert_eq!(diff.income_tax_reduction, dec!(300));
        assert_eq!(summary.totals.income_tax, dec!(700));
        assert_eq!(summary.totals.net_income, dec!(9300));
        assert_eq!(diff.cass_month_sum, dec!(0));
        assert_eq!(diff.cass_rest, dec!(0));
    }

    #[test]
    fn test_cass_reduction_and_reconciliation_diagnostics() {
        // High-earning year with one deficit month so both CASS and CAS
        // reductions engage.
        let revenues: Vec<_> = (1..=10)
            .map(|m| revenue(&format!("r{m}"), dec!(10000), date(2024, m, 5)))
            .collect();
        let expenses = vec![expense("e1", dec!(2000), date(2024, 11, 5))];
        let summary = compute_year_summary(&revenues, &expenses, 2024, &RateConfig::default());

        // Annual net 100_000: both thresholds exceeded.
        let jan = &summary.months[0];
        assert_eq!(jan.cas, dec!(2500));
        assert_eq!(jan.cass, dec!(1000));

        let diff = summary.differences.expect("difference row expected");
        assert_eq!(diff.total_difference, dec!(2000));
        assert_eq!(diff.cas_reduction, dec!(500));
        assert_eq!(diff.cass_reduction, dec!(200));
        // (2000 - 500 - 200) * 0.10
        assert_eq!(diff.income_tax_reduction, dec!(130));

        assert_eq!(summary.totals.cas, dec!(24500));
        assert_eq!(summary.totals.cass, dec!(9800));
        assert_eq!(diff.cass_month_sum, dec!(10000));
        assert_eq!(diff.cass_rest, dec!(200));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let revenues = vec![revenue("r1", dec!(12345.67), date(2024, 5, 2))];
        let expenses = vec![expense("e1", dec!(234.56), date(2024, 5, 20))];
        let config = RateConfig::default();

        let a = compute_year_summary(&revenues, &expenses, 2024, &config);
        let b = compute_year_summary(&revenues, &expenses, 2024, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_calculate_rejects_bad_config() {
        let mut input = TaxYearInput {
            revenues: vec![],
            expenses: vec![],
            year: 2024,
            config: RateConfig::default(),
        };
        input.config.rates.cas_rate = dec!(1.5);
        match calculate_tax_year(&input) {
            Err(PfaFiscalError::InvalidInput { field, .. }) => assert_eq!(field, "cas_rate"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }

        input.config.rates.cas_rate = dec!(0.25);
        input.config.min_gross_salary = dec!(0);
        assert!(calculate_tax_year(&input).is_err());
    }

    #[test]
    fn test_inert_fields_warn_without_changing_figures() {
        let base = TaxYearInput {
            revenues: vec![revenue("r1", dec!(30000), date(2024, 1, 10))],
            expenses: vec![],
            year: 2024,
            config: RateConfig::default(),
        };
        let plain = calculate_tax_year(&base).unwrap();
        assert!(plain.warnings.is_empty());

        let mut altered = base.clone();
        altered.config.threshold = SalaryThreshold::TwentyFour;
        altered.config.cass_on_revenue = Some(false);
        let warned = calculate_tax_year(&altered).unwrap();

        assert_eq!(warned.warnings.len(), 2);
        assert!(warned.warnings.iter().any(|w| w.contains("24-salary")));
        assert_eq!(warned.result, plain.result);
    }

    #[test]
    fn test_cash_fiscal_counts_unpaid_revenue() {
        let mut unpaid = revenue("r2", dec!(4000), date(2024, 2, 1));
        unpaid.record.paid = Some(false);
        let revenues = vec![revenue("r1", dec!(10000), date(2024, 1, 10)), unpaid];
        let expenses = vec![expense("e1", dec!(1000), date(2024, 1, 20))];

        let config = RateConfig::default();
        let summary = compute_year_summary(&revenues, &expenses, 2024, &config);
        let cmp = compare_cash_fiscal(&revenues, &expenses, &summary);

        // Fiscal side sees only the collected 10_000; cash side sees 14_000.
        assert_eq!(summary.totals.revenues, dec!(10000));
        assert_eq!(cmp.total_cash_revenues, dec!(14000));
        assert_eq!(cmp.total_cash_expenses, dec!(1000));
        assert_eq!(cmp.total_taxes, dec!(900));
        assert_eq!(cmp.cash_net_after_all, dec!(12100));
        assert_eq!(
            cmp.timing_difference,
            cmp.fiscal_net_after_taxes - cmp.cash_net_after_all
        );
    }

    #[test]
    fn test_years_with_activity_descending_dedup() {
        let revenues = vec![
            revenue("r1", dec!(1), date(2023, 1, 1)),
            revenue("r2", dec!(1), date(2025, 6, 1)),
        ];
        let mut undated = expense("e1", dec!(1), date(2024, 1, 1));
        undated.record.created_at = None;
        let expenses = vec![expense("e2", dec!(1), date(2023, 3, 1)), undated];

        assert_eq!(years_with_activity(&revenues, &expenses), vec![2025, 2023]);
    }
}
