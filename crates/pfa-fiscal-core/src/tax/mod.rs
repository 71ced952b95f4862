pub mod engine;

pub use engine::{
    calculate_cash_fiscal, calculate_tax_year, compare_cash_fiscal, compute_year_summary,
    years_with_activity, CashFiscalComparison, DifferenceAdjustment, MonthlyCalc, TaxYearInput,
    YearSummary, YearTotals,
};
