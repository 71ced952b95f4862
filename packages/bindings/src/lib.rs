use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Tax engine
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_tax_year(input_json: String) -> NapiResult<String> {
    let input: pfa_fiscal_core::tax::TaxYearInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = pfa_fiscal_core::tax::calculate_tax_year(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compare_cash_fiscal(input_json: String) -> NapiResult<String> {
    let input: pfa_fiscal_core::tax::TaxYearInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = pfa_fiscal_core::tax::calculate_cash_fiscal(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Deductibility
// ---------------------------------------------------------------------------

#[napi]
pub fn allocate_deductibles(input_json: String) -> NapiResult<String> {
    let input: pfa_fiscal_core::deductibility::DeductibleScheduleInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = pfa_fiscal_core::deductibility::calculate_deductible_schedule(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn suggest_deductibility(input_json: String) -> NapiResult<String> {
    let input: pfa_fiscal_core::deductibility::SuggestionInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let suggestion = pfa_fiscal_core::deductibility::suggest_deductibility(&input);
    serde_json::to_string(&suggestion).map_err(to_napi_error)
}
