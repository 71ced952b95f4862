use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::keywords::*;
use crate::types::{Money, Percent};

/// Purchases at or above this amount in the equipment category are suggested
/// as fixed assets, matching the inventory cutoff used by the allocator.
const ASSET_AMOUNT_THRESHOLD: Decimal = dec!(2500);
const DEFAULT_EQUIPMENT_LIFE_MONTHS: u32 = 36;
const MIXED_USE_BUSINESS_PCT: Decimal = dec!(50);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The user's activity domain, from their profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActivityDomain {
    It,
    Medical,
    Other,
}

/// The treatment a suggestion proposes; mirrors the descriptor tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductibilityType {
    Full,
    Partial,
    Limited,
    Asset,
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionInput {
    pub domain: ActivityDomain,
    /// Category identifier as entered; normalized internally.
    pub category: String,
    /// User-entered name/description of the expense.
    pub title: String,
    #[serde(default)]
    pub amount: Money,
}

/// An advisory classification: a proposed treatment plus warnings for the
/// user to act on. The caller decides whether to apply it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductibilitySuggestion {
    #[serde(rename = "type")]
    pub treatment: DeductibilityType,
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_business_use_percent: Option<Percent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_partial_percent: Option<Percent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_useful_life_months: Option<u32>,
}

impl DeductibilitySuggestion {
    fn new(treatment: DeductibilityType, warnings: Vec<String>) -> Self {
        Self {
            treatment,
            warnings,
            suggested_business_use_percent: None,
            suggested_partial_percent: None,
            suggested_useful_life_months: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Matching helpers
// ---------------------------------------------------------------------------

fn includes_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn is_medical(text: &str) -> bool {
    includes_any(text, MEDICAL_KEYWORDS)
}

/// (technical, management) IT signals.
fn it_signals(text: &str) -> (bool, bool) {
    (
        includes_any(text, IT_TECH_KEYWORDS),
        includes_any(text, IT_MANAGEMENT_KEYWORDS),
    )
}

// ---------------------------------------------------------------------------
// Suggestion
// ---------------------------------------------------------------------------

/// Suggest a deductibility treatment for a prospective expense.
///
/// Stateless and advisory: classification combines the category, the title
/// keywords, the activity domain, and the amount. Warnings flag the cases
/// where the user should double-check or document the deduction.
pub fn suggest_deductibility(input: &SuggestionInput) -> DeductibilitySuggestion {
    let category = input.category.trim().to_lowercase();
    let title = input.title.trim().to_lowercase();

    match category.as_str() {
        "training" | "cursuri" | "course" => suggest_training(input.domain, &title),
        "equipment" | "echipamente" => suggest_equipment(&title, input.amount),
        "utilities" | "utilitati" => {
            let mut s = DeductibilitySuggestion::new(
                DeductibilityType::Full,
                vec![
                    "If utilities cover both the home and the business, set a realistic \
                     business-use percentage (e.g. 30-50%)."
                        .to_string(),
                ],
            );
            s.suggested_business_use_percent = Some(MIXED_USE_BUSINESS_PCT);
            s
        }
        "car" | "auto" | "vehicle" => {
            let mut s = DeductibilitySuggestion::new(
                DeductibilityType::Partial,
                vec![
                    "Mixed personal/business vehicle use is commonly deducted at 50%. If \
                     use is exclusively business, keep supporting evidence (route sheets \
                     etc.)."
                        .to_string(),
                ],
            );
            s.suggested_partial_percent = Some(MIXED_USE_BUSINESS_PCT);
            s
        }
        "rent" | "chirie" => {
            let mut s = DeductibilitySuggestion::new(
                DeductibilityType::Full,
                vec![
                    "If the space is both home and registered office, set a percentage \
                     (area/usage) and keep the contract on file."
                        .to_string(),
                ],
            );
            s.suggested_business_use_percent = Some(MIXED_USE_BUSINESS_PCT);
            s
        }
        "marketing" => DeductibilitySuggestion::new(
            DeductibilityType::Full,
            vec![
                "Make sure the services/ads are bought for the business (invoice issued \
                 to the PFA)."
                    .to_string(),
            ],
        ),
        _ => DeductibilitySuggestion::new(DeductibilityType::Full, Vec::new()),
    }
}

fn suggest_training(domain: ActivityDomain, title: &str) -> DeductibilitySuggestion {
    let medical = is_medical(title);
    let (tech, mgmt) = it_signals(title);
    let generic_biz = includes_any(title, GENERIC_BUSINESS_KEYWORDS);

    let mut warnings = Vec::new();

    match domain {
        ActivityDomain::It => {
            // Strong cross-domain mismatch: a clearly medical course booked
            // against an IT activity defaults to non-deductible.
            if medical && !tech && !mgmt {
                return DeductibilitySuggestion::new(
                    DeductibilityType::None,
                    vec![
                        "This looks like a medical/physiotherapy course (e.g. dry \
                         needling, Mulligan). For an IT activity we suggest marking it \
                         non-deductible (cashflow only), or add a clear justification if \
                         it genuinely serves the business."
                            .to_string(),
                    ],
                );
            }

            if !tech && !mgmt && !generic_biz {
                warnings.push(
                    "The course does not look directly related to IT. Add a \
                     justification or mark it non-deductible."
                        .to_string(),
                );
            } else if !tech && mgmt {
                warnings.push(
                    "Management/agile course: usually fine, but keep the justification \
                     (role, project, activity)."
                        .to_string(),
                );
            }

            DeductibilitySuggestion::new(DeductibilityType::Full, warnings)
        }
        ActivityDomain::Medical => {
            if (tech || mgmt) && !medical {
                return DeductibilitySuggestion::new(
                    DeductibilityType::None,
                    vec![
                        "This looks like an IT/IT-management course (e.g. React, Git, \
                         AWS). For a medical/physiotherapy activity we suggest marking \
                         it non-deductible (cashflow only), or add a justification \
                         (e.g. practice software, digitalization) if applicable."
                            .to_string(),
                    ],
                );
            }

            if !medical && !generic_biz {
                warnings.push(
                    "The course does not look directly related to the medical/ \
                     physiotherapy domain. Add a justification or mark it \
                     non-deductible."
                        .to_string(),
                );
            }

            DeductibilitySuggestion::new(DeductibilityType::Full, warnings)
        }
        ActivityDomain::Other => {
            if !generic_biz && !medical && !tech && !mgmt {
                warnings.push(
                    "Check that the course relates to your activity. If it is personal, \
                     mark it non-deductible."
                        .to_string(),
                );
            }
            DeductibilitySuggestion::new(DeductibilityType::Full, warnings)
        }
    }
}

fn suggest_equipment(title: &str, amount: Money) -> DeductibilitySuggestion {
    let looks_like_equipment = includes_any(title, EQUIPMENT_KEYWORDS);

    if amount >= ASSET_AMOUNT_THRESHOLD {
        let warnings = if looks_like_equipment {
            Vec::new()
        } else {
            vec![
                "The amount suggests a durable good. Check whether this is a fixed \
                 asset (depreciation)."
                    .to_string(),
            ]
        };
        let mut s = DeductibilitySuggestion::new(DeductibilityType::Asset, warnings);
        s.suggested_useful_life_months = Some(DEFAULT_EQUIPMENT_LIFE_MONTHS);
        return s;
    }

    DeductibilitySuggestion::new(DeductibilityType::Full, Vec::new())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
