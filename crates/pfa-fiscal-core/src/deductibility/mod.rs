pub mod allocation;
mod keywords;
pub mod suggestion;

pub use allocation::{
    allocate_deductible, allocate_expenses, calculate_deductible_schedule,
    sum_allocations_by_month, AllocationSource, DeductibleAllocation, DeductibleScheduleInput,
    DeductibleScheduleOutput,
};
pub use suggestion::{
    suggest_deductibility, ActivityDomain, DeductibilitySuggestion, DeductibilityType,
    SuggestionInput,
};
