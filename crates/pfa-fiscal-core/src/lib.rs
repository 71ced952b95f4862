pub mod error;
pub mod rounding;
pub mod types;

#[cfg(feature = "tax")]
pub mod tax;

#[cfg(feature = "deductibility")]
pub mod deductibility;

pub use error::PfaFiscalError;
pub use types::*;

/// Standard result type for all pfa-fiscal operations
pub type PfaFiscalResult<T> = Result<T, PfaFiscalError>;
