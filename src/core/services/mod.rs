pub mod expense_service;
pub mod ledger_service;
pub mod loan_service;
pub mod summary_service;

pub use expense_service::ExpenseService;
pub use ledger_service::LedgerService;
pub use loan_service::LoanService;
pub use summary_service::{BusinessSummary, SummaryService, VenueTotal};

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Invalid(String),
}

impl ServiceError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Invalid(_))
    }
}

/// Parses user input as a non-negative whole quantity. Unlike the original
/// dashboard's `Number(x) || 0`, bad input is rejected instead of silently
/// becoming zero.
pub fn parse_quantity(raw: &str) -> ServiceResult<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ServiceError::Invalid(format!("`{}` is not a non-negative quantity", raw)))
}

/// Parses user input as a non-negative money amount.
pub fn parse_amount(raw: &str) -> ServiceResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ServiceError::Invalid(format!("`{}` is not a number", raw)))?;
    if !value.is_finite() || value < 0.0 {
        return Err(ServiceError::Invalid(format!(
            "`{}` is not a non-negative amount",
            raw
        )));
    }
    Ok(value)
}

pub(crate) fn require_name(raw: &str, what: &str) -> ServiceResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Invalid(format!("{} name must not be empty", what)));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn require_non_negative(value: f64, what: &str) -> ServiceResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(ServiceError::Invalid(format!(
            "{} must be a non-negative number",
            what
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_parsing_rejects_garbage_and_negatives() {
        assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
        assert!(parse_quantity("-3").unwrap_err().is_validation());
        assert!(parse_quantity("abc").unwrap_err().is_validation());
        assert!(parse_quantity("1.5").unwrap_err().is_validation());
    }

    #[test]
    fn amount_parsing_rejects_negative_and_non_finite() {
        assert_eq!(parse_amount("1200.50").unwrap(), 1200.5);
        assert!(parse_amount("-1").unwrap_err().is_validation());
        assert!(parse_amount("NaN").unwrap_err().is_validation());
        assert!(parse_amount("inf").unwrap_err().is_validation());
    }
}
