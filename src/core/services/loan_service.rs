use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{EmployeeLoan, LoanTotals};
use crate::errors::LedgerError;
use crate::storage::LedgerStore;

use super::{require_name, require_non_negative, ServiceError, ServiceResult};

/// Employee-loan tracking: per-employee list with full-reduction totals, the
/// same ledger shape the venues use.
pub struct LoanService;

impl LoanService {
    pub fn overview<S: LedgerStore>(
        store: &S,
        employee: &str,
    ) -> ServiceResult<(Vec<EmployeeLoan>, LoanTotals)> {
        let loans = store.loans_for(employee)?;
        let totals = LoanTotals::from_loans(&loans);
        Ok((loans, totals))
    }

    pub fn grant<S: LedgerStore>(
        store: &mut S,
        date: NaiveDate,
        employee: &str,
        amount: f64,
    ) -> ServiceResult<EmployeeLoan> {
        let employee = require_name(employee, "employee")?;
        let amount = require_non_negative(amount, "loan amount")?;
        if amount == 0.0 {
            return Err(ServiceError::Invalid("loan amount must be positive".into()));
        }
        Ok(store.insert_loan(EmployeeLoan::new(date, employee, amount))?)
    }

    /// Applies a repayment installment. Overpaying is rejected rather than
    /// leaving a negative remainder.
    pub fn record_payment<S: LedgerStore>(
        store: &mut S,
        employee: &str,
        loan_id: Uuid,
        payment: f64,
    ) -> ServiceResult<EmployeeLoan> {
        let payment = require_non_negative(payment, "payment")?;
        let mut loan = store
            .loans_for(employee)?
            .into_iter()
            .find(|loan| loan.id == loan_id)
            .ok_or_else(|| LedgerError::NotFound(format!("loan {}", loan_id)))?;
        if payment > loan.remaining() {
            return Err(ServiceError::Invalid(format!(
                "payment {} exceeds the {} remaining",
                payment,
                loan.remaining()
            )));
        }
        loan.total_paid += payment;
        Ok(store.update_loan(loan)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn payments_accumulate_and_totals_recompute() {
        let mut store = MemoryStore::new();
        let loan = LoanService::grant(&mut store, date(), "Eric", 50_000.0).unwrap();
        LoanService::record_payment(&mut store, "Eric", loan.id, 20_000.0).unwrap();
        let settled = LoanService::record_payment(&mut store, "Eric", loan.id, 30_000.0).unwrap();
        assert!(settled.is_settled());

        let (_, totals) = LoanService::overview(&store, "eric").unwrap();
        assert_eq!(totals.total_remaining, 0.0);
        assert_eq!(totals.total_paid, 50_000.0);
    }

    #[test]
    fn overpayment_is_rejected() {
        let mut store = MemoryStore::new();
        let loan = LoanService::grant(&mut store, date(), "Aline", 10_000.0).unwrap();
        let err =
            LoanService::record_payment(&mut store, "Aline", loan.id, 15_000.0).unwrap_err();
        assert!(err.is_validation());
    }
}
