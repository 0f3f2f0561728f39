use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{Expense, ExpenseTotals};
use crate::errors::LedgerError;
use crate::storage::LedgerStore;

use super::{require_name, require_non_negative, ServiceResult};

/// Expense tracking: a flat dated list with a profit-generating flag, plus
/// full-reduction totals.
pub struct ExpenseService;

impl ExpenseService {
    pub fn list<S: LedgerStore>(
        store: &S,
        date: Option<NaiveDate>,
    ) -> ServiceResult<(Vec<Expense>, ExpenseTotals)> {
        let expenses = store.expenses(date)?;
        let totals = ExpenseTotals::from_expenses(&expenses);
        Ok((expenses, totals))
    }

    pub fn add<S: LedgerStore>(
        store: &mut S,
        date: NaiveDate,
        name: &str,
        amount: f64,
        is_profit: bool,
    ) -> ServiceResult<Expense> {
        let name = require_name(name, "expense")?;
        let amount = require_non_negative(amount, "amount")?;
        let created = store.insert_expense(Expense::new(date, name, amount, is_profit))?;
        tracing::info!(expense = %created.name, amount, "expense recorded");
        Ok(created)
    }

    pub fn edit<S: LedgerStore>(
        store: &mut S,
        id: Uuid,
        name: &str,
        amount: f64,
        date: NaiveDate,
        is_profit: bool,
    ) -> ServiceResult<Expense> {
        let name = require_name(name, "expense")?;
        let amount = require_non_negative(amount, "amount")?;
        let current = store
            .expenses(None)?
            .into_iter()
            .find(|expense| expense.id == id)
            .ok_or_else(|| LedgerError::NotFound(format!("expense {}", id)))?;
        let updated = Expense {
            name,
            amount,
            date,
            is_profit,
            ..current
        };
        Ok(store.update_expense(updated)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn add_list_and_edit_round_trip() {
        let mut store = MemoryStore::new();
        let expense = ExpenseService::add(&mut store, date(), "Charcoal", 8_000.0, true).unwrap();
        ExpenseService::add(&mut store, date(), "Electricity", 45_000.0, false).unwrap();

        let (expenses, totals) = ExpenseService::list(&store, Some(date())).unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(totals.total, 53_000.0);

        ExpenseService::edit(&mut store, expense.id, "Charcoal", 9_500.0, date(), true).unwrap();
        let (_, totals) = ExpenseService::list(&store, Some(date())).unwrap();
        assert_eq!(totals.profit_generating, 9_500.0);
    }

    #[test]
    fn rejects_invalid_input_before_persisting() {
        let mut store = MemoryStore::new();
        assert!(ExpenseService::add(&mut store, date(), "", 100.0, false)
            .unwrap_err()
            .is_validation());
        assert!(ExpenseService::add(&mut store, date(), "Rent", -5.0, false)
            .unwrap_err()
            .is_validation());
        let (expenses, _) = ExpenseService::list(&store, None).unwrap();
        assert!(expenses.is_empty());
    }
}
