use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{EmployeeLoan, Expense, LedgerItem, TakingsRecord, Venue};
use crate::errors::LedgerError;

use super::{ItemPatch, LedgerStore, Result};

/// In-process store used by tests and ephemeral shell sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: HashMap<Venue, Vec<LedgerItem>>,
    expenses: Vec<Expense>,
    loans: Vec<EmployeeLoan>,
    takings: HashMap<Venue, Vec<TakingsRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for MemoryStore {
    fn items_for(&self, venue: Venue, date: NaiveDate) -> Result<Vec<LedgerItem>> {
        Ok(self
            .items
            .get(&venue)
            .map(|items| {
                items
                    .iter()
                    .filter(|item| item.date == date)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn get_item(&self, venue: Venue, id: Uuid) -> Result<LedgerItem> {
        self.items
            .get(&venue)
            .and_then(|items| items.iter().find(|item| item.id == id))
            .cloned()
            .ok_or_else(|| LedgerError::NotFound(format!("{} item {}", venue.resource(), id)))
    }

    fn insert_item(&mut self, venue: Venue, item: LedgerItem) -> Result<LedgerItem> {
        self.items.entry(venue).or_default().push(item.clone());
        Ok(item)
    }

    fn update_item(&mut self, venue: Venue, id: Uuid, patch: ItemPatch) -> Result<LedgerItem> {
        let items = self
            .items
            .get_mut(&venue)
            .ok_or_else(|| LedgerError::NotFound(format!("{} item {}", venue.resource(), id)))?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| LedgerError::NotFound(format!("{} item {}", venue.resource(), id)))?;
        patch.apply(item);
        Ok(item.clone())
    }

    fn expenses(&self, date: Option<NaiveDate>) -> Result<Vec<Expense>> {
        Ok(self
            .expenses
            .iter()
            .filter(|expense| date.map_or(true, |d| expense.date == d))
            .cloned()
            .collect())
    }

    fn insert_expense(&mut self, expense: Expense) -> Result<Expense> {
        self.expenses.push(expense.clone());
        Ok(expense)
    }

    fn update_expense(&mut self, expense: Expense) -> Result<Expense> {
        let slot = self
            .expenses
            .iter_mut()
            .find(|existing| existing.id == expense.id)
            .ok_or_else(|| LedgerError::NotFound(format!("expense {}", expense.id)))?;
        *slot = expense.clone();
        Ok(expense)
    }

    fn loans_for(&self, employee: &str) -> Result<Vec<EmployeeLoan>> {
        Ok(self
            .loans
            .iter()
            .filter(|loan| loan.employee.eq_ignore_ascii_case(employee))
            .cloned()
            .collect())
    }

    fn insert_loan(&mut self, loan: EmployeeLoan) -> Result<EmployeeLoan> {
        self.loans.push(loan.clone());
        Ok(loan)
    }

    fn update_loan(&mut self, loan: EmployeeLoan) -> Result<EmployeeLoan> {
        let slot = self
            .loans
            .iter_mut()
            .find(|existing| existing.id == loan.id)
            .ok_or_else(|| LedgerError::NotFound(format!("loan {}", loan.id)))?;
        *slot = loan.clone();
        Ok(loan)
    }

    fn takings_for(&self, venue: Venue, date: NaiveDate) -> Result<Vec<TakingsRecord>> {
        Ok(self
            .takings
            .get(&venue)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| record.date == date)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn insert_takings(&mut self, venue: Venue, record: TakingsRecord) -> Result<TakingsRecord> {
        self.takings.entry(venue).or_default().push(record.clone());
        Ok(record)
    }
}
