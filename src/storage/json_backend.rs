use std::{
    env, fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::domain::{EmployeeLoan, Expense, LedgerItem, TakingsRecord, Venue};
use crate::errors::LedgerError;

use super::{ItemPatch, LedgerStore, Result};

const DEFAULT_DIR_NAME: &str = ".venue_core";
const LEDGER_DIR: &str = "ledgers";
const TMP_EXTENSION: &str = "tmp";

/// Returns the application data directory, defaulting to `~/.venue_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("VENUE_CORE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// File-per-resource JSON store. Each venue's items live in one file under
/// `<root>/ledgers/`, written atomically by staging to a temporary file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
    ledgers_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(root: PathBuf) -> Result<Self> {
        let ledgers_dir = root.join(LEDGER_DIR);
        fs::create_dir_all(&ledgers_dir)?;
        Ok(Self { root, ledgers_dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(app_data_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn items_path(&self, venue: Venue) -> PathBuf {
        self.ledgers_dir.join(format!("{}.json", venue.resource()))
    }

    fn takings_path(&self, venue: Venue) -> PathBuf {
        self.ledgers_dir
            .join(format!("{}_takings.json", venue.resource()))
    }

    fn expenses_path(&self) -> PathBuf {
        self.root.join("expenses.json")
    }

    fn loans_path(&self) -> PathBuf {
        self.root.join("loans.json")
    }

    fn load_items(&self, venue: Venue) -> Result<Vec<LedgerItem>> {
        read_collection(&self.items_path(venue))
    }

    fn store_items(&self, venue: Venue, items: &[LedgerItem]) -> Result<()> {
        write_collection(&self.items_path(venue), items)
    }
}

impl LedgerStore for JsonStorage {
    fn items_for(&self, venue: Venue, date: NaiveDate) -> Result<Vec<LedgerItem>> {
        let mut items = self.load_items(venue)?;
        items.retain(|item| item.date == date);
        Ok(items)
    }

    fn get_item(&self, venue: Venue, id: Uuid) -> Result<LedgerItem> {
        self.load_items(venue)?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| LedgerError::NotFound(format!("{} item {}", venue.resource(), id)))
    }

    fn insert_item(&mut self, venue: Venue, item: LedgerItem) -> Result<LedgerItem> {
        let mut items = self.load_items(venue)?;
        items.push(item.clone());
        self.store_items(venue, &items)?;
        tracing::debug!(venue = venue.resource(), item = %item.name, "item persisted");
        Ok(item)
    }

    fn update_item(&mut self, venue: Venue, id: Uuid, patch: ItemPatch) -> Result<LedgerItem> {
        let mut items = self.load_items(venue)?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| LedgerError::NotFound(format!("{} item {}", venue.resource(), id)))?;
        patch.apply(item);
        let updated = item.clone();
        self.store_items(venue, &items)?;
        Ok(updated)
    }

    fn expenses(&self, date: Option<NaiveDate>) -> Result<Vec<Expense>> {
        let mut expenses: Vec<Expense> = read_collection(&self.expenses_path())?;
        if let Some(date) = date {
            expenses.retain(|expense| expense.date == date);
        }
        Ok(expenses)
    }

    fn insert_expense(&mut self, expense: Expense) -> Result<Expense> {
        let mut expenses: Vec<Expense> = read_collection(&self.expenses_path())?;
        expenses.push(expense.clone());
        write_collection(&self.expenses_path(), &expenses)?;
        Ok(expense)
    }

    fn update_expense(&mut self, expense: Expense) -> Result<Expense> {
        let mut expenses: Vec<Expense> = read_collection(&self.expenses_path())?;
        let slot = expenses
            .iter_mut()
            .find(|existing| existing.id == expense.id)
            .ok_or_else(|| LedgerError::NotFound(format!("expense {}", expense.id)))?;
        *slot = expense.clone();
        write_collection(&self.expenses_path(), &expenses)?;
        Ok(expense)
    }

    fn loans_for(&self, employee: &str) -> Result<Vec<EmployeeLoan>> {
        let mut loans: Vec<EmployeeLoan> = read_collection(&self.loans_path())?;
        loans.retain(|loan| loan.employee.eq_ignore_ascii_case(employee));
        Ok(loans)
    }

    fn insert_loan(&mut self, loan: EmployeeLoan) -> Result<EmployeeLoan> {
        let mut loans: Vec<EmployeeLoan> = read_collection(&self.loans_path())?;
        loans.push(loan.clone());
        write_collection(&self.loans_path(), &loans)?;
        Ok(loan)
    }

    fn update_loan(&mut self, loan: EmployeeLoan) -> Result<EmployeeLoan> {
        let mut loans: Vec<EmployeeLoan> = read_collection(&self.loans_path())?;
        let slot = loans
            .iter_mut()
            .find(|existing| existing.id == loan.id)
            .ok_or_else(|| LedgerError::NotFound(format!("loan {}", loan.id)))?;
        *slot = loan.clone();
        write_collection(&self.loans_path(), &loans)?;
        Ok(loan)
    }

    fn takings_for(&self, venue: Venue, date: NaiveDate) -> Result<Vec<TakingsRecord>> {
        let mut records: Vec<TakingsRecord> = read_collection(&self.takings_path(venue))?;
        records.retain(|record| record.date == date);
        Ok(records)
    }

    fn insert_takings(&mut self, venue: Venue, record: TakingsRecord) -> Result<TakingsRecord> {
        let path = self.takings_path(venue);
        let mut records: Vec<TakingsRecord> = read_collection(&path)?;
        records.push(record.clone());
        write_collection(&path, &records)?;
        Ok(record)
    }
}

/// Reads a JSON array from disk. A missing file is an empty collection;
/// unreadable or malformed content is a retrieval failure.
fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = fs::read_to_string(path)
        .map_err(|err| LedgerError::Retrieval(format!("{}: {}", path.display(), err)))?;
    serde_json::from_str(&data)
        .map_err(|err| LedgerError::Retrieval(format!("{}: {}", path.display(), err)))
}

fn write_collection<T: Serialize>(path: &Path, values: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(values)
        .map_err(|err| LedgerError::Persist(err.to_string()))?;
    let tmp = path.with_extension(TMP_EXTENSION);
    fs::write(&tmp, json)
        .and_then(|_| fs::rename(&tmp, path))
        .map_err(|err| LedgerError::Persist(format!("{}: {}", path.display(), err)))
}
