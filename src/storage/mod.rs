//! The storage-collaborator seam. The dashboard's original backend was a REST
//! API with one resource per venue; `LedgerStore` captures that surface so the
//! services can run against an in-memory double or the JSON file backend.

pub mod json_backend;
pub mod memory;

pub use json_backend::JsonStorage;
pub use memory::MemoryStore;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{EmployeeLoan, Expense, LedgerItem, TakingsRecord, Venue};
use crate::errors::LedgerError;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Partial update body for a ledger item, mirroring the original `PUT`
/// payloads: only the present fields change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_in: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
}

impl ItemPatch {
    pub fn stock_in(value: u32) -> Self {
        Self {
            stock_in: Some(value),
            ..Self::default()
        }
    }

    pub fn sold(value: u32) -> Self {
        Self {
            sold: Some(value),
            ..Self::default()
        }
    }

    pub fn prices(unit_cost: f64, unit_price: f64) -> Self {
        Self {
            unit_cost: Some(unit_cost),
            unit_price: Some(unit_price),
            ..Self::default()
        }
    }

    pub fn apply(&self, item: &mut LedgerItem) {
        if let Some(stock_in) = self.stock_in {
            item.stock_in = stock_in;
        }
        if let Some(sold) = self.sold {
            item.sold = sold;
        }
        if let Some(unit_cost) = self.unit_cost {
            item.unit_cost = unit_cost;
        }
        if let Some(unit_price) = self.unit_price {
            item.unit_price = unit_price;
        }
    }
}

/// Canonical persistence surface. Items are never deleted; the snapshot a
/// reader holds may be stale the instant after it is read, so aggregates are
/// recomputed from fresh reads.
pub trait LedgerStore {
    /// Items of one venue scoped to one date. An empty result is normal.
    fn items_for(&self, venue: Venue, date: NaiveDate) -> Result<Vec<LedgerItem>>;

    fn get_item(&self, venue: Venue, id: Uuid) -> Result<LedgerItem>;

    fn insert_item(&mut self, venue: Venue, item: LedgerItem) -> Result<LedgerItem>;

    fn update_item(&mut self, venue: Venue, id: Uuid, patch: ItemPatch) -> Result<LedgerItem>;

    fn expenses(&self, date: Option<NaiveDate>) -> Result<Vec<Expense>>;

    fn insert_expense(&mut self, expense: Expense) -> Result<Expense>;

    fn update_expense(&mut self, expense: Expense) -> Result<Expense>;

    fn loans_for(&self, employee: &str) -> Result<Vec<EmployeeLoan>>;

    fn insert_loan(&mut self, loan: EmployeeLoan) -> Result<EmployeeLoan>;

    fn update_loan(&mut self, loan: EmployeeLoan) -> Result<EmployeeLoan>;

    fn takings_for(&self, venue: Venue, date: NaiveDate) -> Result<Vec<TakingsRecord>>;

    fn insert_takings(&mut self, venue: Venue, record: TakingsRecord) -> Result<TakingsRecord>;
}
