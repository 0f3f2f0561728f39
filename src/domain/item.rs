use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;

/// Closing stock strictly below this count flags the row for restocking.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// One product/service row of a venue's ledger, scoped to a single calendar
/// day. Only `stock_in`, `sold`, and the two prices are mutable once the day
/// is initialized; everything else derives from them on read.
///
/// The serde aliases absorb the field names older API payloads used
/// (`entree`, `initial_price`, plain `price`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerItem {
    pub id: Uuid,
    pub name: String,
    #[serde(alias = "initial_price")]
    pub unit_cost: f64,
    #[serde(alias = "price")]
    pub unit_price: f64,
    pub opening_stock: u32,
    #[serde(default, alias = "entree")]
    pub stock_in: u32,
    #[serde(default)]
    pub sold: u32,
    pub date: NaiveDate,
}

impl LedgerItem {
    pub fn new(
        date: NaiveDate,
        name: impl Into<String>,
        unit_cost: f64,
        unit_price: f64,
        opening_stock: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            unit_cost,
            unit_price,
            opening_stock,
            stock_in: 0,
            sold: 0,
            date,
        }
    }

    /// Units available over the whole day: carried stock plus deliveries.
    /// Saturates instead of overflowing on absurd counts.
    pub fn total_stock(&self) -> u32 {
        self.opening_stock.saturating_add(self.stock_in)
    }

    /// Units left at day's end. Signed: only negative when the allow-and-flag
    /// oversell policy let `sold` exceed `total_stock`.
    pub fn closing_stock(&self) -> i64 {
        self.total_stock() as i64 - self.sold as i64
    }

    pub fn sales_revenue(&self) -> f64 {
        self.sold as f64 * self.unit_price
    }

    pub fn profit(&self) -> f64 {
        self.sold as f64 * (self.unit_price - self.unit_cost)
    }

    /// Cost-basis value of the remaining inventory.
    pub fn stock_value(&self) -> f64 {
        self.closing_stock() as f64 * self.unit_cost
    }

    pub fn is_low_stock(&self) -> bool {
        (0..LOW_STOCK_THRESHOLD).contains(&self.closing_stock())
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.closing_stock() == 0
    }

    /// True when oversell drove closing stock negative.
    pub fn is_deficit(&self) -> bool {
        self.closing_stock() < 0
    }

    /// Returns a copy with `field` replaced. Derived values need no separate
    /// refresh: they are recomputed on every read.
    pub fn with_field(&self, field: ItemField, value: u32) -> Self {
        let mut updated = self.clone();
        match field {
            ItemField::StockIn => updated.stock_in = value,
            ItemField::Sold => updated.sold = value,
        }
        updated
    }
}

impl Identifiable for LedgerItem {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// The two quantity fields a day-sheet edit may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemField {
    StockIn,
    Sold,
}

impl ItemField {
    pub fn label(&self) -> &'static str {
        match self {
            ItemField::StockIn => "entree",
            ItemField::Sold => "sold",
        }
    }
}

/// What to do when an edit would drive closing stock negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OversellPolicy {
    /// Refuse the edit, matching the original sell guard.
    #[default]
    Reject,
    /// Cap `sold` at the available total stock.
    Clamp,
    /// Accept the edit and report the row as a reconciliation deficit.
    AllowAndFlag,
}

impl OversellPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            OversellPolicy::Reject => "reject",
            OversellPolicy::Clamp => "clamp",
            OversellPolicy::AllowAndFlag => "allow",
        }
    }
}
