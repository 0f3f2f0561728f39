use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    DaySheet, ItemField, LedgerItem, OversellPolicy, TakingsRecord, TakingsTotals, Venue,
};
use crate::storage::{ItemPatch, LedgerStore};

use super::{require_name, require_non_negative, ServiceError, ServiceResult};

/// Day-sheet operations: the query, creation, and field-edit contracts every
/// venue page shares.
pub struct LedgerService;

impl LedgerService {
    /// Pure read of one venue's sheet for one date. An empty sheet is a valid
    /// answer, not an error; the aggregate covers exactly the returned items.
    pub fn day_sheet<S: LedgerStore>(
        store: &S,
        venue: Venue,
        date: NaiveDate,
    ) -> ServiceResult<DaySheet> {
        let items = store.items_for(venue, date)?;
        Ok(DaySheet::new(date, items))
    }

    /// Boundary recovery for the query: a retrieval failure renders as the
    /// empty zero-aggregate sheet rather than leaving stale data on screen.
    pub fn day_sheet_or_empty<S: LedgerStore>(
        store: &S,
        venue: Venue,
        date: NaiveDate,
    ) -> DaySheet {
        match Self::day_sheet(store, venue, date) {
            Ok(sheet) => sheet,
            Err(err) => {
                tracing::warn!(
                    venue = venue.resource(),
                    %date,
                    error = %err,
                    "retrieval failed, rendering empty sheet"
                );
                DaySheet::empty(date)
            }
        }
    }

    /// Registers a new product/service for a date. The row starts with no
    /// deliveries and no sales; duplicate names are permitted.
    pub fn add_item<S: LedgerStore>(
        store: &mut S,
        venue: Venue,
        date: NaiveDate,
        name: &str,
        unit_cost: f64,
        unit_price: f64,
        opening_stock: u32,
    ) -> ServiceResult<LedgerItem> {
        let name = require_name(name, "item")?;
        let unit_cost = require_non_negative(unit_cost, "unit cost")?;
        let unit_price = require_non_negative(unit_price, "unit price")?;
        let item = LedgerItem::new(date, name, unit_cost, unit_price, opening_stock);
        let created = store.insert_item(venue, item)?;
        tracing::info!(venue = venue.resource(), item = %created.name, "item added");
        Ok(created)
    }

    /// Replaces one quantity field (`entree` or `sold`) on an item, applying
    /// the oversell policy, and persists a partial patch. Callers must refresh
    /// the day's aggregate from a full re-read afterwards (`day_sheet`).
    pub fn update_quantity<S: LedgerStore>(
        store: &mut S,
        venue: Venue,
        id: Uuid,
        field: ItemField,
        value: u32,
        policy: OversellPolicy,
    ) -> ServiceResult<LedgerItem> {
        let current = store.get_item(venue, id)?;
        let candidate = current.with_field(field, value);
        let accepted = apply_oversell_policy(candidate, policy)?;
        let mut patch = match field {
            ItemField::StockIn => ItemPatch::stock_in(accepted.stock_in),
            ItemField::Sold => ItemPatch::sold(accepted.sold),
        };
        // Clamp may cap `sold` even when the edit touched the other field;
        // persist the cap too or the store keeps a negative closing stock.
        if accepted.sold != current.sold {
            patch.sold = Some(accepted.sold);
        }
        let updated = store.update_item(venue, id, patch)?;
        tracing::debug!(
            venue = venue.resource(),
            item = %updated.name,
            field = field.label(),
            value,
            "quantity updated"
        );
        Ok(updated)
    }

    /// Corrects the cost/selling price of an item, as the original pages'
    /// edit mode allowed.
    pub fn update_prices<S: LedgerStore>(
        store: &mut S,
        venue: Venue,
        id: Uuid,
        unit_cost: f64,
        unit_price: f64,
    ) -> ServiceResult<LedgerItem> {
        let unit_cost = require_non_negative(unit_cost, "unit cost")?;
        let unit_price = require_non_negative(unit_price, "unit price")?;
        Ok(store.update_item(venue, id, ItemPatch::prices(unit_cost, unit_price))?)
    }

    /// Records a cash/momo takings entry for venues that split revenue by
    /// payment channel.
    pub fn record_takings<S: LedgerStore>(
        store: &mut S,
        venue: Venue,
        date: NaiveDate,
        cash: f64,
        momo: f64,
    ) -> ServiceResult<TakingsRecord> {
        if !venue.tracks_momo() {
            return Err(ServiceError::Invalid(format!(
                "{} does not track a cash/momo split",
                venue
            )));
        }
        let cash = require_non_negative(cash, "cash")?;
        let momo = require_non_negative(momo, "momo")?;
        Ok(store.insert_takings(venue, TakingsRecord::new(date, cash, momo))?)
    }

    pub fn takings_summary<S: LedgerStore>(
        store: &S,
        venue: Venue,
        date: NaiveDate,
    ) -> ServiceResult<(Vec<TakingsRecord>, TakingsTotals)> {
        let records = store.takings_for(venue, date)?;
        let totals = TakingsTotals::from_records(&records);
        Ok((records, totals))
    }
}

fn apply_oversell_policy(
    item: LedgerItem,
    policy: OversellPolicy,
) -> Result<LedgerItem, ServiceError> {
    if item.closing_stock() >= 0 {
        return Ok(item);
    }
    match policy {
        OversellPolicy::Reject => Err(ServiceError::Invalid(format!(
            "cannot sell more than the {} available for `{}`",
            item.total_stock(),
            item.name
        ))),
        OversellPolicy::Clamp => {
            let mut clamped = item;
            clamped.sold = clamped.total_stock();
            Ok(clamped)
        }
        OversellPolicy::AllowAndFlag => {
            tracing::warn!(item = %item.name, closing = item.closing_stock(), "stock deficit recorded");
            Ok(item)
        }
    }
}
