use chrono::NaiveDate;
use venue_core::core::services::{LedgerService, SummaryService};
use venue_core::domain::{ItemField, OversellPolicy, Venue};
use venue_core::storage::MemoryStore;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

#[test]
fn a_date_without_records_yields_an_empty_zero_sheet() {
    let store = MemoryStore::new();
    let sheet =
        LedgerService::day_sheet(&store, Venue::Bar, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
            .unwrap();
    assert!(sheet.items.is_empty());
    assert_eq!(sheet.aggregate.total_sales, 0.0);
    assert_eq!(sheet.aggregate.total_profit, 0.0);
    assert_eq!(sheet.aggregate.low_stock_count, 0);
}

#[test]
fn sheets_are_scoped_to_their_date() {
    let mut store = MemoryStore::new();
    LedgerService::add_item(&mut store, Venue::Bar, date(), "Primus", 600.0, 1000.0, 10).unwrap();
    let other_day = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
    LedgerService::add_item(&mut store, Venue::Bar, other_day, "Mutzig", 700.0, 1200.0, 6)
        .unwrap();

    let sheet = LedgerService::day_sheet(&store, Venue::Bar, date()).unwrap();
    assert_eq!(sheet.items.len(), 1);
    assert_eq!(sheet.items[0].name, "Primus");
}

#[test]
fn editing_sold_recomputes_the_aggregate_by_full_reduction() {
    let mut store = MemoryStore::new();
    let item =
        LedgerService::add_item(&mut store, Venue::Kitchen, date(), "Brochette", 600.0, 1000.0, 10)
            .unwrap();
    LedgerService::update_quantity(
        &mut store,
        Venue::Kitchen,
        item.id,
        ItemField::StockIn,
        5,
        OversellPolicy::Reject,
    )
    .unwrap();
    LedgerService::update_quantity(
        &mut store,
        Venue::Kitchen,
        item.id,
        ItemField::Sold,
        3,
        OversellPolicy::Reject,
    )
    .unwrap();

    let before = LedgerService::day_sheet(&store, Venue::Kitchen, date()).unwrap();
    assert_eq!(before.items[0].closing_stock(), 12);
    assert_eq!(before.aggregate.total_sales, 3000.0);

    LedgerService::update_quantity(
        &mut store,
        Venue::Kitchen,
        item.id,
        ItemField::Sold,
        5,
        OversellPolicy::Reject,
    )
    .unwrap();

    let after = LedgerService::day_sheet(&store, Venue::Kitchen, date()).unwrap();
    assert_eq!(after.items[0].closing_stock(), 10);
    assert_eq!(after.items[0].sales_revenue(), 5000.0);
    assert_eq!(after.aggregate.total_sales - before.aggregate.total_sales, 2000.0);
}

#[test]
fn the_most_recent_edit_wins() {
    let mut store = MemoryStore::new();
    let item =
        LedgerService::add_item(&mut store, Venue::Bar, date(), "Fanta", 300.0, 500.0, 24).unwrap();
    for value in [2, 7, 4] {
        LedgerService::update_quantity(
            &mut store,
            Venue::Bar,
            item.id,
            ItemField::Sold,
            value,
            OversellPolicy::Reject,
        )
        .unwrap();
    }
    let sheet = LedgerService::day_sheet(&store, Venue::Bar, date()).unwrap();
    assert_eq!(sheet.items[0].sold, 4);
}

#[test]
fn venues_do_not_share_ledgers() {
    let mut store = MemoryStore::new();
    LedgerService::add_item(&mut store, Venue::Bar, date(), "Primus", 600.0, 1000.0, 10).unwrap();
    assert!(LedgerService::day_sheet(&store, Venue::GuestHouse, date())
        .unwrap()
        .is_empty());
}

#[test]
fn business_totals_follow_every_edit() {
    let mut store = MemoryStore::new();
    let drink =
        LedgerService::add_item(&mut store, Venue::Bar, date(), "Primus", 600.0, 1000.0, 10)
            .unwrap();
    let dish =
        LedgerService::add_item(&mut store, Venue::Kitchen, date(), "Brochette", 700.0, 1500.0, 8)
            .unwrap();
    LedgerService::update_quantity(
        &mut store,
        Venue::Bar,
        drink.id,
        ItemField::Sold,
        3,
        OversellPolicy::Reject,
    )
    .unwrap();
    LedgerService::update_quantity(
        &mut store,
        Venue::Kitchen,
        dish.id,
        ItemField::Sold,
        2,
        OversellPolicy::Reject,
    )
    .unwrap();

    let summary = SummaryService::business_totals(&store, date()).unwrap();
    assert_eq!(summary.gross_sales, 3000.0 + 3000.0);
    let kitchen = summary
        .venues
        .iter()
        .find(|line| line.venue == Venue::Kitchen)
        .unwrap();
    assert_eq!(kitchen.total_profit, 1600.0);
}
