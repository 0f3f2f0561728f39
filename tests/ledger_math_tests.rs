use chrono::NaiveDate;
use venue_core::domain::{DailyAggregate, ItemField, LedgerItem};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn item(opening: u32, stock_in: u32, sold: u32, cost: f64, price: f64) -> LedgerItem {
    let mut item = LedgerItem::new(date(), "Primus", cost, price, opening);
    item.stock_in = stock_in;
    item.sold = sold;
    item
}

#[test]
fn closing_stock_stays_non_negative_while_sales_fit_the_stock() {
    for opening in 0..8u32 {
        for stock_in in 0..8u32 {
            for sold in 0..=(opening + stock_in) {
                let item = item(opening, stock_in, sold, 600.0, 1000.0);
                assert_eq!(
                    item.closing_stock(),
                    (opening + stock_in) as i64 - sold as i64
                );
                assert!(item.closing_stock() >= 0);
            }
        }
    }
}

#[test]
fn revenue_is_monotone_in_units_sold() {
    let mut previous = -1.0;
    for sold in 0..50u32 {
        let revenue = item(100, 0, sold, 600.0, 1000.0).sales_revenue();
        assert!(revenue >= previous);
        previous = revenue;
    }
}

#[test]
fn worked_example_matches_the_ledger_rules() {
    let item = item(10, 5, 3, 600.0, 1000.0);
    assert_eq!(item.total_stock(), 15);
    assert_eq!(item.closing_stock(), 12);
    assert_eq!(item.sales_revenue(), 3000.0);
    assert_eq!(item.profit(), 1200.0);
}

#[test]
fn threshold_boundaries_are_exact() {
    let at_threshold = item(5, 0, 0, 600.0, 1000.0);
    assert!(!at_threshold.is_low_stock());

    let sold_out = item(5, 0, 5, 600.0, 1000.0);
    assert!(sold_out.is_out_of_stock());
    assert!(sold_out.is_low_stock());
}

#[test]
fn aggregates_equal_the_sum_of_derived_values() {
    let items = vec![
        item(10, 5, 3, 600.0, 1000.0),
        item(20, 0, 11, 700.0, 1200.0),
        item(3, 0, 0, 150.0, 400.0),
    ];
    let aggregate = DailyAggregate::from_items(&items);
    assert_eq!(
        aggregate.total_sales,
        items.iter().map(LedgerItem::sales_revenue).sum::<f64>()
    );
    assert_eq!(
        aggregate.total_profit,
        items.iter().map(LedgerItem::profit).sum::<f64>()
    );
    assert_eq!(
        aggregate.total_stock_value,
        items.iter().map(LedgerItem::stock_value).sum::<f64>()
    );
    assert_eq!(
        aggregate.low_stock_count,
        items.iter().filter(|item| item.is_low_stock()).count()
    );
}

#[test]
fn edits_to_different_fields_commute() {
    let base = item(10, 0, 0, 600.0, 1000.0);
    let one = base.with_field(ItemField::StockIn, 5).with_field(ItemField::Sold, 3);
    let other = base.with_field(ItemField::Sold, 3).with_field(ItemField::StockIn, 5);
    assert_eq!(one.closing_stock(), other.closing_stock());
    assert_eq!(one.sales_revenue(), other.sales_revenue());
}
