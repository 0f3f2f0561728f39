use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::item::LedgerItem;

/// Date-scoped totals over one venue's item set.
///
/// Always built as a full reduction over the complete snapshot; callers must
/// never patch these by algebraic delta after a single-row edit, because
/// floating accumulation drift and edits from another session would go
/// unnoticed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub total_sales: f64,
    pub total_profit: f64,
    pub total_stock_value: f64,
    pub low_stock_count: usize,
}

impl DailyAggregate {
    pub fn from_items(items: &[LedgerItem]) -> Self {
        items.iter().fold(Self::default(), |mut acc, item| {
            acc.total_sales += item.sales_revenue();
            acc.total_profit += item.profit();
            acc.total_stock_value += item.stock_value();
            if item.is_low_stock() {
                acc.low_stock_count += 1;
            }
            acc
        })
    }
}

/// One day of one venue's ledger: the item snapshot plus its aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySheet {
    pub date: NaiveDate,
    pub items: Vec<LedgerItem>,
    pub aggregate: DailyAggregate,
}

impl DaySheet {
    pub fn new(date: NaiveDate, items: Vec<LedgerItem>) -> Self {
        let aggregate = DailyAggregate::from_items(&items);
        Self {
            date,
            items,
            aggregate,
        }
    }

    /// The zero-aggregate sheet rendered when a date has no records or a
    /// retrieval failed.
    pub fn empty(date: NaiveDate) -> Self {
        Self::new(date, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn item(name: &str, opening: u32, sold: u32, cost: f64, price: f64) -> LedgerItem {
        let mut item = LedgerItem::new(date(), name, cost, price, opening);
        item.sold = sold;
        item
    }

    #[test]
    fn aggregate_is_sum_of_per_item_derivations() {
        let items = vec![
            item("Primus", 10, 3, 600.0, 1000.0),
            item("Mutzig", 6, 4, 700.0, 1200.0),
        ];
        let aggregate = DailyAggregate::from_items(&items);
        assert_eq!(
            aggregate.total_sales,
            items.iter().map(|i| i.sales_revenue()).sum::<f64>()
        );
        assert_eq!(
            aggregate.total_profit,
            items.iter().map(|i| i.profit()).sum::<f64>()
        );
        assert_eq!(aggregate.low_stock_count, 1); // Mutzig closes at 2
    }

    #[test]
    fn empty_sheet_has_zero_aggregate() {
        let sheet = DaySheet::empty(date());
        assert!(sheet.is_empty());
        assert_eq!(sheet.aggregate, DailyAggregate::default());
    }
}
