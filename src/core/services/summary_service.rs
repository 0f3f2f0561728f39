use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{ExpenseTotals, Venue};
use crate::storage::LedgerStore;

use super::{LedgerService, ServiceResult};

/// One venue's line on the home panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueTotal {
    pub venue: Venue,
    pub total_sales: f64,
    pub total_profit: f64,
    pub low_stock_count: usize,
}

/// Cross-venue totals for one date, always built from explicit per-venue
/// aggregate queries rather than a running accumulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessSummary {
    pub date: NaiveDate,
    pub venues: Vec<VenueTotal>,
    pub expenses: ExpenseTotals,
    pub gross_sales: f64,
    pub net: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// The "total money" view: per-venue sales for `date`, the day's
    /// expenses, and the grand total net of them.
    pub fn business_totals<S: LedgerStore>(
        store: &S,
        date: NaiveDate,
    ) -> ServiceResult<BusinessSummary> {
        let mut venues = Vec::with_capacity(Venue::ALL.len());
        let mut gross_sales = 0.0;
        for venue in Venue::ALL {
            let sheet = LedgerService::day_sheet(store, venue, date)?;
            gross_sales += sheet.aggregate.total_sales;
            venues.push(VenueTotal {
                venue,
                total_sales: sheet.aggregate.total_sales,
                total_profit: sheet.aggregate.total_profit,
                low_stock_count: sheet.aggregate.low_stock_count,
            });
        }
        let expenses = ExpenseTotals::from_expenses(&store.expenses(Some(date))?);
        let net = gross_sales - expenses.total;
        Ok(BusinessSummary {
            date,
            venues,
            expenses,
            gross_sales,
            net,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::{ExpenseService, LedgerService};
    use crate::domain::{ItemField, OversellPolicy};
    use crate::storage::MemoryStore;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn totals_cover_every_venue_and_subtract_expenses() {
        let mut store = MemoryStore::new();
        let drink =
            LedgerService::add_item(&mut store, Venue::Bar, date(), "Primus", 600.0, 1000.0, 10)
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
        ExpenseService::add(&mut store, date(), "Charcoal", 1_000.0, true).unwrap();

        let summary = SummaryService::business_totals(&store, date()).unwrap();
        assert_eq!(summary.venues.len(), Venue::ALL.len());
        assert_eq!(summary.gross_sales, 3_000.0);
        assert_eq!(summary.net, 2_000.0);
        let bar = summary
            .venues
            .iter()
            .find(|line| line.venue == Venue::Bar)
            .unwrap();
        assert_eq!(bar.total_profit, 1_200.0);
    }

    #[test]
    fn a_date_with_no_records_sums_to_zero() {
        let store = MemoryStore::new();
        let summary = SummaryService::business_totals(&store, date()).unwrap();
        assert_eq!(summary.gross_sales, 0.0);
        assert_eq!(summary.net, 0.0);
        assert!(summary.venues.iter().all(|line| line.total_sales == 0.0));
    }
}
