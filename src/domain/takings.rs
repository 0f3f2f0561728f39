use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One day's takings for a venue that splits revenue by payment channel:
/// physical cash versus mobile money.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakingsRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub cash: f64,
    #[serde(alias = "cash_momo")]
    pub momo: f64,
}

impl TakingsRecord {
    pub fn new(date: NaiveDate, cash: f64, momo: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            cash,
            momo,
        }
    }

    pub fn total(&self) -> f64 {
        self.cash + self.momo
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TakingsTotals {
    pub cash: f64,
    pub momo: f64,
    pub total: f64,
}

impl TakingsTotals {
    pub fn from_records(records: &[TakingsRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, record| {
            acc.cash += record.cash;
            acc.momo += record.momo;
            acc.total += record.total();
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_both_channels() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let records = vec![
            TakingsRecord::new(date, 12_000.0, 8_000.0),
            TakingsRecord::new(date, 5_000.0, 0.0),
        ];
        let totals = TakingsTotals::from_records(&records);
        assert_eq!(totals.cash, 17_000.0);
        assert_eq!(totals.momo, 8_000.0);
        assert_eq!(totals.total, 25_000.0);
    }
}
