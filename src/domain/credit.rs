use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Goods handed over on credit to a named customer, repaid over time.
///
/// The serde aliases absorb the field names older API payloads used
/// (`credit` for the amount owed, `payment` for what has come back).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credit {
    pub id: Uuid,
    pub name: String,
    #[serde(alias = "credit")]
    pub amount: f64,
    #[serde(default, alias = "payment")]
    pub paid: f64,
    pub date: NaiveDate,
}

impl Credit {
    pub fn new(date: NaiveDate, name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            paid: 0.0,
            date,
        }
    }

    pub fn remaining(&self) -> f64 {
        self.amount - self.paid
    }

    pub fn is_settled(&self) -> bool {
        self.remaining() <= 0.0
    }
}

/// Full reduction over a set of outstanding credits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditTotals {
    pub total_credited: f64,
    pub total_paid: f64,
    pub total_remaining: f64,
}

impl CreditTotals {
    pub fn from_credits(credits: &[Credit]) -> Self {
        credits.iter().fold(Self::default(), |mut acc, credit| {
            acc.total_credited += credit.amount;
            acc.total_paid += credit.paid;
            acc.total_remaining += credit.remaining();
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_tracks_partial_payments() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut credit = Credit::new(date, "Mutesi", 15_000.0);
        assert_eq!(credit.remaining(), 15_000.0);
        credit.paid = 10_000.0;
        assert_eq!(credit.remaining(), 5_000.0);
        assert!(!credit.is_settled());
        credit.paid = 15_000.0;
        assert!(credit.is_settled());
    }

    #[test]
    fn totals_are_a_full_reduction() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut first = Credit::new(date, "Mutesi", 15_000.0);
        first.paid = 10_000.0;
        let second = Credit::new(date, "Gatete", 8_000.0);
        let totals = CreditTotals::from_credits(&[first, second]);
        assert_eq!(totals.total_credited, 23_000.0);
        assert_eq!(totals.total_paid, 10_000.0);
        assert_eq!(totals.total_remaining, 13_000.0);
    }

    #[test]
    fn accepts_legacy_field_names() {
        let json = r#"{
            "id": "6a3bc2da-58e3-4c44-a2ac-4e3a9c8e8a2f",
            "name": "Mutesi",
            "credit": 15000.0,
            "payment": 5000.0,
            "date": "2025-06-01"
        }"#;
        let credit: Credit = serde_json::from_str(json).unwrap();
        assert_eq!(credit.amount, 15_000.0);
        assert_eq!(credit.paid, 5_000.0);
        assert_eq!(credit.remaining(), 10_000.0);
    }
}
