use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;

/// A staff advance repaid in installments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeLoan {
    pub id: Uuid,
    pub employee: String,
    pub amount: f64,
    #[serde(default)]
    pub total_paid: f64,
    pub date: NaiveDate,
}

impl EmployeeLoan {
    pub fn new(date: NaiveDate, employee: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee: employee.into(),
            amount,
            total_paid: 0.0,
            date,
        }
    }

    pub fn remaining(&self) -> f64 {
        self.amount - self.total_paid
    }

    pub fn is_settled(&self) -> bool {
        self.remaining() <= 0.0
    }
}

impl Identifiable for EmployeeLoan {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Full reduction over an employee's loans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanTotals {
    pub total_loaned: f64,
    pub total_paid: f64,
    pub total_remaining: f64,
}

impl LoanTotals {
    pub fn from_loans(loans: &[EmployeeLoan]) -> Self {
        loans.iter().fold(Self::default(), |mut acc, loan| {
            acc.total_loaned += loan.amount;
            acc.total_paid += loan.total_paid;
            acc.total_remaining += loan.remaining();
            acc
        })
    }
}
