use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dated outgoing payment. `is_profit` marks spending expected to generate
/// revenue (restocking) as opposed to plain overhead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    #[serde(alias = "expense_name")]
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_profit: bool,
}

impl Expense {
    pub fn new(date: NaiveDate, name: impl Into<String>, amount: f64, is_profit: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            date,
            is_profit,
        }
    }
}

/// Reduction over a set of expenses, split by the profit-generating flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseTotals {
    pub total: f64,
    pub profit_generating: f64,
    pub overhead: f64,
}

impl ExpenseTotals {
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        expenses.iter().fold(Self::default(), |mut acc, expense| {
            acc.total += expense.amount;
            if expense.is_profit {
                acc.profit_generating += expense.amount;
            } else {
                acc.overhead += expense.amount;
            }
            acc
        })
    }
}
