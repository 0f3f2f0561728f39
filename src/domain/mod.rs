//! Domain models and the derivation math shared by every venue page.

pub mod aggregate;
pub mod common;
pub mod credit;
pub mod dates;
pub mod expense;
pub mod item;
pub mod loan;
pub mod takings;
pub mod venue;

pub use aggregate::{DailyAggregate, DaySheet};
pub use common::Identifiable;
pub use credit::{Credit, CreditTotals};
pub use dates::{parse_date, shift_date, shift_date_clamped};
pub use expense::{Expense, ExpenseTotals};
pub use item::{ItemField, LedgerItem, OversellPolicy, LOW_STOCK_THRESHOLD};
pub use loan::{EmployeeLoan, LoanTotals};
pub use takings::{TakingsRecord, TakingsTotals};
pub use venue::Venue;
