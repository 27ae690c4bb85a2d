pub mod expense;
pub mod month_key;

pub use expense::{Expense, ExpenseUpdate, NewExpense, ParsedEntry};
pub use month_key::{MonthKey, MonthKeyError};
