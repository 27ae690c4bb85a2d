//! Domain model for an expense.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::month_key::MonthKey;

/// One `(name, amount)` pair read out of free text. Transient: it only
/// becomes an [`Expense`] once storage assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedEntry {
    pub name: String,
    pub amount: f64,
}

impl ParsedEntry {
    /// Canonical text that parses back to this entry
    pub fn render(&self) -> String {
        render_edit_text(&self.name, self.amount)
    }
}

/// An expense before storage has given it an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub name: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub month_key: MonthKey,
}

impl NewExpense {
    pub fn from_entry(entry: ParsedEntry, month_key: MonthKey, date: DateTime<Utc>) -> Self {
        Self {
            name: entry.name,
            amount: entry.amount,
            date,
            month_key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub month_key: MonthKey,
}

impl Expense {
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    pub fn from_new(id: String, new_expense: NewExpense) -> Self {
        Self {
            id,
            name: new_expense.name,
            amount: new_expense.amount,
            date: new_expense.date,
            month_key: new_expense.month_key,
        }
    }

    /// Merge an edit into this record; date and month stay as they were
    pub fn apply(&mut self, update: &ExpenseUpdate) {
        self.name = update.name.clone();
        self.amount = update.amount;
    }

    pub fn edit_text(&self) -> String {
        render_edit_text(&self.name, self.amount)
    }
}

/// Fields an edit is allowed to change
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseUpdate {
    pub name: String,
    pub amount: f64,
}

impl From<ParsedEntry> for ExpenseUpdate {
    fn from(entry: ParsedEntry) -> Self {
        Self {
            name: entry.name,
            amount: entry.amount,
        }
    }
}

/// "name - amount", the form the edit box is prefilled with
pub fn render_edit_text(name: &str, amount: f64) -> String {
    format!("{} - {}", name, amount)
}
