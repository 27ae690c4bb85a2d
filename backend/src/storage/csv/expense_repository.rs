use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use csv::{Reader, Writer};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use tracing::{debug, info, warn};

use super::connection::{CsvConnection, EXPENSES_HEADER};
use crate::domain::models::{Expense, ExpenseUpdate, MonthKey, NewExpense};
use crate::storage::traits::ExpenseStorage;

/// One row of expenses.csv
#[derive(Debug, Serialize, Deserialize)]
struct ExpenseRecord {
    id: String,
    name: String,
    amount: f64,
    date: String,
    month_key: String,
}

impl ExpenseRecord {
    fn from_domain(expense: &Expense) -> Self {
        Self {
            id: expense.id.clone(),
            name: expense.name.clone(),
            amount: expense.amount,
            date: expense.date.to_rfc3339(),
            month_key: expense.month_key.label(),
        }
    }

    fn into_domain(self) -> Result<Expense> {
        let date = DateTime::parse_from_rfc3339(&self.date)
            .with_context(|| format!("Bad date '{}' on expense {}", self.date, self.id))?
            .with_timezone(&Utc);
        let month_key = self
            .month_key
            .parse::<MonthKey>()
            .with_context(|| format!("Bad month key on expense {}", self.id))?;
        Ok(Expense {
            id: self.id,
            name: self.name,
            amount: self.amount,
            date,
            month_key,
        })
    }
}

/// CSV-based expense repository: one file holds the whole collection
#[derive(Clone)]
pub struct CsvExpenseRepository {
    connection: CsvConnection,
}

impl CsvExpenseRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read every expense in file order. Rows that cannot be read are skipped
    fn read_expenses(&self) -> Result<Vec<Expense>> {
        self.connection.ensure_expenses_file_exists()?;

        let file_path = self.connection.expenses_file_path();
        let file = File::open(&file_path)
            .with_context(|| format!("Failed to open {}", file_path.display()))?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut expenses = Vec::new();
        for (index, result) in csv_reader.deserialize::<ExpenseRecord>().enumerate() {
            match result.map_err(anyhow::Error::from).and_then(ExpenseRecord::into_domain) {
                Ok(expense) => expenses.push(expense),
                Err(e) => warn!("Skipping unreadable expense row {}: {:#}", index + 1, e),
            }
        }

        Ok(expenses)
    }

    /// Rewrite the collection through a temp file and rename it into place
    fn write_expenses(&self, expenses: &[Expense]) -> Result<()> {
        let file_path = self.connection.expenses_file_path();
        let temp_path = file_path.with_extension("tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)?;

            let mut csv_writer = Writer::from_writer(BufWriter::new(file));
            if expenses.is_empty() {
                csv_writer.write_record(EXPENSES_HEADER)?;
            }
            for expense in expenses {
                csv_writer.serialize(ExpenseRecord::from_domain(expense))?;
            }
            csv_writer.flush()?;
        }

        std::fs::rename(&temp_path, &file_path)
            .with_context(|| format!("Failed to replace {}", file_path.display()))?;
        debug!("Wrote {} expenses to {}", expenses.len(), file_path.display());
        Ok(())
    }
}

#[async_trait]
impl ExpenseStorage for CsvExpenseRepository {
    async fn create_expense(&self, new_expense: &NewExpense) -> Result<Expense> {
        let _guard = self.connection.lock_for_write().await;
        let mut expenses = self.read_expenses()?;

        let expense = Expense::from_new(Expense::generate_id(), new_expense.clone());
        expenses.push(expense.clone());
        self.write_expenses(&expenses)?;

        info!("Stored expense {} for {}", expense.id, expense.month_key);
        Ok(expense)
    }

    async fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>> {
        let expenses = self.read_expenses()?;
        Ok(expenses.into_iter().find(|e| e.id == expense_id))
    }

    async fn list_expenses_by_month(&self, month_key: &MonthKey) -> Result<Vec<Expense>> {
        let mut expenses = self.read_expenses()?;
        expenses.retain(|e| &e.month_key == month_key);
        Ok(expenses)
    }

    async fn update_expense(&self, expense_id: &str, update: &ExpenseUpdate) -> Result<Option<Expense>> {
        let _guard = self.connection.lock_for_write().await;
        let mut expenses = self.read_expenses()?;

        let Some(expense) = expenses.iter_mut().find(|e| e.id == expense_id) else {
            return Ok(None);
        };
        expense.apply(update);
        let updated = expense.clone();
        self.write_expenses(&expenses)?;

        info!("Updated expense {}", expense_id);
        Ok(Some(updated))
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<bool> {
        let _guard = self.connection.lock_for_write().await;
        let mut expenses = self.read_expenses()?;

        let initial_len = expenses.len();
        expenses.retain(|e| e.id != expense_id);
        let was_deleted = expenses.len() < initial_len;
        if was_deleted {
            self.write_expenses(&expenses)?;
            info!("Deleted expense {}", expense_id);
        }
        Ok(was_deleted)
    }
}
