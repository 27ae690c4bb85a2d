//! # Storage Traits
//!
//! Storage abstraction used by the domain layer. Any document store that can
//! create, fetch, merge-update and delete expense records keyed by a generated
//! id can sit behind these traits.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::{Expense, ExpenseUpdate, MonthKey, NewExpense};

/// Persistence collaborator for expense records
#[async_trait]
pub trait ExpenseStorage: Send + Sync {
    /// Store a new expense and return it with its generated id
    async fn create_expense(&self, expense: &NewExpense) -> Result<Expense>;

    /// Retrieve a specific expense by ID
    async fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>>;

    /// All expenses of one month, in the order they were stored
    async fn list_expenses_by_month(&self, month_key: &MonthKey) -> Result<Vec<Expense>>;

    /// Merge name and amount into an existing expense.
    /// Returns the updated record, or None if the ID is unknown
    async fn update_expense(&self, expense_id: &str, update: &ExpenseUpdate) -> Result<Option<Expense>>;

    /// Delete a single expense.
    /// Returns true if the expense was found and deleted
    async fn delete_expense(&self, expense_id: &str) -> Result<bool>;
}

/// Storage connection that hands out repositories
pub trait Connection: Send + Sync + Clone {
    type ExpenseRepository: ExpenseStorage + Clone;

    fn create_expense_repository(&self) -> Self::ExpenseRepository;
}
