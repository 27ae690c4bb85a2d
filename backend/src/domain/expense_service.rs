//! Expense service: turns text from the add and edit boxes into stored expenses.
use chrono::Utc;
use tracing::{debug, info};

use crate::domain::{
    commands::expenses::{AddExpensesCommand, AddExpensesResult, EditExpenseCommand, EditExpenseResult},
    errors::{ExpenseServiceError, ServiceResult},
    expense_parser::{self, ParseReport},
    models::{Expense, ExpenseUpdate, MonthKey, NewExpense},
};
use crate::storage::{Connection, ExpenseStorage};

#[derive(Clone)]
pub struct ExpenseService<C: Connection> {
    expense_repository: C::ExpenseRepository,
}

impl<C: Connection> ExpenseService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            expense_repository: connection.create_expense_repository(),
        }
    }

    /// Parse without storing anything
    pub fn preview(&self, text: &str) -> ParseReport {
        expense_parser::analyze_expense_text(Some(text))
    }

    /// Store one expense per parsed entry, stamped with the current time.
    /// Text without a valid entry stores nothing.
    pub async fn add_expenses_from_text(&self, command: AddExpensesCommand) -> ServiceResult<AddExpensesResult> {
        let report = expense_parser::analyze_expense_text(Some(&command.text));
        if !report.skipped_tokens.is_empty() {
            debug!("Skipped amount tokens {:?} in {:?}", report.skipped_tokens, command.text);
        }

        if report.is_empty() {
            info!("No expense found in {:?}, nothing added", command.text);
            return Ok(AddExpensesResult {
                month_key: command.month_key,
                created: Vec::new(),
                skipped_tokens: report.skipped_tokens,
            });
        }

        let mut created = Vec::with_capacity(report.entries.len());
        for entry in report.entries {
            let new_expense = NewExpense::from_entry(entry, command.month_key, Utc::now());
            created.push(self.expense_repository.create_expense(&new_expense).await?);
        }
        info!("Added {} expenses to {}", created.len(), command.month_key);

        Ok(AddExpensesResult {
            month_key: command.month_key,
            created,
            skipped_tokens: report.skipped_tokens,
        })
    }

    /// Merge the first parsed entry into an existing expense.
    /// Text without a valid entry leaves the expense untouched.
    pub async fn edit_expense_from_text(&self, command: EditExpenseCommand) -> ServiceResult<EditExpenseResult> {
        let Some(first) = expense_parser::parse_expense_text(Some(&command.text)).into_iter().next() else {
            info!("No expense found in {:?}, {} left unchanged", command.text, command.expense_id);
            return Ok(EditExpenseResult { expense: None });
        };

        let update = ExpenseUpdate::from(first);
        let updated = self
            .expense_repository
            .update_expense(&command.expense_id, &update)
            .await?
            .ok_or_else(|| ExpenseServiceError::NotFound(command.expense_id.clone()))?;

        Ok(EditExpenseResult {
            expense: Some(updated),
        })
    }

    pub async fn delete_expense(&self, expense_id: &str) -> ServiceResult<()> {
        if self.expense_repository.delete_expense(expense_id).await? {
            Ok(())
        } else {
            Err(ExpenseServiceError::NotFound(expense_id.to_string()))
        }
    }

    pub async fn list_month(&self, month_key: &MonthKey) -> ServiceResult<Vec<Expense>> {
        Ok(self.expense_repository.list_expenses_by_month(month_key).await?)
    }

    /// Store an already structured expense, used for seeding fixed expenses
    pub async fn add_expense(&self, new_expense: NewExpense) -> ServiceResult<Expense> {
        Ok(self.expense_repository.create_expense(&new_expense).await?)
    }
}
