use crate::domain::models::MonthKeyError;

/// Errors surfaced by the domain services. Text that does not parse is not
/// an error; it is a no-op.
#[derive(Debug, thiserror::Error)]
pub enum ExpenseServiceError {
    #[error("Expense not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    InvalidMonthKey(#[from] MonthKeyError),
    #[error("Storage failure: {0:#}")]
    Storage(#[from] anyhow::Error),
}

pub type ServiceResult<T> = Result<T, ExpenseServiceError>;
