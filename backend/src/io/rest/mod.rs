//! # REST API Interface Layer
//!
//! HTTP endpoints for the expense tracker. Handlers translate DTOs from the
//! `shared` crate into domain commands and map domain errors to status codes:
//!
//! - `NotFound` → 404
//! - `InvalidMonthKey` → 400
//! - `Storage` → 500 (logged)

pub mod expense_apis;
pub mod mappers;
pub mod month_apis;
pub mod parser_apis;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::domain::ExpenseServiceError;

pub use expense_apis::{add_expenses, delete_expense, edit_expense};
pub use month_apis::{get_month, list_months};
pub use parser_apis::preview_parse;

/// Turn a domain error into an HTTP response
pub fn error_response(context: &str, e: ExpenseServiceError) -> Response {
    match e {
        ExpenseServiceError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()).into_response(),
        ExpenseServiceError::InvalidMonthKey(_) => {
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        ExpenseServiceError::Storage(_) => {
            error!("{}: {}", context, e);
            (StatusCode::INTERNAL_SERVER_ERROR, context.to_string()).into_response()
        }
    }
}
