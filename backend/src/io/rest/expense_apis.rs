//! # REST API for Expenses
//!
//! Add, edit and delete expenses from free text.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use super::{error_response, mappers::ExpenseMapper};
use crate::domain::{
    commands::expenses::{AddExpensesCommand, EditExpenseCommand},
    models::MonthKey,
    ExpenseServiceError,
};
use crate::AppState;
use shared::{AddExpensesResponse, EditExpenseResponse, ExpenseTextRequest};

/// Add every expense the text parses to into the given month.
/// 201 when something was stored, 200 with an empty list otherwise
pub async fn add_expenses(
    State(state): State<AppState>,
    Path(month_key): Path<String>,
    Json(request): Json<ExpenseTextRequest>,
) -> impl IntoResponse {
    info!("POST /api/months/{}/expenses - request: {:?}", month_key, request);

    let month_key = match month_key.parse::<MonthKey>() {
        Ok(key) => key,
        Err(e) => return error_response("Invalid month", ExpenseServiceError::from(e)),
    };

    let command = AddExpensesCommand {
        month_key,
        text: request.text,
    };
    match state.expense_service.add_expenses_from_text(command).await {
        Ok(result) => {
            let status = if result.created.is_empty() {
                StatusCode::OK
            } else {
                StatusCode::CREATED
            };
            let response = AddExpensesResponse {
                month_key: result.month_key.label(),
                success_message: result.success_message(),
                created: ExpenseMapper::to_dtos(result.created, &state.summary_service),
                skipped_tokens: result.skipped_tokens,
            };
            (status, Json(response)).into_response()
        }
        Err(e) => error_response("Error adding expenses", e),
    }
}

/// Replace name and amount of an expense with the first entry the text parses to
pub async fn edit_expense(
    State(state): State<AppState>,
    Path(expense_id): Path<String>,
    Json(request): Json<ExpenseTextRequest>,
) -> impl IntoResponse {
    info!("PUT /api/expenses/{} - request: {:?}", expense_id, request);

    let command = EditExpenseCommand {
        expense_id,
        text: request.text,
    };
    match state.expense_service.edit_expense_from_text(command).await {
        Ok(result) => {
            let response = EditExpenseResponse {
                updated: result.expense.is_some(),
                expense: result
                    .expense
                    .map(|expense| ExpenseMapper::to_dto(expense, &state.summary_service)),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("Error editing expense", e),
    }
}

pub async fn delete_expense(
    State(state): State<AppState>,
    Path(expense_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/expenses/{}", expense_id);

    match state.expense_service.delete_expense(&expense_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response("Error deleting expense", e),
    }
}
