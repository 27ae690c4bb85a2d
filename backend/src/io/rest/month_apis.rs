//! # REST API for Months
//!
//! The month cards: recent months with their expenses and totals.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Local;
use tracing::info;

use super::{error_response, mappers::MonthMapper};
use crate::domain::{models::MonthKey, ExpenseServiceError};
use crate::AppState;

/// Recent months, newest first. Empty months get the fixed expenses
pub async fn list_months(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/months");

    let today = Local::now().date_naive();
    match state.month_service.load_months(today).await {
        Ok(views) => {
            let response = MonthMapper::to_list_response(views, &state.summary_service);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("Error loading months", e),
    }
}

/// A single month as stored
pub async fn get_month(
    State(state): State<AppState>,
    Path(month_key): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/months/{}", month_key);

    let month_key = match month_key.parse::<MonthKey>() {
        Ok(key) => key,
        Err(e) => return error_response("Invalid month", ExpenseServiceError::from(e)),
    };

    match state.month_service.load_month(month_key).await {
        Ok(view) => {
            let response = MonthMapper::to_dto(view, &state.summary_service);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("Error loading month", e),
    }
}
