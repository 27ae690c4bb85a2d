//! # REST API for Parse Preview
//!
//! Shows what a piece of text would add, including amount tokens that would
//! be skipped, without storing anything.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::debug;

use super::mappers::ParseMapper;
use crate::AppState;
use shared::ExpenseTextRequest;

pub async fn preview_parse(
    State(state): State<AppState>,
    Json(request): Json<ExpenseTextRequest>,
) -> impl IntoResponse {
    debug!("POST /api/parse - request: {:?}", request);

    let report = state.expense_service.preview(&request.text);
    (StatusCode::OK, Json(ParseMapper::to_preview(report)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::setup_test_state;
    use axum::body::to_bytes;
    use shared::{ParsePreviewResponse, ParseStrategyKind, ParsedExpense};

    async fn preview(text: &str) -> ParsePreviewResponse {
        let (state, _env) = setup_test_state().await;
        let response = preview_parse(
            State(state),
            Json(ExpenseTextRequest {
                text: text.to_string(),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_preview_dash_list() {
        let body = preview("A, B - 10, xyz, 20").await;
        assert_eq!(body.strategy, Some(ParseStrategyKind::DashList));
        assert_eq!(
            body.entries,
            vec![
                ParsedExpense {
                    name: "A, B".to_string(),
                    amount: 10.0
                },
                ParsedExpense {
                    name: "A, B".to_string(),
                    amount: 20.0
                },
            ]
        );
        assert_eq!(body.skipped_tokens, vec!["xyz".to_string()]);
    }

    #[tokio::test]
    async fn test_preview_blank() {
        let body = preview("   ").await;
        assert_eq!(body.strategy, None);
        assert!(body.entries.is_empty());
    }

    #[tokio::test]
    async fn test_preview_trailing_number() {
        let body = preview("Milk800").await;
        assert_eq!(body.strategy, Some(ParseStrategyKind::TrailingNumber));
        assert_eq!(body.entries.len(), 1);
    }
}
