//! # Selavu Backend
//!
//! Non-UI logic of the household expense tracker:
//! - **Domain**: expense text parsing, month bootstrap, totals
//! - **Storage**: persistence of expense records
//! - **IO**: REST API consumed by the UI
//! - **Config**: income and fixed expenses, loaded once at startup
//!
//! ```text
//! UI
//!  ↓
//! IO Layer (REST handlers)
//!  ↓
//! Domain Layer (parser, services)
//!  ↓
//! Storage Layer (CSV document store)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::Method,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::TrackerConfig;
use crate::domain::{ExpenseService, MonthService, SummaryService};
use crate::storage::CsvConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub expense_service: ExpenseService<CsvConnection>,
    pub month_service: MonthService<CsvConnection>,
    pub summary_service: SummaryService,
    pub config: Arc<TrackerConfig>,
}

impl AppState {
    pub fn new(connection: &CsvConnection, config: Arc<TrackerConfig>) -> Self {
        let expense_service = ExpenseService::new(connection);
        let summary_service = SummaryService::new(config.currency_symbol.clone());
        let month_service =
            MonthService::new(expense_service.clone(), summary_service.clone(), config.clone());

        Self {
            expense_service,
            month_service,
            summary_service,
            config,
        }
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: TrackerConfig) -> Result<AppState> {
    info!("Setting up storage in {}", config.data_directory.display());
    let connection = CsvConnection::new(&config.data_directory)?;
    connection.ensure_expenses_file_exists()?;

    info!(
        "Setting up domain model: income {}, {} fixed expenses, {} months shown",
        config.income,
        config.fixed_expenses.len(),
        config.months_to_show
    );
    Ok(AppState::new(&connection, Arc::new(config)))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/months", get(io::list_months))
        .route("/months/:month_key", get(io::get_month))
        .route("/months/:month_key/expenses", post(io::add_expenses))
        .route(
            "/expenses/:expense_id",
            put(io::edit_expense).delete(io::delete_expense),
        )
        .route("/parse", post(io::preview_parse));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::setup_test_state;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use shared::{AddExpensesResponse, MonthExpenses};
    use tower::ServiceExt;

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_router_add_then_read_month() {
        let (state, _env) = setup_test_state().await;
        let app = create_router(state);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/months/October%202026/expenses",
                r#"{"text":"காய்கறி - 200, 50"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let added: AddExpensesResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(added.created.len(), 2);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/months/October%202026")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let month: MonthExpenses = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(month.summary.total, 250.0);
        assert_eq!(month.expenses[0].name, "காய்கறி");
    }

    #[tokio::test]
    async fn test_router_unknown_route() {
        let (state, _env) = setup_test_state().await;
        let response = create_router(state)
            .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_initialize_backend_creates_data_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = TrackerConfig {
            data_directory: temp_dir.path().join("data"),
            ..TrackerConfig::default()
        };
        let state = initialize_backend(config).unwrap();
        assert!(temp_dir.path().join("data").join("expenses.csv").exists());
        assert_eq!(state.summary_service.format_amount(5.0), "₹5");
    }
}
