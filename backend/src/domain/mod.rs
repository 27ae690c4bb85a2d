//! # Domain Module
//!
//! Business logic of the expense tracker, independent of the HTTP layer and
//! of where expenses are stored.
//!
//! ## Module Organization
//!
//! - **expense_parser**: free-text shorthand to `(name, amount)` entries
//! - **expense_service**: add, edit, delete and list expenses from text
//! - **month_service**: recent months and fixed-expense seeding
//! - **summary_service**: monthly totals against income, display formatting
//! - **commands**: command/result types used between the layers
//! - **models**: domain entities
//!
//! ## Business Rules
//!
//! - Text that parses to nothing is a no-op, never an error
//! - Editing applies only the first entry the text parses to
//! - A month with no expenses gets the configured fixed expenses when loaded
//! - Balance is income minus the sum of the month's expenses

pub mod commands;
pub mod errors;
pub mod expense_parser;
pub mod expense_service;
pub mod models;
pub mod month_service;
pub mod summary_service;

pub use errors::{ExpenseServiceError, ServiceResult};
pub use expense_parser::{analyze_expense_text, parse_expense_text, ParseReport, ParseStrategy};
pub use expense_service::ExpenseService;
pub use month_service::{recent_month_keys, MonthService};
pub use summary_service::{MonthTotals, SummaryService};
