use serde::{Deserialize, Serialize};

/// A stored expense as rendered for the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    /// Display name, may contain commas and non-Latin script
    pub name: String,
    pub amount: f64,
    /// Generation timestamp (RFC 3339)
    pub date: String,
    /// Month grouping label, e.g. "October 2026"
    pub month_key: String,
    /// Date in "DD/MM/YYYY HH:MM" form
    pub formatted_date: String,
    /// Amount with currency symbol, e.g. "₹200"
    pub formatted_amount: String,
    /// Canonical "name - amount" text used to prefill the edit box
    pub edit_text: String,
}

/// One `(name, amount)` pair produced by the expense text parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedExpense {
    pub name: String,
    pub amount: f64,
}

/// Which shorthand grammar interpreted the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseStrategyKind {
    DashList,
    TrailingNumber,
}

/// Raw text submitted from the add or edit box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseTextRequest {
    pub text: String,
}

/// Result of parsing text without storing anything
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsePreviewResponse {
    /// None when the input was blank
    pub strategy: Option<ParseStrategyKind>,
    pub entries: Vec<ParsedExpense>,
    /// Amount tokens that were present but did not hold a number
    pub skipped_tokens: Vec<String>,
}

/// Response after adding expenses from free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddExpensesResponse {
    pub month_key: String,
    pub created: Vec<Expense>,
    pub skipped_tokens: Vec<String>,
    pub success_message: String,
}

/// Response after editing an expense from free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditExpenseResponse {
    /// False when the text held no valid entry and nothing changed
    pub updated: bool,
    pub expense: Option<Expense>,
}

/// Income, spending and remainder for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub income: f64,
    pub total: f64,
    pub balance: f64,
    pub formatted_income: String,
    pub formatted_total: String,
    pub formatted_balance: String,
}

/// One month card: its expenses and totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthExpenses {
    pub month_key: String,
    pub expenses: Vec<Expense>,
    pub summary: MonthSummary,
    /// Only the most recent month starts expanded
    pub is_expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthListResponse {
    pub months: Vec<MonthExpenses>,
}
