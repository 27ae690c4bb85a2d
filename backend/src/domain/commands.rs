//! Domain-level command and result types.
//! These are used by services inside the domain layer and are not exposed
//! over the API. The REST layer maps the DTOs from the `shared` crate to and
//! from these.

pub mod expenses {
    use crate::domain::models::{Expense, MonthKey};

    /// Add whatever the text parses to, into one month
    #[derive(Debug, Clone)]
    pub struct AddExpensesCommand {
        pub month_key: MonthKey,
        pub text: String,
    }

    /// Replace name and amount of an expense with the first entry the text parses to
    #[derive(Debug, Clone)]
    pub struct EditExpenseCommand {
        pub expense_id: String,
        pub text: String,
    }

    #[derive(Debug, Clone)]
    pub struct AddExpensesResult {
        pub month_key: MonthKey,
        /// Empty when the text held no valid entry
        pub created: Vec<Expense>,
        pub skipped_tokens: Vec<String>,
    }

    impl AddExpensesResult {
        pub fn success_message(&self) -> String {
            match self.created.len() {
                0 => "No expense added".to_string(),
                1 => "1 expense added".to_string(),
                n => format!("{} expenses added", n),
            }
        }
    }

    #[derive(Debug, Clone)]
    pub struct EditExpenseResult {
        /// None when the text held no valid entry and nothing was changed
        pub expense: Option<Expense>,
    }
}

pub mod months {
    use crate::domain::models::{Expense, MonthKey};
    use crate::domain::summary_service::MonthTotals;

    /// One month with its expenses and totals
    #[derive(Debug, Clone)]
    pub struct MonthView {
        pub month_key: MonthKey,
        pub expenses: Vec<Expense>,
        pub totals: MonthTotals,
        pub is_expanded: bool,
    }
}
