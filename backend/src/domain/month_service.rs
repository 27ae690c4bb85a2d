//! Month bootstrap: which months are shown, and seeding the fixed expenses
//! into a month the first time it is opened with nothing in it.

use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::config::TrackerConfig;
use crate::domain::{
    commands::months::MonthView,
    errors::ServiceResult,
    expense_service::ExpenseService,
    models::{Expense, MonthKey, NewExpense},
    summary_service::SummaryService,
};
use crate::storage::Connection;

/// The month containing `today` followed by the `count - 1` months before it
pub fn recent_month_keys(today: NaiveDate, count: u32) -> Vec<MonthKey> {
    let current = MonthKey::from_date(today);
    (0..count).map(|i| current.months_before(i)).collect()
}

#[derive(Clone)]
pub struct MonthService<C: Connection> {
    expense_service: ExpenseService<C>,
    summary_service: SummaryService,
    config: Arc<TrackerConfig>,
    /// Two loads racing on an empty month must not both seed it
    seed_lock: Arc<Mutex<()>>,
}

impl<C: Connection> MonthService<C> {
    pub fn new(
        expense_service: ExpenseService<C>,
        summary_service: SummaryService,
        config: Arc<TrackerConfig>,
    ) -> Self {
        Self {
            expense_service,
            summary_service,
            config,
            seed_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load the recent months, newest first, seeding any month that is empty.
    /// Only the newest month is marked expanded.
    pub async fn load_months(&self, today: NaiveDate) -> ServiceResult<Vec<MonthView>> {
        let month_keys = recent_month_keys(today, self.config.months_to_show);

        let mut months = Vec::with_capacity(month_keys.len());
        for (index, month_key) in month_keys.into_iter().enumerate() {
            let expenses = self.load_or_seed(&month_key).await?;
            months.push(self.to_view(month_key, expenses, index == 0));
        }
        Ok(months)
    }

    /// One month as stored, without seeding
    pub async fn load_month(&self, month_key: MonthKey) -> ServiceResult<MonthView> {
        let expenses = self.expense_service.list_month(&month_key).await?;
        Ok(self.to_view(month_key, expenses, true))
    }

    async fn load_or_seed(&self, month_key: &MonthKey) -> ServiceResult<Vec<Expense>> {
        let _guard = self.seed_lock.lock().await;

        let expenses = self.expense_service.list_month(month_key).await?;
        if !expenses.is_empty() || self.config.fixed_expenses.is_empty() {
            return Ok(expenses);
        }

        info!(
            "Seeding {} fixed expenses into {}",
            self.config.fixed_expenses.len(),
            month_key
        );
        for fixed in &self.config.fixed_expenses {
            self.expense_service
                .add_expense(NewExpense {
                    name: fixed.title.clone(),
                    amount: fixed.amount,
                    date: Utc::now(),
                    month_key: *month_key,
                })
                .await?;
        }

        self.expense_service.list_month(month_key).await
    }

    fn to_view(&self, month_key: MonthKey, expenses: Vec<Expense>, is_expanded: bool) -> MonthView {
        let totals = self.summary_service.summarize(self.config.income, &expenses);
        MonthView {
            month_key,
            expenses,
            totals,
            is_expanded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FixedExpense;
    use crate::domain::commands::expenses::AddExpensesCommand;
    use crate::storage::{csv::test_utils::TestEnvironment, CsvConnection};

    fn config(fixed: Vec<(&str, f64)>) -> Arc<TrackerConfig> {
        Arc::new(TrackerConfig {
            income: 20_000.0,
            fixed_expenses: fixed
                .into_iter()
                .map(|(title, amount)| FixedExpense {
                    title: title.to_string(),
                    amount,
                })
                .collect(),
            months_to_show: 3,
            ..TrackerConfig::default()
        })
    }

    async fn setup(config: Arc<TrackerConfig>) -> (MonthService<CsvConnection>, TestEnvironment) {
        let env = TestEnvironment::new().await.unwrap();
        let expense_service = ExpenseService::new(&env.connection);
        let service = MonthService::new(expense_service, SummaryService::new("₹"), config);
        (service, env)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 20).unwrap()
    }

    #[test]
    fn test_recent_month_keys_newest_first() {
        let labels: Vec<String> = recent_month_keys(today(), 3).iter().map(|k| k.label()).collect();
        assert_eq!(labels, vec!["January 2026", "December 2025", "November 2025"]);
        assert!(recent_month_keys(today(), 0).is_empty());
    }

    #[tokio::test]
    async fn test_empty_months_are_seeded() {
        let (service, _env) = setup(config(vec![("Rent", 12_000.0), ("EB", 1_500.0)])).await;

        let months = service.load_months(today()).await.unwrap();
        assert_eq!(months.len(), 3);
        for month in &months {
            let names: Vec<&str> = month.expenses.iter().map(|e| e.name.as_str()).collect();
            assert_eq!(names, vec!["Rent", "EB"]);
            assert_eq!(month.totals.total, 13_500.0);
            assert_eq!(month.totals.balance, 6_500.0);
        }
        assert!(months[0].is_expanded);
        assert!(!months[1].is_expanded && !months[2].is_expanded);
        assert_eq!(months[0].month_key, MonthKey::new(2026, 1).unwrap());
    }

    #[tokio::test]
    async fn test_seeding_happens_once() {
        let (service, _env) = setup(config(vec![("Rent", 12_000.0)])).await;

        service.load_months(today()).await.unwrap();
        let months = service.load_months(today()).await.unwrap();
        assert!(months.iter().all(|m| m.expenses.len() == 1));
    }

    #[tokio::test]
    async fn test_month_with_expenses_is_not_seeded() {
        let (service, _env) = setup(config(vec![("Rent", 12_000.0)])).await;
        service
            .expense_service
            .add_expenses_from_text(AddExpensesCommand {
                month_key: MonthKey::new(2026, 1).unwrap(),
                text: "Milk800".to_string(),
            })
            .await
            .unwrap();

        let months = service.load_months(today()).await.unwrap();
        let names: Vec<&str> = months[0].expenses.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Milk"]);
        assert_eq!(months[1].expenses[0].name, "Rent");
    }

    #[tokio::test]
    async fn test_concurrent_loads_seed_once() {
        let (service, _env) = setup(config(vec![("Rent", 12_000.0)])).await;

        let (a, b) = tokio::join!(service.load_months(today()), service.load_months(today()));
        a.unwrap();
        b.unwrap();

        let month = service.load_month(MonthKey::new(2026, 1).unwrap()).await.unwrap();
        assert_eq!(month.expenses.len(), 1);
    }

    #[tokio::test]
    async fn test_no_fixed_expenses_leaves_months_empty() {
        let (service, _env) = setup(config(vec![])).await;
        let months = service.load_months(today()).await.unwrap();
        assert!(months.iter().all(|m| m.expenses.is_empty()));
        assert_eq!(months[0].totals.balance, 20_000.0);
    }

    #[tokio::test]
    async fn test_month_totals_stay_finite_for_huge_amounts() {
        let (service, _env) = setup(config(vec![])).await;
        let nines = "9".repeat(308);
        service
            .expense_service
            .add_expenses_from_text(AddExpensesCommand {
                month_key: MonthKey::new(2026, 1).unwrap(),
                text: format!("Gold - {}, {}", nines, nines),
            })
            .await
            .unwrap();

        let month = service.load_month(MonthKey::new(2026, 1).unwrap()).await.unwrap();
        assert_eq!(month.expenses.len(), 2);
        assert!(month.totals.total.is_finite());
        assert!(month.totals.balance.is_finite());
    }

    #[tokio::test]
    async fn test_load_month_does_not_seed() {
        let (service, _env) = setup(config(vec![("Rent", 12_000.0)])).await;
        let month = service.load_month(MonthKey::new(1999, 5).unwrap()).await.unwrap();
        assert!(month.expenses.is_empty());
    }
}
