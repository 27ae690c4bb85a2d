//! Monthly totals against the configured income, and the display formatting
//! that goes with them.

use chrono::{DateTime, Local, Utc};

use crate::domain::models::Expense;

/// Display format for expense dates
pub const DATE_DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthTotals {
    pub income: f64,
    pub total: f64,
    pub balance: f64,
}

#[derive(Debug, Clone)]
pub struct SummaryService {
    currency_symbol: String,
}

impl SummaryService {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Sum of amounts, and what is left of the income after them.
    /// Both saturate at the largest finite `f64`.
    pub fn summarize(&self, income: f64, expenses: &[Expense]) -> MonthTotals {
        let total = saturate(
            expenses
                .iter()
                .map(|e| e.amount)
                .filter(|a| a.is_finite())
                .fold(0.0, |sum, amount| saturate(sum + amount)),
        );
        MonthTotals {
            income,
            total,
            balance: saturate(income - total),
        }
    }

    /// "₹200", "₹12.5", "-₹300"
    pub fn format_amount(&self, amount: f64) -> String {
        if amount < 0.0 {
            format!("-{}{}", self.currency_symbol, -amount)
        } else {
            format!("{}{}", self.currency_symbol, amount)
        }
    }

    /// Local time in day/month/year order
    pub fn format_date(&self, date: &DateTime<Utc>) -> String {
        date.with_timezone(&Local).format(DATE_DISPLAY_FORMAT).to_string()
    }
}

fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::MonthKey;

    fn expense(amount: f64) -> Expense {
        Expense {
            id: Expense::generate_id(),
            name: "x".to_string(),
            amount,
            date: Utc::now(),
            month_key: MonthKey::new(2026, 10).unwrap(),
        }
    }

    #[test]
    fn test_summarize() {
        let service = SummaryService::new("₹");
        let totals = service.summarize(50_000.0, &[expense(12_000.0), expense(800.0), expense(12.5)]);
        assert_eq!(totals.total, 12_812.5);
        assert_eq!(totals.balance, 37_187.5);
        assert_eq!(totals.income, 50_000.0);
    }

    #[test]
    fn test_summarize_empty_month() {
        let totals = SummaryService::new("₹").summarize(1_000.0, &[]);
        assert_eq!(totals.total, 0.0);
        assert_eq!(totals.balance, 1_000.0);
    }

    #[test]
    fn test_overspent_month_has_negative_balance() {
        let service = SummaryService::new("₹");
        let totals = service.summarize(500.0, &[expense(800.0)]);
        assert_eq!(totals.balance, -300.0);
        assert_eq!(service.format_amount(totals.balance), "-₹300");
    }

    #[test]
    fn test_huge_amounts_saturate_instead_of_overflowing() {
        let service = SummaryService::new("₹");
        let totals = service.summarize(50_000.0, &[expense(f64::MAX), expense(f64::MAX), expense(1.0)]);
        assert_eq!(totals.total, f64::MAX);
        assert_eq!(totals.balance, 50_000.0 - f64::MAX);
        assert!(totals.balance.is_finite());
        assert!(!service.format_amount(totals.total).contains("inf"));
        assert!(!service.format_amount(totals.balance).contains("inf"));

        let json = serde_json::to_string(&shared::MonthSummary {
            income: totals.income,
            total: totals.total,
            balance: totals.balance,
            formatted_income: service.format_amount(totals.income),
            formatted_total: service.format_amount(totals.total),
            formatted_balance: service.format_amount(totals.balance),
        })
        .unwrap();
        let back: shared::MonthSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total, f64::MAX);
    }

    #[test]
    fn test_format_amount() {
        let service = SummaryService::new("₹");
        assert_eq!(service.format_amount(200.0), "₹200");
        assert_eq!(service.format_amount(12.5), "₹12.5");
        assert_eq!(SummaryService::new("Rs ").format_amount(0.0), "Rs 0");
    }

    #[test]
    fn test_format_date_shape() {
        let formatted = SummaryService::new("₹").format_date(&Utc::now());
        assert_eq!(formatted.len(), 16);
        assert_eq!(&formatted[2..3], "/");
        assert_eq!(&formatted[5..6], "/");
        assert_eq!(&formatted[13..14], ":");
    }
}
