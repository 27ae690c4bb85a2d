use super::expense_mapper::ExpenseMapper;
use crate::domain::{commands::months::MonthView, MonthTotals, SummaryService};
use shared::{MonthExpenses, MonthListResponse, MonthSummary};

pub struct MonthMapper;

impl MonthMapper {
    pub fn to_dto(view: MonthView, formatter: &SummaryService) -> MonthExpenses {
        MonthExpenses {
            month_key: view.month_key.label(),
            summary: Self::summary_to_dto(&view.totals, formatter),
            expenses: ExpenseMapper::to_dtos(view.expenses, formatter),
            is_expanded: view.is_expanded,
        }
    }

    pub fn to_list_response(views: Vec<MonthView>, formatter: &SummaryService) -> MonthListResponse {
        MonthListResponse {
            months: views
                .into_iter()
                .map(|view| Self::to_dto(view, formatter))
                .collect(),
        }
    }

    fn summary_to_dto(totals: &MonthTotals, formatter: &SummaryService) -> MonthSummary {
        MonthSummary {
            income: totals.income,
            total: totals.total,
            balance: totals.balance,
            formatted_income: formatter.format_amount(totals.income),
            formatted_total: formatter.format_amount(totals.total),
            formatted_balance: formatter.format_amount(totals.balance),
        }
    }
}
