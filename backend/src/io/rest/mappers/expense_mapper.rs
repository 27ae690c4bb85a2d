use crate::domain::{models::Expense as DomainExpense, SummaryService};
use shared::Expense as SharedExpense;

pub struct ExpenseMapper;

impl ExpenseMapper {
    pub fn to_dto(domain: DomainExpense, formatter: &SummaryService) -> SharedExpense {
        SharedExpense {
            formatted_date: formatter.format_date(&domain.date),
            formatted_amount: formatter.format_amount(domain.amount),
            edit_text: domain.edit_text(),
            date: domain.date.to_rfc3339(),
            month_key: domain.month_key.label(),
            id: domain.id,
            name: domain.name,
            amount: domain.amount,
        }
    }

    pub fn to_dtos(domain: Vec<DomainExpense>, formatter: &SummaryService) -> Vec<SharedExpense> {
        domain
            .into_iter()
            .map(|expense| Self::to_dto(expense, formatter))
            .collect()
    }
}
