use crate::domain::{models::ParsedEntry, ParseReport, ParseStrategy};
use shared::{ParsePreviewResponse, ParseStrategyKind, ParsedExpense};

pub struct ParseMapper;

impl ParseMapper {
    pub fn to_preview(report: ParseReport) -> ParsePreviewResponse {
        ParsePreviewResponse {
            strategy: report.strategy.map(Self::to_dto_strategy),
            entries: report.entries.into_iter().map(Self::to_dto_entry).collect(),
            skipped_tokens: report.skipped_tokens,
        }
    }

    fn to_dto_entry(entry: ParsedEntry) -> ParsedExpense {
        ParsedExpense {
            name: entry.name,
            amount: entry.amount,
        }
    }

    fn to_dto_strategy(strategy: ParseStrategy) -> ParseStrategyKind {
        match strategy {
            ParseStrategy::DashList => ParseStrategyKind::DashList,
            ParseStrategy::TrailingNumber => ParseStrategyKind::TrailingNumber,
        }
    }
}
