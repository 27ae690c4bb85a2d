pub mod expense_mapper;
pub mod month_mapper;
pub mod parse_mapper;

pub use expense_mapper::ExpenseMapper;
pub use month_mapper::MonthMapper;
pub use parse_mapper::ParseMapper;
