//! # Storage Module
//!
//! Persistence for expense records. The domain layer only sees the
//! [`ExpenseStorage`] and [`Connection`] traits; the CSV store is the one
//! implementation shipped today.

pub mod csv;
pub mod traits;

pub use self::csv::{CsvConnection, CsvExpenseRepository};
pub use traits::{Connection, ExpenseStorage};
