//! # CSV Storage
//!
//! File-based document store. The whole expense collection lives in a single
//! `expenses.csv` inside the data directory:
//!
//! ```text
//! data/
//! ├── tracker_config.yaml
//! └── expenses.csv        id,name,amount,date,month_key
//! ```
//!
//! Writes go through a temp file and an atomic rename, and are serialized by
//! the connection's write lock.

pub mod connection;
pub mod expense_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use expense_repository::CsvExpenseRepository;
