use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

use super::expense_repository::CsvExpenseRepository;
use crate::storage::traits::Connection;

pub const EXPENSES_FILE_NAME: &str = "expenses.csv";
pub const EXPENSES_HEADER: [&str; 5] = ["id", "name", "amount", "date", "month_key"];

/// CsvConnection owns the data directory and the expense collection file in it
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
    /// Held for every read-modify-write cycle on the collection file
    write_lock: Arc<Mutex<()>>,
}

impl CsvConnection {
    /// Create a new CSV connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("Failed to create data directory {}", base_path.display())
            })?;
            info!("Created data directory {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Default location: ~/Documents/Selavu, falling back to ./data
    pub fn default_directory() -> PathBuf {
        dirs::document_dir()
            .or_else(dirs::home_dir)
            .map(|dir| dir.join("Selavu"))
            .unwrap_or_else(|| PathBuf::from("data"))
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn expenses_file_path(&self) -> PathBuf {
        self.base_directory.join(EXPENSES_FILE_NAME)
    }

    /// Ensure the collection file exists with its header row
    pub fn ensure_expenses_file_exists(&self) -> Result<()> {
        let file_path = self.expenses_file_path();
        if !file_path.exists() {
            let header = format!("{}\n", EXPENSES_HEADER.join(","));
            fs::write(&file_path, header)
                .with_context(|| format!("Failed to create {}", file_path.display()))?;
            debug!("Created expense file {}", file_path.display());
        }
        Ok(())
    }

    pub async fn lock_for_write(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}

impl Connection for CsvConnection {
    type ExpenseRepository = CsvExpenseRepository;

    fn create_expense_repository(&self) -> Self::ExpenseRepository {
        CsvExpenseRepository::new(self.clone())
    }
}
