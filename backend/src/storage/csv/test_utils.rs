//! Test utilities for automatic cleanup and consistent test infrastructure
//!
//! Every test gets its own temporary data directory which is removed when the
//! environment is dropped, even if the test panics.

use anyhow::Result;
use std::path::PathBuf;
use tempfile::TempDir;

use super::connection::CsvConnection;

/// RAII test environment that owns a temporary data directory
pub struct TestEnvironment {
    /// Kept alive so the directory survives until drop
    _temp_dir: TempDir,
    pub connection: CsvConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        Self::new_with_prefix("selavu-test").await
    }

    /// Prefix shows up in the directory name, handy when debugging a failed run
    pub async fn new_with_prefix(prefix: &str) -> Result<Self> {
        let temp_dir = TempDir::with_prefix(prefix)?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = CsvConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        if std::env::var("SELAVU_DEBUG_TESTS").is_ok() {
            println!("Cleaning up test environment: {:?}", self.base_path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_directory_removed_on_drop() {
        let env = TestEnvironment::new_with_prefix("selavu-drop").await.unwrap();
        let path = env.base_path.clone();
        assert!(path.exists());

        drop(env);
        assert!(!path.exists());
    }
}
