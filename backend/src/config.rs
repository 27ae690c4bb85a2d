//! # Tracker Configuration
//!
//! Monthly income, the recurring expenses every new month starts with, and
//! where data lives. Loaded once at startup from `tracker_config.yaml` and
//! handed to the services that need it; nothing reads it from a global.
//!
//! ```yaml
//! income: 50000.0
//! currency_symbol: "₹"
//! months_to_show: 3
//! bind_address: "127.0.0.1:3000"
//! fixed_expenses:
//!   - title: "வீட்டு வாடகை"
//!     amount: 12000.0
//! ```
//!
//! The file is looked up at `$SELAVU_CONFIG`, otherwise inside the data
//! directory (`$SELAVU_DATA_DIR` or the platform default). A missing file is
//! created with defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::storage::CsvConnection;

pub const CONFIG_FILE_NAME: &str = "tracker_config.yaml";
pub const CONFIG_PATH_ENV: &str = "SELAVU_CONFIG";
pub const DATA_DIR_ENV: &str = "SELAVU_DATA_DIR";

/// A recurring expense seeded into every new month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedExpense {
    pub title: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub income: f64,
    pub fixed_expenses: Vec<FixedExpense>,
    pub months_to_show: u32,
    pub currency_symbol: String,
    pub bind_address: SocketAddr,
    /// Not stored in the file; filled in from where the file was found
    #[serde(skip)]
    pub data_directory: PathBuf,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            income: 50_000.0,
            fixed_expenses: vec![
                FixedExpense {
                    title: "வீட்டு வாடகை".to_string(),
                    amount: 12_000.0,
                },
                FixedExpense {
                    title: "மின்சாரம்".to_string(),
                    amount: 1_500.0,
                },
                FixedExpense {
                    title: "பால்".to_string(),
                    amount: 800.0,
                },
            ],
            months_to_show: 3,
            currency_symbol: "₹".to_string(),
            bind_address: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_directory: CsvConnection::default_directory(),
        }
    }
}

impl TrackerConfig {
    /// Load using the environment to find the data directory and config file
    pub fn load_from_env() -> Result<Self> {
        let data_directory = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(CsvConnection::default_directory);
        let config_path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_directory.join(CONFIG_FILE_NAME));

        Self::load_or_create(&config_path, data_directory)
    }

    /// Read the YAML file, writing a default one first if it does not exist
    pub fn load_or_create(config_path: &Path, data_directory: PathBuf) -> Result<Self> {
        let mut config = if config_path.exists() {
            let yaml_content = fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: TrackerConfig = serde_yaml::from_str(&yaml_content)
                .with_context(|| format!("Invalid config in {}", config_path.display()))?;
            debug!("Loaded tracker config from {}", config_path.display());
            config
        } else {
            let config = TrackerConfig::default();
            config.save(config_path)?;
            info!("Created default tracker config at {}", config_path.display());
            config
        };

        config.data_directory = data_directory;
        config.months_to_show = config.months_to_show.max(1);
        Ok(config)
    }

    pub fn save(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let yaml_content = serde_yaml::to_string(self)?;
        fs::write(config_path, yaml_content)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        Ok(())
    }
}
