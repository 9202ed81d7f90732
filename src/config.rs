use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::borough::MIN_BOROUGH_LISTINGS;
use crate::data::filter::UtilityFilter;
use crate::data::model::Utility;

/// Looked up in the working directory at startup.
pub const CONFIG_FILE: &str = "rental-dashboard.json";

const DEFAULT_DATA_PATH: &str = "montreal_housing_with_neighborhoods.csv";

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Startup settings. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Listings source (.csv, .json or .parquet).
    pub data_path: PathBuf,
    /// Smallest borough that is offered for selection.
    pub min_listings: usize,
    /// Utilities ticked when the dashboard opens.
    pub default_utilities: Vec<Utility>,
    pub window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            min_listings: MIN_BOROUGH_LISTINGS,
            default_utilities: vec![Utility::Electricity, Utility::Water],
            window_size: [1280.0, 900.0],
        }
    }
}

impl DashboardConfig {
    /// Read `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No {} found, using default configuration", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The filter the dashboard starts with.
    pub fn initial_filter(&self) -> UtilityFilter {
        self.default_utilities.iter().copied().collect()
    }
}
