//! Scenario files: inputs for both service periods in one TOML document
//!
//! ```toml
//! name = "Line 12"
//!
//! [peak]
//! route_length_km = 10.0
//! hourly_demand = 375
//!
//! [off_peak]
//! hourly_demand = 180
//! start_hour = 9
//! end_hour = 16
//! ```

use ruta_domain::RouteInputs;
use ruta_types::{Error, Period, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub name: String,
    pub peak: RouteInputs,
    pub off_peak: RouteInputs,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            name: "Route".to_string(),
            peak: RouteInputs::default(),
            off_peak: RouteInputs::default(),
        }
    }
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let scenario = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), name = %scenario.name, "scenario loaded");
        Ok(scenario)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn inputs(&self, period: Period) -> &RouteInputs {
        match period {
            Period::Peak => &self.peak,
            Period::OffPeak => &self.off_peak,
        }
    }
}
