//! Core types for bus route dimensioning

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Service period a set of inputs belongs to.
///
/// Both periods run through the same engine; the tag only labels output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    /// Hour of maximum demand
    #[default]
    Peak,
    /// Valley hour
    OffPeak,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::Peak, Period::OffPeak];

    pub fn label(&self) -> &'static str {
        match self {
            Period::Peak => "Peak hour",
            Period::OffPeak => "Off-peak hour",
        }
    }

    /// Short code used for sheet names and file suffixes
    pub fn code(&self) -> &'static str {
        match self {
            Period::Peak => "peak",
            Period::OffPeak => "off-peak",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
