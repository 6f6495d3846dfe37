//! Error types for ruta-dimension

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Step of the dimensioning chain that rejected its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputationStep {
    /// Validation of the raw inputs before any formula runs
    Request,
    OperationSpeed,
    DispatchInterval,
    CycleTime,
    FleetSize,
    CorrectedCycleTime,
    CorrectedTerminalTime,
    CommercialSpeed,
    SystemEfficiency,
    PassFrequency,
    LineCapacity,
    AdjustedLineCapacity,
    ReserveFleet,
    Timetable,
}

impl ComputationStep {
    pub fn label(&self) -> &'static str {
        match self {
            ComputationStep::Request => "request",
            ComputationStep::OperationSpeed => "operation speed",
            ComputationStep::DispatchInterval => "dispatch interval",
            ComputationStep::CycleTime => "cycle time",
            ComputationStep::FleetSize => "fleet size",
            ComputationStep::CorrectedCycleTime => "corrected cycle time",
            ComputationStep::CorrectedTerminalTime => "corrected terminal time",
            ComputationStep::CommercialSpeed => "commercial speed",
            ComputationStep::SystemEfficiency => "system efficiency",
            ComputationStep::PassFrequency => "pass frequency",
            ComputationStep::LineCapacity => "line capacity",
            ComputationStep::AdjustedLineCapacity => "adjusted line capacity",
            ComputationStep::ReserveFleet => "reserve fleet",
            ComputationStep::Timetable => "timetable",
        }
    }
}

impl fmt::Display for ComputationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A violated precondition somewhere in the dimensioning chain.
///
/// This is the only error the engine raises. It is never retried and never
/// substituted with a default: the caller shows `message` and stops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{step}: {message}")]
pub struct DimensioningError {
    pub step: ComputationStep,
    pub message: String,
}

impl DimensioningError {
    pub fn new(step: ComputationStep, message: impl Into<String>) -> Self {
        Self {
            step,
            message: message.into(),
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scenario parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Scenario serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dimensioning error: {0}")]
    Dimensioning(#[from] DimensioningError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("{failed} of {total} periods could not be dimensioned")]
    PeriodsFailed { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensioning_error_names_step() {
        let err = DimensioningError::new(ComputationStep::DispatchInterval, "demand must be > 0");
        assert_eq!(err.to_string(), "dispatch interval: demand must be > 0");
    }

    #[test]
    fn test_umbrella_error_wraps_dimensioning() {
        let err: Error = DimensioningError::new(ComputationStep::Timetable, "bad window").into();
        assert!(matches!(err, Error::Dimensioning(_)));
        assert!(err.to_string().contains("timetable: bad window"));
    }
}
