//! Application use cases

pub mod dimensioning_service;

pub use dimensioning_service::{
    run_period, run_scenario, run_scenario_strict, PeriodOutcome, PeriodReport, RenderOptions,
};
