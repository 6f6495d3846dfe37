//! Dimensioning Service - runs the engine for one or both service periods
//!
//! Peak and off-peak are two independent invocations of the same engine: a
//! failure in one period never hides the other period's outcome.

use ruta_domain::service::{SupplyChart, TrajectoryChart};
use ruta_domain::{dimension, DimensioningRequest, DimensioningResult, RouteInputs};
use ruta_types::{DimensioningError, Period};
use serde::Serialize;

use crate::scenario::Scenario;

/// Which panels the output layer should show for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_results: bool,
    /// Chart series and the dispatch timetable
    pub show_charts: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_results: true,
            show_charts: false,
        }
    }
}

/// Validated inputs and computed outputs of one period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodReport {
    pub period: Period,
    pub request: DimensioningRequest,
    pub result: DimensioningResult,
}

impl PeriodReport {
    pub fn trajectory_chart(&self) -> TrajectoryChart {
        TrajectoryChart::build(&self.request, &self.result)
    }

    pub fn supply_chart(&self) -> SupplyChart {
        SupplyChart::build(&self.request, &self.result)
    }
}

/// Outcome of one period inside a scenario run
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodOutcome {
    pub period: Period,
    pub outcome: Result<PeriodReport, DimensioningError>,
}

pub fn run_period(
    period: Period,
    inputs: &RouteInputs,
    reserve_pct: f64,
) -> Result<PeriodReport, DimensioningError> {
    let request = DimensioningRequest::new(inputs.clone())?;
    let result = dimension(&request, reserve_pct)?;
    tracing::debug!(
        period = period.code(),
        fleet = result.fleet_size,
        interval = result.dispatch_interval_min,
        departures = result.timetable.len(),
        "period dimensioned"
    );
    Ok(PeriodReport {
        period,
        request,
        result,
    })
}

/// Run both periods of a scenario, peak first
pub fn run_scenario(scenario: &Scenario, reserve_pct: f64) -> Vec<PeriodOutcome> {
    Period::ALL
        .iter()
        .map(|&period| {
            let outcome = run_period(period, scenario.inputs(period), reserve_pct);
            if let Err(ref e) = outcome {
                tracing::warn!(period = period.code(), error = %e, "period rejected");
            }
            PeriodOutcome { period, outcome }
        })
        .collect()
}

/// Successful reports of a scenario, or the first period's error
pub fn run_scenario_strict(
    scenario: &Scenario,
    reserve_pct: f64,
) -> Result<Vec<PeriodReport>, DimensioningError> {
    run_scenario(scenario, reserve_pct)
        .into_iter()
        .map(|o| o.outcome)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruta_domain::service::DEFAULT_RESERVE_PCT;
    use ruta_types::ComputationStep;

    #[test]
    fn test_run_period_reference() {
        let report =
            run_period(Period::Peak, &RouteInputs::default(), DEFAULT_RESERVE_PCT).unwrap();
        assert_eq!(report.period, Period::Peak);
        assert_eq!(report.result.fleet_size, 14);
        assert_eq!(report.trajectory_chart().trips.len(), 14);
        assert!(report.supply_chart().covers_demand());
    }

    #[test]
    fn test_periods_are_independent() {
        let scenario = Scenario {
            off_peak: RouteInputs {
                hourly_demand: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let outcomes = run_scenario(&scenario, DEFAULT_RESERVE_PCT);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].period, Period::Peak);
        assert!(outcomes[0].outcome.is_ok());
        let err = outcomes[1].outcome.as_ref().unwrap_err();
        assert_eq!(err.step, ComputationStep::Request);
    }

    #[test]
    fn test_strict_run_reports_first_error() {
        let scenario = Scenario {
            peak: RouteInputs {
                start_hour: 8,
                end_hour: 7,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(run_scenario_strict(&scenario, DEFAULT_RESERVE_PCT).is_err());
        assert_eq!(
            run_scenario_strict(&Scenario::default(), DEFAULT_RESERVE_PCT)
                .unwrap()
                .len(),
            2
        );
    }

    #[test]
    fn test_reserve_percentage_is_threaded_through() {
        let report = run_period(Period::OffPeak, &RouteInputs::default(), 0.5).unwrap();
        assert_eq!(report.result.reserve_fleet, 7);
    }
}
