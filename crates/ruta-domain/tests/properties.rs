//! Property tests for the dimensioning chain

use proptest::prelude::*;
use ruta_domain::service::formulas::{dispatch_interval, reserve_fleet, DEFAULT_RESERVE_PCT};
use ruta_domain::{
    dimension_default, generate_timetable, DimensioningRequest, RouteInputs, Timetable,
};
use ruta_types::ComputationStep;

fn route_inputs() -> impl Strategy<Value = RouteInputs> {
    (
        0.5f64..60.0,
        1u32..2_000,
        10u32..200,
        0.05f64..=1.0,
        1.0f64..120.0,
        0.0f64..20.0,
        0u32..23,
    )
        .prop_flat_map(|(length, demand, capacity, occupancy, travel, terminal, start)| {
            ((start + 1)..=24).prop_map(move |end| RouteInputs {
                route_length_km: length,
                hourly_demand: demand,
                vehicle_capacity: capacity,
                occupancy_factor: occupancy,
                travel_time_min: travel,
                terminal_time_min: terminal,
                start_hour: start,
                end_hour: end,
            })
        })
}

proptest! {
    #[test]
    fn interval_is_floored_half_minute_multiple(
        capacity in 1u32..500,
        demand in 1u32..5_000,
        occupancy in 0.01f64..=1.0,
    ) {
        let interval = dispatch_interval(capacity, demand, occupancy).unwrap();
        let raw = 60.0 * occupancy * f64::from(capacity) / f64::from(demand);
        prop_assert!(interval >= 0.0);
        prop_assert!(interval <= raw);
        prop_assert!(raw - interval < 0.5);
        prop_assert_eq!((interval * 2.0).fract(), 0.0);
    }

    #[test]
    fn reserve_defaults_to_ten_percent(fleet in 0u32..1_000) {
        let reserve = reserve_fleet(fleet, DEFAULT_RESERVE_PCT).unwrap();
        prop_assert_eq!(reserve, (f64::from(fleet) * 0.10).ceil() as u32);
    }

    #[test]
    fn pipeline_invariants(inputs in route_inputs()) {
        let request = DimensioningRequest::new(inputs).unwrap();
        match dimension_default(&request) {
            Ok(result) => {
                let expected_fleet =
                    (result.cycle_time_min / result.dispatch_interval_min).ceil() as u32;
                prop_assert!(result.fleet_size > 0);
                prop_assert_eq!(result.fleet_size, expected_fleet);
                prop_assert!(result.corrected_cycle_time_min >= result.cycle_time_min - 1e-9);
                prop_assert!(result.corrected_terminal_time_min >= 0.0);
                prop_assert!(!result.timetable.is_empty());
            }
            // Only an interval that floors to zero may stop a validated request.
            Err(err) => prop_assert_eq!(err.step, ComputationStep::FleetSize),
        }
    }

    #[test]
    fn pipeline_is_deterministic(inputs in route_inputs()) {
        let request = DimensioningRequest::new(inputs).unwrap();
        prop_assert_eq!(dimension_default(&request), dimension_default(&request));
    }

    #[test]
    fn timetable_is_ascending_within_window(
        start in 0u32..23,
        span in 1u32..6,
        half_minutes in 1u32..120,
    ) {
        let end = (start + span).min(24);
        let interval = f64::from(half_minutes) * 0.5;
        let departures: Vec<f64> = Timetable::new(start, end, interval)
            .unwrap()
            .map(|d| d.minute_of_day)
            .collect();

        let window = f64::from(end - start) * 60.0;
        prop_assert_eq!(departures.len(), (window / interval).ceil() as usize);
        prop_assert!(departures.windows(2).all(|w| w[0] < w[1]));
        let (lo, hi) = (f64::from(start) * 60.0, f64::from(end) * 60.0);
        prop_assert!(departures.iter().all(|m| *m >= lo && *m < hi));

        let strings = generate_timetable(start, end, interval).unwrap();
        prop_assert!(strings.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn reference_scenario_end_to_end() {
    let request = DimensioningRequest::new(RouteInputs {
        route_length_km: 10.0,
        hourly_demand: 375,
        vehicle_capacity: 70,
        occupancy_factor: 0.7,
        travel_time_min: 45.0,
        terminal_time_min: 6.0,
        start_hour: 7,
        end_hour: 8,
    })
    .unwrap();
    let result = dimension_default(&request).unwrap();

    assert_eq!(result.dispatch_interval_min, 7.5);
    assert_eq!(result.cycle_time_min, 102.0);
    assert_eq!(result.fleet_size, 14);
    assert_eq!(result.corrected_cycle_time_min, 105.0);
    assert_eq!(result.corrected_terminal_time_min, 7.5);
    assert!((result.commercial_speed_kmh - 11.428571428571429).abs() < 1e-9);
    assert_eq!(result.pass_frequency_vph, 8.0);
    assert_eq!(result.line_capacity_pph, 560.0);
    assert!((result.adjusted_line_capacity_pph - 392.0).abs() < 1e-9);
    assert_eq!(result.reserve_fleet, 2);
}

#[test]
fn zero_demand_is_rejected_before_any_formula() {
    let err = DimensioningRequest::new(RouteInputs {
        hourly_demand: 0,
        ..Default::default()
    })
    .unwrap_err();
    assert_eq!(err.step, ComputationStep::Request);
}

#[test]
fn inverted_window_never_produces_a_timetable() {
    let err = DimensioningRequest::new(RouteInputs {
        start_hour: 8,
        end_hour: 7,
        ..Default::default()
    })
    .unwrap_err();
    assert_eq!(err.step, ComputationStep::Request);
    assert!(generate_timetable(8, 7, 7.5).is_err());
}
