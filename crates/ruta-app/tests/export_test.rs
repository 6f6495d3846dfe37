//! Scenario file to exported artifacts

use ruta_app::app::run_scenario_strict;
use ruta_app::export::{
    export_supply_csv, export_timetable_csv, export_to_excel, export_trajectory_csv,
};
use ruta_app::scenario::Scenario;
use ruta_domain::service::DEFAULT_RESERVE_PCT;
use tempfile::tempdir;

const SCENARIO: &str = r#"
name = "Line 12"

[peak]
route_length_km = 10.0
hourly_demand = 375
vehicle_capacity = 70
occupancy_factor = 0.7
travel_time_min = 45.0
terminal_time_min = 6.0
start_hour = 7
end_hour = 8

[off_peak]
hourly_demand = 150
start_hour = 9
end_hour = 12
"#;

#[test]
fn test_scenario_file_to_workbook() {
    let dir = tempdir().expect("Failed to create temp dir");
    let scenario_path = dir.path().join("line12.toml");
    std::fs::write(&scenario_path, SCENARIO).unwrap();

    let scenario = Scenario::load(&scenario_path).unwrap();
    let reports = run_scenario_strict(&scenario, DEFAULT_RESERVE_PCT).unwrap();
    assert_eq!(reports.len(), 2);

    // off-peak: 60 * 0.7 * 70 / 150 = 19.6 -> 19.5 min
    let off_peak = &reports[1].result;
    assert!((off_peak.dispatch_interval_min - 19.5).abs() < 1e-9);
    assert_eq!(off_peak.fleet_size, 6);
    assert_eq!(off_peak.timetable.first().map(String::as_str), Some("09:00:00"));

    let workbook = dir.path().join("line12.xlsx");
    export_to_excel(&scenario.name, &reports, &workbook).unwrap();
    let size = std::fs::metadata(&workbook).unwrap().len();
    assert!(size > 0);
}

#[test]
fn test_csv_exports() {
    let dir = tempdir().expect("Failed to create temp dir");
    let reports = run_scenario_strict(&Scenario::default(), DEFAULT_RESERVE_PCT).unwrap();
    let peak = &reports[0];

    let timetable = dir.path().join("timetable.csv");
    export_timetable_csv(&peak.result.timetable, &timetable).unwrap();
    let text = std::fs::read_to_string(&timetable).unwrap();
    assert!(text.contains("8,07:52:30"));

    let trajectory = dir.path().join("trajectory.csv");
    export_trajectory_csv(&peak.trajectory_chart(), &trajectory).unwrap();
    assert_eq!(
        std::fs::read_to_string(&trajectory).unwrap().lines().count(),
        1 + 14 * 2 * 50
    );

    let supply = dir.path().join("supply.csv");
    export_supply_csv(&peak.supply_chart(), &supply).unwrap();
    assert!(std::fs::read_to_string(&supply).unwrap().lines().count() > 1);
}
