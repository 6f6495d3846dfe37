//! CSV writers for the timetable and the chart series

use ruta_domain::service::{SupplyChart, TrajectoryChart};
use ruta_types::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Points per leg when flattening trajectories, enough for a smooth plot
pub const TRAJECTORY_SAMPLES_PER_LEG: usize = 50;

#[derive(Serialize)]
struct TimetableRecord<'a> {
    departure: usize,
    time: &'a str,
}

#[derive(Serialize)]
struct TrajectoryRecord {
    vehicle: u32,
    leg: &'static str,
    minute: f64,
    km: f64,
}

pub fn write_timetable<W: Write>(timetable: &[String], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (idx, time) in timetable.iter().enumerate() {
        wtr.serialize(TimetableRecord {
            departure: idx + 1,
            time,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_trajectory<W: Write>(
    chart: &TrajectoryChart,
    samples_per_leg: usize,
    writer: W,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for trip in &chart.trips {
        for (leg, segment) in [("outbound", &trip.outbound), ("inbound", &trip.inbound)] {
            for (minute, km) in segment.sample(samples_per_leg) {
                wtr.serialize(TrajectoryRecord {
                    vehicle: trip.vehicle,
                    leg,
                    minute,
                    km,
                })?;
            }
        }
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_supply<W: Write>(chart: &SupplyChart, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for point in &chart.points {
        wtr.serialize(point)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_timetable_csv(timetable: &[String], path: &Path) -> Result<()> {
    write_timetable(timetable, std::fs::File::create(path)?)?;
    tracing::info!(path = %path.display(), rows = timetable.len(), "timetable written");
    Ok(())
}

pub fn export_trajectory_csv(chart: &TrajectoryChart, path: &Path) -> Result<()> {
    write_trajectory(chart, TRAJECTORY_SAMPLES_PER_LEG, std::fs::File::create(path)?)?;
    tracing::info!(path = %path.display(), trips = chart.trips.len(), "trajectory series written");
    Ok(())
}

pub fn export_supply_csv(chart: &SupplyChart, path: &Path) -> Result<()> {
    write_supply(chart, std::fs::File::create(path)?)?;
    tracing::info!(path = %path.display(), points = chart.points.len(), "supply series written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruta_domain::{dimension_default, DimensioningRequest, RouteInputs};

    fn reference_charts() -> (Vec<String>, TrajectoryChart, SupplyChart) {
        let request = DimensioningRequest::new(RouteInputs::default()).unwrap();
        let result = dimension_default(&request).unwrap();
        (
            result.timetable.clone(),
            TrajectoryChart::build(&request, &result),
            SupplyChart::build(&request, &result),
        )
    }

    #[test]
    fn test_timetable_csv() {
        let (timetable, _, _) = reference_charts();
        let mut buf = Vec::new();
        write_timetable(&timetable, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "departure,time");
        assert_eq!(lines[1], "1,07:00:00");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_trajectory_csv_row_count() {
        let (_, chart, _) = reference_charts();
        let mut buf = Vec::new();
        write_trajectory(&chart, 3, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        // header + 14 trips * 2 legs * 3 samples
        assert_eq!(text.lines().count(), 1 + 14 * 2 * 3);
        assert!(text.starts_with("vehicle,leg,minute,km"));
    }

    #[test]
    fn test_supply_csv() {
        let (_, _, chart) = reference_charts();
        let mut buf = Vec::new();
        write_supply(&chart, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("minute,vehicle,cumulative_places"));
        assert_eq!(text.lines().count(), 1 + 9);
    }
}
