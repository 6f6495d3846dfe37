//! Output formatting module

use ruta_app::app::{PeriodReport, RenderOptions};
use ruta_domain::service::{SupplyChart, TrajectoryChart};
use ruta_types::{OutputFormat, Result};
use serde_json::json;
use std::fmt::Write;

pub fn output_report(
    output_format: OutputFormat,
    report: &PeriodReport,
    render: RenderOptions,
    decimals: usize,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report_json(report, render))?);
    } else {
        print!("{}", render_report(report, render, decimals));
    }
    Ok(())
}

pub fn report_json(report: &PeriodReport, render: RenderOptions) -> serde_json::Value {
    let mut value = json!({
        "period": report.period,
        "inputs": report.request.inputs(),
    });
    if render.show_results {
        value["results"] = json!(report.result);
    }
    if render.show_charts {
        value["trajectory"] = json!(report.trajectory_chart());
        value["supply"] = json!(report.supply_chart());
    }
    value
}

pub fn render_report(report: &PeriodReport, render: RenderOptions, decimals: usize) -> String {
    let mut out = String::new();
    let title = format!("{} - Route Dimensioning", report.period.label());
    let _ = writeln!(out, "\n{}", title);
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));

    if render.show_results {
        out.push_str(&render_results_table(report, decimals));
    }
    if render.show_charts {
        out.push_str(&render_trajectory(&report.trajectory_chart()));
        out.push_str(&render_supply(&report.supply_chart(), decimals));
        out.push_str(&render_timetable(&report.result.timetable));
    }
    out
}

pub fn render_results_table(report: &PeriodReport, decimals: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{:<26} {:>12}  {}", "Parameter", "Value", "Unit");
    let _ = writeln!(out, "{}", "-".repeat(48));
    for row in report.result.table_rows() {
        let _ = writeln!(
            out,
            "{:<26} {:>12}  {}",
            row.label,
            row.value.display(decimals),
            row.unit
        );
    }
    out
}

pub fn render_trajectory(chart: &TrajectoryChart) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\nVehicle Trajectories ({:.1} km, cycle {} min, every {} min)",
        chart.route_length_km, chart.cycle_time_min, chart.interval_min
    );
    let _ = writeln!(out, "{}", "-".repeat(48));
    let _ = writeln!(out, "{:<8} {:>18} {:>18}", "Bus", "Outbound (min)", "Return (min)");
    for trip in &chart.trips {
        let _ = writeln!(
            out,
            "{:<8} {:>18} {:>18}",
            format!("Bus {}", trip.vehicle),
            format!("{:.1} - {:.1}", trip.outbound.start_min, trip.outbound.end_min),
            format!("{:.1} - {:.1}", trip.inbound.start_min, trip.inbound.end_min),
        );
    }
    out
}

pub fn render_supply(chart: &SupplyChart, decimals: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nCumulative Supply over One Hour");
    let _ = writeln!(out, "{}", "-".repeat(48));
    let _ = writeln!(out, "{:>10} {:>8} {:>14}", "Minute", "Bus", "Places");
    for point in &chart.points {
        let _ = writeln!(
            out,
            "{:>10.1} {:>8} {:>14.*}",
            point.minute, point.vehicle, decimals, point.cumulative_places
        );
    }
    let _ = writeln!(out, "Hourly demand: {}", chart.hourly_demand);
    match chart.first_minute_covering_demand() {
        Some(minute) => {
            let _ = writeln!(out, "Demand covered at minute {:.1}", minute);
        }
        None => {
            let _ = writeln!(out, "Demand not covered within the hour");
        }
    }
    out
}

pub fn render_timetable(timetable: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nDispatch Timetable ({} departures)", timetable.len());
    let _ = writeln!(out, "{}", "-".repeat(48));
    for time in timetable {
        let _ = writeln!(out, "{}", time);
    }
    out
}
