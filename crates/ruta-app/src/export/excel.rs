//! Excel export functionality

use crate::app::PeriodReport;
use ruta_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

fn excel_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export period reports to an Excel file: a summary sheet, then a results
/// sheet and a timetable sheet per period.
pub fn export_to_excel(
    scenario_name: &str,
    reports: &[PeriodReport],
    output_path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, scenario_name, reports)?;

    for report in reports {
        let results_sheet = workbook.add_worksheet();
        write_results_sheet(results_sheet, report)?;

        let timetable_sheet = workbook.add_worksheet();
        write_timetable_sheet(timetable_sheet, report)?;
    }

    workbook.save(output_path).map_err(excel_err)?;
    tracing::info!(path = %output_path.display(), periods = reports.len(), "workbook written");

    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    scenario_name: &str,
    reports: &[PeriodReport],
) -> Result<()> {
    sheet.set_name("Summary").map_err(excel_err)?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Route Dimensioning Report", &header_format)
        .map_err(excel_err)?;
    sheet.write_string(2, 0, "Scenario:").map_err(excel_err)?;
    sheet.write_string(2, 1, scenario_name).map_err(excel_err)?;
    sheet.write_string(3, 0, "Generated:").map_err(excel_err)?;
    sheet
        .write_string(3, 1, chrono::Local::now().to_rfc3339())
        .map_err(excel_err)?;

    let headers = ["Period", "Interval (min)", "Vehicles", "Reserve", "Adjusted capacity (pax/h)"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(5, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    for (idx, report) in reports.iter().enumerate() {
        let row = 6 + idx as u32;
        let result = &report.result;
        sheet.write_string(row, 0, report.period.label()).map_err(excel_err)?;
        sheet
            .write_number(row, 1, result.dispatch_interval_min)
            .map_err(excel_err)?;
        sheet
            .write_number(row, 2, f64::from(result.fleet_size))
            .map_err(excel_err)?;
        sheet
            .write_number(row, 3, f64::from(result.reserve_fleet))
            .map_err(excel_err)?;
        sheet
            .write_number(row, 4, result.adjusted_line_capacity_pph)
            .map_err(excel_err)?;
    }

    Ok(())
}

fn write_results_sheet(sheet: &mut Worksheet, report: &PeriodReport) -> Result<()> {
    sheet
        .set_name(format!("{} results", report.period.code()))
        .map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let inputs = report.request.inputs();

    sheet
        .write_string_with_format(0, 0, "Inputs", &header_format)
        .map_err(excel_err)?;
    let input_rows: [(&str, f64); 8] = [
        ("Route length (km)", inputs.route_length_km),
        ("Hourly demand (pax/h)", f64::from(inputs.hourly_demand)),
        ("Vehicle capacity (pax)", f64::from(inputs.vehicle_capacity)),
        ("Occupancy factor", inputs.occupancy_factor),
        ("Travel time (min)", inputs.travel_time_min),
        ("Terminal time (min)", inputs.terminal_time_min),
        ("Start hour", f64::from(inputs.start_hour)),
        ("End hour", f64::from(inputs.end_hour)),
    ];
    for (idx, (label, value)) in input_rows.iter().enumerate() {
        let row = 1 + idx as u32;
        sheet.write_string(row, 0, *label).map_err(excel_err)?;
        sheet.write_number(row, 1, *value).map_err(excel_err)?;
    }

    let header_row = 1 + input_rows.len() as u32 + 1;
    for (col, header) in ["Parameter", "Unit", "Value"].iter().enumerate() {
        sheet
            .write_string_with_format(header_row, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    // Full precision in the workbook; rounding is a display concern.
    for (idx, row) in report.result.table_rows().iter().enumerate() {
        let r = header_row + 1 + idx as u32;
        sheet.write_string(r, 0, row.label).map_err(excel_err)?;
        sheet.write_string(r, 1, row.unit).map_err(excel_err)?;
        sheet.write_number(r, 2, row.value.as_f64()).map_err(excel_err)?;
    }

    sheet.set_column_width(0, 28).map_err(excel_err)?;

    Ok(())
}

fn write_timetable_sheet(sheet: &mut Worksheet, report: &PeriodReport) -> Result<()> {
    sheet
        .set_name(format!("{} timetable", report.period.code()))
        .map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    sheet
        .write_string_with_format(0, 0, "Departure", &header_format)
        .map_err(excel_err)?;
    sheet
        .write_string_with_format(0, 1, "Time", &header_format)
        .map_err(excel_err)?;

    for (idx, time) in report.result.timetable.iter().enumerate() {
        let row = 1 + idx as u32;
        sheet.write_number(row, 0, (idx + 1) as f64).map_err(excel_err)?;
        sheet.write_string(row, 1, time).map_err(excel_err)?;
    }

    Ok(())
}
