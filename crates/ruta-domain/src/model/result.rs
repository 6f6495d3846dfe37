//! Dimensioning result and its labeled table form

use serde::{Deserialize, Serialize};

/// Everything the engine derives for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensioningResult {
    pub operation_speed_kmh: f64,
    /// Quantized to 0.5 min buckets (floored)
    pub dispatch_interval_min: f64,
    pub cycle_time_min: f64,
    pub fleet_size: u32,
    pub corrected_cycle_time_min: f64,
    pub corrected_terminal_time_min: f64,
    pub commercial_speed_kmh: f64,
    /// km/h per vehicle
    pub system_efficiency: f64,
    /// Vehicles per hour
    pub pass_frequency_vph: f64,
    /// Places per hour
    pub line_capacity_pph: f64,
    /// Places per hour at the target occupancy
    pub adjusted_line_capacity_pph: f64,
    pub reserve_fleet: u32,
    /// HH:MM:SS dispatch times, ascending
    pub timetable: Vec<String>,
}

/// How a table value is shown
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableValue {
    Count(u32),
    /// Shown as computed (interval and cycle times are exact half-minutes)
    Exact(f64),
    /// Shown rounded to the display precision
    Rounded(f64),
}

impl TableValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            TableValue::Count(n) => f64::from(n),
            TableValue::Exact(v) | TableValue::Rounded(v) => v,
        }
    }

    pub fn display(&self, decimals: usize) -> String {
        match *self {
            TableValue::Count(n) => n.to_string(),
            TableValue::Exact(v) => v.to_string(),
            TableValue::Rounded(v) => format!("{:.*}", decimals, v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    pub label: &'static str,
    pub unit: &'static str,
    pub value: TableValue,
}

impl DimensioningResult {
    /// The twelve scalars in display order
    pub fn table_rows(&self) -> Vec<TableRow> {
        let row = |label, unit, value| TableRow { label, unit, value };
        vec![
            row("Operation speed", "km/h", TableValue::Rounded(self.operation_speed_kmh)),
            row("Dispatch interval", "min", TableValue::Exact(self.dispatch_interval_min)),
            row("Cycle time", "min", TableValue::Exact(self.cycle_time_min)),
            row("Vehicles required", "veh", TableValue::Count(self.fleet_size)),
            row("Corrected cycle time", "min", TableValue::Exact(self.corrected_cycle_time_min)),
            row(
                "Corrected terminal time",
                "min",
                TableValue::Rounded(self.corrected_terminal_time_min),
            ),
            row("Commercial speed", "km/h", TableValue::Rounded(self.commercial_speed_kmh)),
            row("Efficiency", "km/h/veh", TableValue::Rounded(self.system_efficiency)),
            row("Pass frequency", "veh/h", TableValue::Rounded(self.pass_frequency_vph)),
            row("Line capacity", "pax/h", TableValue::Rounded(self.line_capacity_pph)),
            row(
                "Adjusted line capacity",
                "pax/h",
                TableValue::Rounded(self.adjusted_line_capacity_pph),
            ),
            row("Reserve vehicles", "veh", TableValue::Count(self.reserve_fleet)),
        ]
    }

    /// Operating fleet plus reserve
    pub fn total_fleet(&self) -> u32 {
        self.fleet_size + self.reserve_fleet
    }
}
