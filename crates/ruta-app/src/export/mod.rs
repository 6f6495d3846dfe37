//! Export of dimensioning results

pub mod csv_export;
pub mod excel;

pub use csv_export::{export_supply_csv, export_timetable_csv, export_trajectory_csv};
pub use excel::export_to_excel;
