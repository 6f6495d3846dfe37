//! Domain services

pub mod chart;
pub mod engine;
pub mod formulas;
pub mod timetable;

pub use chart::{Segment, SupplyChart, SupplyPoint, TrajectoryChart, VehicleTrip};
pub use engine::{dimension, dimension_default};
pub use formulas::DEFAULT_RESERVE_PCT;
