//! Dimensioning engine for a single bus route
//!
//! Turns one period's route inputs into fleet size, dispatch interval,
//! capacities and a dispatch timetable. Every step is a pure function; the
//! pipeline in [`service::engine`] is their composition.

pub mod model;
pub mod service;

pub use model::{DimensioningRequest, DimensioningResult, RouteInputs, TableRow, TableValue};
pub use service::engine::{dimension, dimension_default};
pub use service::timetable::{generate_timetable, Departure, Timetable};
