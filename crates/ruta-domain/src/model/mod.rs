//! Domain model types

pub mod request;
pub mod result;

pub use request::{DimensioningRequest, RouteInputs};
pub use result::{DimensioningResult, TableRow, TableValue};
