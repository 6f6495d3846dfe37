//! Route inputs and the validated dimensioning request

use ruta_types::{ComputationStep, DimensioningError};
use serde::{Deserialize, Serialize};

/// Raw inputs for one service period, as typed by the user.
///
/// Missing fields fall back to the values the input form starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteInputs {
    /// One-way route length in kilometres
    pub route_length_km: f64,
    /// Passengers per hour
    pub hourly_demand: u32,
    /// Vehicle capacity, seated plus standing
    pub vehicle_capacity: u32,
    /// Target occupancy, fraction in (0, 1]
    pub occupancy_factor: f64,
    /// One-way travel time in minutes
    pub travel_time_min: f64,
    /// Dwell time at each terminal in minutes
    pub terminal_time_min: f64,
    /// First hour of service, 0..24
    pub start_hour: u32,
    /// Hour service ends (exclusive), 1..=24
    pub end_hour: u32,
}

impl Default for RouteInputs {
    fn default() -> Self {
        Self {
            route_length_km: 10.0,
            hourly_demand: 375,
            vehicle_capacity: 70,
            occupancy_factor: 0.7,
            travel_time_min: 45.0,
            terminal_time_min: 6.0,
            start_hour: 7,
            end_hour: 8,
        }
    }
}

/// Inputs that passed validation. Only [`DimensioningRequest::new`] builds one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensioningRequest {
    inputs: RouteInputs,
}

impl DimensioningRequest {
    /// Validate the inputs in the order the formula chain consumes them.
    pub fn new(inputs: RouteInputs) -> Result<Self, DimensioningError> {
        let reject = |message: &str| Err(DimensioningError::new(ComputationStep::Request, message));

        if !(inputs.travel_time_min > 0.0 && inputs.travel_time_min.is_finite()) {
            return reject("travel time must be > 0");
        }
        if inputs.hourly_demand == 0 {
            return reject("hourly demand must be > 0");
        }
        if inputs.vehicle_capacity == 0 {
            return reject("vehicle capacity must be > 0");
        }
        if !(inputs.occupancy_factor > 0.0 && inputs.occupancy_factor <= 1.0) {
            return reject("occupancy factor must be in (0, 1]");
        }
        if !(inputs.terminal_time_min >= 0.0 && inputs.terminal_time_min.is_finite()) {
            return reject("terminal time must be non-negative");
        }
        if !(inputs.route_length_km > 0.0 && inputs.route_length_km.is_finite()) {
            return reject("route length must be > 0");
        }
        if inputs.start_hour >= 24 || inputs.end_hour == 0 || inputs.end_hour > 24 {
            return reject("service hours must lie between 0 and 24");
        }
        if inputs.start_hour >= inputs.end_hour {
            return reject("start hour must be before end hour");
        }

        Ok(Self { inputs })
    }

    pub fn inputs(&self) -> &RouteInputs {
        &self.inputs
    }

    /// Service window length in minutes
    pub fn service_minutes(&self) -> f64 {
        f64::from(self.inputs.end_hour - self.inputs.start_hour) * 60.0
    }
}

impl TryFrom<RouteInputs> for DimensioningRequest {
    type Error = DimensioningError;

    fn try_from(inputs: RouteInputs) -> Result<Self, Self::Error> {
        Self::new(inputs)
    }
}
