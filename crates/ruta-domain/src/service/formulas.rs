//! Closed-form dimensioning formulas
//!
//! Each function guards its own preconditions and knows nothing about the
//! others; [`super::engine::dimension`] wires them together. Guards are written
//! as `!(x > 0.0)` so that NaN fails them.

use ruta_types::{ComputationStep, DimensioningError};

/// Width of the bucket the dispatch interval is floored to, in minutes
pub const INTERVAL_BUCKET_MIN: f64 = 0.5;

/// Share of the operating fleet kept as reserve unless configured otherwise
pub const DEFAULT_RESERVE_PCT: f64 = 0.10;

/// Negative corrected terminal times closer to zero than this are rounding noise
pub const TERMINAL_TIME_EPSILON_MIN: f64 = 1e-9;

type Result<T> = std::result::Result<T, DimensioningError>;

fn fail<T>(step: ComputationStep, message: &str) -> Result<T> {
    Err(DimensioningError::new(step, message))
}

fn is_fraction(value: f64) -> bool {
    value > 0.0 && value <= 1.0
}

/// Operation speed in km/h: `length / (travel / 60)`
pub fn operation_speed(route_length_km: f64, travel_time_min: f64) -> Result<f64> {
    if !(travel_time_min > 0.0) {
        return fail(ComputationStep::OperationSpeed, "travel time must be > 0");
    }
    Ok(route_length_km / (travel_time_min / 60.0))
}

/// Dispatch interval in minutes, floored to a 0.5 min bucket.
///
/// The floor is a quantization policy: the bucketed value feeds the fleet
/// size and frequency formulas directly.
pub fn dispatch_interval(
    vehicle_capacity: u32,
    hourly_demand: u32,
    occupancy_factor: f64,
) -> Result<f64> {
    if hourly_demand == 0 {
        return fail(ComputationStep::DispatchInterval, "hourly demand must be > 0");
    }
    if vehicle_capacity == 0 {
        return fail(ComputationStep::DispatchInterval, "vehicle capacity must be > 0");
    }
    if !is_fraction(occupancy_factor) {
        return fail(ComputationStep::DispatchInterval, "occupancy factor must be in (0, 1]");
    }
    let raw = (60.0 * occupancy_factor * f64::from(vehicle_capacity)) / f64::from(hourly_demand);
    Ok((raw / INTERVAL_BUCKET_MIN).floor() * INTERVAL_BUCKET_MIN)
}

/// Round-trip cycle time: `2 * (travel + terminal)`
pub fn cycle_time(travel_time_min: f64, terminal_time_min: f64) -> Result<f64> {
    if !(travel_time_min >= 0.0) || !(terminal_time_min >= 0.0) {
        return fail(ComputationStep::CycleTime, "travel and terminal times must be non-negative");
    }
    Ok(2.0 * (travel_time_min + terminal_time_min))
}

/// Vehicles needed to hold the interval over one cycle
pub fn fleet_size(cycle_time_min: f64, interval_min: f64) -> Result<u32> {
    if !(interval_min > 0.0) {
        return fail(ComputationStep::FleetSize, "dispatch interval must be > 0");
    }
    // Saturating cast: a negative cycle yields 0, which the next step rejects.
    Ok((cycle_time_min / interval_min).ceil() as u32)
}

/// Cycle time stretched to a whole number of intervals: `N * interval`
pub fn corrected_cycle_time(fleet_size: u32, interval_min: f64) -> Result<f64> {
    if fleet_size == 0 || !(interval_min > 0.0) {
        return fail(
            ComputationStep::CorrectedCycleTime,
            "fleet size and dispatch interval must be > 0",
        );
    }
    Ok(f64::from(fleet_size) * interval_min)
}

/// Terminal dwell that absorbs the slack of the corrected cycle.
///
/// A result below zero means the corrected cycle cannot fit both travel legs
/// and is rejected.
pub fn corrected_terminal_time(corrected_cycle_min: f64, travel_time_min: f64) -> Result<f64> {
    if !(corrected_cycle_min >= 0.0) || !(travel_time_min >= 0.0) {
        return fail(ComputationStep::CorrectedTerminalTime, "times cannot be negative");
    }
    let terminal = (corrected_cycle_min - 2.0 * travel_time_min) / 2.0;
    if terminal < -TERMINAL_TIME_EPSILON_MIN {
        return fail(
            ComputationStep::CorrectedTerminalTime,
            "corrected cycle time is shorter than the two travel legs",
        );
    }
    Ok(terminal.max(0.0))
}

/// Commercial speed in km/h over the corrected cycle: `120 * length / cycle`
pub fn commercial_speed(route_length_km: f64, corrected_cycle_min: f64) -> Result<f64> {
    if !(corrected_cycle_min > 0.0) {
        return fail(ComputationStep::CommercialSpeed, "corrected cycle time must be > 0");
    }
    Ok((120.0 * route_length_km) / corrected_cycle_min)
}

/// Commercial speed per vehicle
pub fn system_efficiency(commercial_speed_kmh: f64, fleet_size: u32) -> Result<f64> {
    if fleet_size == 0 {
        return fail(ComputationStep::SystemEfficiency, "fleet size must be > 0");
    }
    Ok(commercial_speed_kmh / f64::from(fleet_size))
}

/// Vehicles passing a stop per hour
pub fn pass_frequency(interval_min: f64) -> Result<f64> {
    if !(interval_min > 0.0) {
        return fail(ComputationStep::PassFrequency, "dispatch interval must be > 0");
    }
    Ok(60.0 / interval_min)
}

/// Places offered per hour
pub fn line_capacity(frequency_vph: f64, vehicle_capacity: u32) -> Result<f64> {
    if !(frequency_vph > 0.0) || vehicle_capacity == 0 {
        return fail(
            ComputationStep::LineCapacity,
            "pass frequency and vehicle capacity must be > 0",
        );
    }
    Ok(frequency_vph * f64::from(vehicle_capacity))
}

pub fn adjusted_line_capacity(line_capacity_pph: f64, occupancy_factor: f64) -> Result<f64> {
    if !is_fraction(occupancy_factor) {
        return fail(ComputationStep::AdjustedLineCapacity, "occupancy factor must be in (0, 1]");
    }
    Ok(line_capacity_pph * occupancy_factor)
}

/// Reserve vehicles: `ceil(N * pct)`. A negative fleet cannot be expressed.
pub fn reserve_fleet(fleet_size: u32, reserve_pct: f64) -> Result<u32> {
    if !(0.0..=1.0).contains(&reserve_pct) {
        return fail(ComputationStep::ReserveFleet, "reserve percentage must be in [0, 1]");
    }
    Ok((f64::from(fleet_size) * reserve_pct).ceil() as u32)
}
