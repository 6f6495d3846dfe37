//! The dimensioning pipeline

use ruta_types::DimensioningError;

use super::formulas::{
    adjusted_line_capacity, commercial_speed, corrected_cycle_time, corrected_terminal_time,
    cycle_time, dispatch_interval, fleet_size, line_capacity, operation_speed, pass_frequency,
    reserve_fleet, system_efficiency, DEFAULT_RESERVE_PCT,
};
use super::timetable::generate_timetable;
use crate::model::{DimensioningRequest, DimensioningResult};

/// Run the formula chain for one period.
///
/// Stops at the first violated precondition; nothing is returned for the
/// steps that did succeed.
pub fn dimension(
    request: &DimensioningRequest,
    reserve_pct: f64,
) -> Result<DimensioningResult, DimensioningError> {
    let inputs = request.inputs();

    let operation_speed_kmh = operation_speed(inputs.route_length_km, inputs.travel_time_min)?;
    let interval = dispatch_interval(
        inputs.vehicle_capacity,
        inputs.hourly_demand,
        inputs.occupancy_factor,
    )?;
    let cycle = cycle_time(inputs.travel_time_min, inputs.terminal_time_min)?;
    let fleet = fleet_size(cycle, interval)?;
    let corrected_cycle = corrected_cycle_time(fleet, interval)?;
    let corrected_terminal = corrected_terminal_time(corrected_cycle, inputs.travel_time_min)?;
    let commercial_speed_kmh = commercial_speed(inputs.route_length_km, corrected_cycle)?;
    let efficiency = system_efficiency(commercial_speed_kmh, fleet)?;
    let frequency = pass_frequency(interval)?;
    let capacity = line_capacity(frequency, inputs.vehicle_capacity)?;
    let adjusted_capacity = adjusted_line_capacity(capacity, inputs.occupancy_factor)?;
    let reserve = reserve_fleet(fleet, reserve_pct)?;
    let timetable = generate_timetable(inputs.start_hour, inputs.end_hour, interval)?;

    Ok(DimensioningResult {
        operation_speed_kmh,
        dispatch_interval_min: interval,
        cycle_time_min: cycle,
        fleet_size: fleet,
        corrected_cycle_time_min: corrected_cycle,
        corrected_terminal_time_min: corrected_terminal,
        commercial_speed_kmh,
        system_efficiency: efficiency,
        pass_frequency_vph: frequency,
        line_capacity_pph: capacity,
        adjusted_line_capacity_pph: adjusted_capacity,
        reserve_fleet: reserve,
        timetable,
    })
}

/// [`dimension`] with the standard 10 % reserve
pub fn dimension_default(
    request: &DimensioningRequest,
) -> Result<DimensioningResult, DimensioningError> {
    dimension(request, DEFAULT_RESERVE_PCT)
}
