//! Chart series built from a computed result
//!
//! These are consumers of already validated outputs: they read the request
//! and result as they are and never re-derive or re-check them.

use serde::{Deserialize, Serialize};

use crate::model::{DimensioningRequest, DimensioningResult};

/// Upper bound of the supply chart, in minutes
pub const SUPPLY_WINDOW_MIN: f64 = 60.0;

/// Slack so a dispatch exactly at the end of the hour is still plotted
const SUPPLY_WINDOW_SLACK_MIN: f64 = 0.1;

/// Straight-line movement between two points of the route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start_min: f64,
    pub end_min: f64,
    pub from_km: f64,
    pub to_km: f64,
}

impl Segment {
    /// Position at `minute`, if the segment covers it
    pub fn position_at(&self, minute: f64) -> Option<f64> {
        if minute < self.start_min || minute > self.end_min {
            return None;
        }
        let span = self.end_min - self.start_min;
        if span <= 0.0 {
            return Some(self.to_km);
        }
        let progress = (minute - self.start_min) / span;
        Some(self.from_km + (self.to_km - self.from_km) * progress)
    }

    /// `points` evenly spaced (minute, km) pairs including both ends
    pub fn sample(&self, points: usize) -> Vec<(f64, f64)> {
        match points {
            0 => Vec::new(),
            1 => vec![(self.start_min, self.from_km)],
            n => (0..n)
                .map(|i| {
                    let t = i as f64 / (n - 1) as f64;
                    (
                        self.start_min + (self.end_min - self.start_min) * t,
                        self.from_km + (self.to_km - self.from_km) * t,
                    )
                })
                .collect(),
        }
    }
}

/// Outbound leg, terminal dwell and return leg of one vehicle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleTrip {
    /// 1-based vehicle number
    pub vehicle: u32,
    pub departure_min: f64,
    pub outbound: Segment,
    pub inbound: Segment,
}

impl VehicleTrip {
    pub fn position_at(&self, minute: f64) -> Option<f64> {
        if let Some(km) = self.outbound.position_at(minute) {
            return Some(km);
        }
        if minute > self.outbound.end_min && minute < self.inbound.start_min {
            return Some(self.outbound.to_km);
        }
        self.inbound.position_at(minute)
    }
}

/// Space-time diagram of one cycle: one trip per departure within it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryChart {
    pub route_length_km: f64,
    pub cycle_time_min: f64,
    pub interval_min: f64,
    pub trips: Vec<VehicleTrip>,
}

impl TrajectoryChart {
    pub fn build(request: &DimensioningRequest, result: &DimensioningResult) -> Self {
        let inputs = request.inputs();
        let length = inputs.route_length_km;
        let travel = inputs.travel_time_min;
        let interval = result.dispatch_interval_min;

        // corrected cycle = N * interval, so departures below it are exactly 0..N
        let trips = (0..result.fleet_size)
            .map(|i| {
                let departure = f64::from(i) * interval;
                let arrival = departure + travel;
                let return_start = arrival + result.corrected_terminal_time_min;
                VehicleTrip {
                    vehicle: i + 1,
                    departure_min: departure,
                    outbound: Segment {
                        start_min: departure,
                        end_min: arrival,
                        from_km: 0.0,
                        to_km: length,
                    },
                    inbound: Segment {
                        start_min: return_start,
                        end_min: return_start + travel,
                        from_km: length,
                        to_km: 0.0,
                    },
                }
            })
            .collect();

        Self {
            route_length_km: length,
            cycle_time_min: result.corrected_cycle_time_min,
            interval_min: interval,
            trips,
        }
    }

    /// Vehicles on the road (not dwelling, not yet departed) at `minute`
    pub fn vehicles_moving_at(&self, minute: f64) -> usize {
        self.trips
            .iter()
            .filter(|trip| {
                trip.outbound.position_at(minute).is_some()
                    || trip.inbound.position_at(minute).is_some()
            })
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupplyPoint {
    pub minute: f64,
    /// 1-based dispatch number
    pub vehicle: u32,
    pub cumulative_places: f64,
}

/// Places offered over one hour of regular dispatches against hourly demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyChart {
    pub useful_capacity: f64,
    pub hourly_demand: u32,
    pub points: Vec<SupplyPoint>,
}

impl SupplyChart {
    pub fn build(request: &DimensioningRequest, result: &DimensioningResult) -> Self {
        let inputs = request.inputs();
        let useful_capacity = f64::from(inputs.vehicle_capacity) * inputs.occupancy_factor;
        let interval = result.dispatch_interval_min;

        let points = (0u32..)
            .map(|i| (i, f64::from(i) * interval))
            .take_while(|&(_, minute)| minute < SUPPLY_WINDOW_MIN + SUPPLY_WINDOW_SLACK_MIN)
            .map(|(i, minute)| SupplyPoint {
                minute,
                vehicle: i + 1,
                cumulative_places: f64::from(i + 1) * useful_capacity,
            })
            .collect();

        Self {
            useful_capacity,
            hourly_demand: inputs.hourly_demand,
            points,
        }
    }

    pub fn total_places(&self) -> f64 {
        self.points.last().map(|p| p.cumulative_places).unwrap_or(0.0)
    }

    pub fn covers_demand(&self) -> bool {
        self.total_places() >= f64::from(self.hourly_demand)
    }

    /// First dispatch at which cumulative supply reaches the hourly demand
    pub fn first_minute_covering_demand(&self) -> Option<f64> {
        let demand = f64::from(self.hourly_demand);
        self.points
            .iter()
            .find(|p| p.cumulative_places >= demand)
            .map(|p| p.minute)
    }
}
