//! Dispatch timetable generation

use std::fmt;

use ruta_types::{ComputationStep, DimensioningError};
use serde::{Deserialize, Serialize};

/// One departure from the head terminal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Departure {
    /// Minutes since midnight
    pub minute_of_day: f64,
    /// `minute_of_day` rounded to the nearest second, kept inside the window
    pub second_of_day: u32,
}

impl Departure {
    /// Clock time as (hours, minutes, seconds)
    pub fn clock(&self) -> (u32, u32, u32) {
        let total = self.second_of_day;
        (total / 3600, (total % 3600) / 60, total % 60)
    }
}

impl fmt::Display for Departure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.clock();
        write!(f, "{:02}:{:02}:{:02}", h, m, s)
    }
}

/// Lazy, restartable sequence of departures `start, start + i, ...` strictly
/// before the end of the service window.
///
/// Each departure is computed from its index rather than by accumulation, so
/// [`Timetable::restart`] replays bit-identical values. A clone continues from
/// the same position as the original.
#[derive(Debug, Clone, PartialEq)]
pub struct Timetable {
    start_min: f64,
    end_min: f64,
    interval_min: f64,
    index: u64,
}

impl Timetable {
    pub fn new(
        start_hour: u32,
        end_hour: u32,
        interval_min: f64,
    ) -> Result<Self, DimensioningError> {
        if start_hour >= 24 || end_hour == 0 || end_hour > 24 || start_hour >= end_hour {
            return Err(DimensioningError::new(
                ComputationStep::Timetable,
                "service hours must lie between 0 and 24 with start before end",
            ));
        }
        if !(interval_min > 0.0) {
            return Err(DimensioningError::new(
                ComputationStep::Timetable,
                "dispatch interval must be > 0",
            ));
        }
        Ok(Self {
            start_min: f64::from(start_hour) * 60.0,
            end_min: f64::from(end_hour) * 60.0,
            interval_min,
            index: 0,
        })
    }

    pub fn interval_min(&self) -> f64 {
        self.interval_min
    }

    /// Rewind to the first departure
    pub fn restart(&mut self) {
        self.index = 0;
    }
}

impl Iterator for Timetable {
    type Item = Departure;

    fn next(&mut self) -> Option<Departure> {
        let minute = self.start_min + self.index as f64 * self.interval_min;
        if minute >= self.end_min {
            return None;
        }
        self.index += 1;

        // Rounding must not carry a departure onto the window end (24:00:00)
        let last_second = (self.end_min * 60.0) as u32 - 1;
        let second = ((minute * 60.0).round() as u32).min(last_second);
        Some(Departure {
            minute_of_day: minute,
            second_of_day: second,
        })
    }
}

/// Eager form of [`Timetable`]: the departures as HH:MM:SS strings.
pub fn generate_timetable(
    start_hour: u32,
    end_hour: u32,
    interval_min: f64,
) -> Result<Vec<String>, DimensioningError> {
    Ok(Timetable::new(start_hour, end_hour, interval_min)?
        .map(|departure| departure.to_string())
        .collect())
}
