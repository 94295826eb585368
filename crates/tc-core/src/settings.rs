//! Network-wide routing configuration.
//!
//! Both constants apply to every bus: the wait time is charged once per
//! boarding, and the velocity converts a road distance into ride minutes.
//! Typically read from the `routing_settings` object of a request document.

use crate::{TcError, TcResult};

/// Wait time and bus velocity used to weight the routing graph.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingSettings {
    /// Expected wait at a stop before boarding, in minutes.
    pub bus_wait_time: f64,

    /// Bus speed in km/h.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    pub fn new(bus_wait_time: f64, bus_velocity: f64) -> Self {
        Self { bus_wait_time, bus_velocity }
    }

    /// Reject non-positive or non-finite values.
    pub fn validate(&self) -> TcResult<()> {
        if !(self.bus_wait_time.is_finite() && self.bus_wait_time > 0.0) {
            return Err(TcError::Config(format!(
                "bus_wait_time must be a positive number of minutes, got {}",
                self.bus_wait_time
            )));
        }
        if !(self.bus_velocity.is_finite() && self.bus_velocity > 0.0) {
            return Err(TcError::Config(format!(
                "bus_velocity must be a positive number of km/h, got {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }

    /// Distance covered in one minute of riding.
    #[inline]
    pub fn meters_per_minute(&self) -> f64 {
        self.bus_velocity * 1000.0 / 60.0
    }

    /// Minutes needed to ride `meters` of road.
    #[inline]
    pub fn ride_minutes(&self, meters: f64) -> f64 {
        meters / self.meters_per_minute()
    }
}
