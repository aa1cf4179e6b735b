//! Display formatting for metrics and tick output.
//!
//! Fixed decimal places per field, matching the dashboard readouts.

use serde::Serialize;
use std::fmt;

use crate::orbit::calculator::OrbitMetrics;
use crate::orbit::driver::TickOutput;

/// Placeholder shown when a value could not be computed.
pub const NOT_A_NUMBER: &str = "NaN";

fn fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        NOT_A_NUMBER.to_string()
    } else {
        format!("{value:.decimals$}")
    }
}

/// Formatted orbit metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsReadout {
    /// Period in minutes, 1 decimal.
    pub period: String,
    /// Velocity in km/s, 2 decimals.
    pub velocity: String,
    /// Apogee in km, 0 decimals.
    pub apogee: String,
    /// Perigee in km, 0 decimals.
    pub perigee: String,
    /// Ground-track shift magnitude in degrees, 1 decimal.
    pub ground_track: String,
}

impl MetricsReadout {
    /// Format a set of metrics.
    #[must_use]
    pub fn from_metrics(metrics: &OrbitMetrics) -> Self {
        Self {
            period: fixed(metrics.period_min, 1),
            velocity: fixed(metrics.velocity_km_s, 2),
            apogee: fixed(metrics.apogee_km, 0),
            perigee: fixed(metrics.perigee_km, 0),
            ground_track: fixed(metrics.ground_track_shift_abs_deg(), 1),
        }
    }

    /// Readout shown when the parameters were rejected.
    #[must_use]
    pub fn invalid() -> Self {
        Self {
            period: NOT_A_NUMBER.to_string(),
            velocity: NOT_A_NUMBER.to_string(),
            apogee: NOT_A_NUMBER.to_string(),
            perigee: NOT_A_NUMBER.to_string(),
            ground_track: NOT_A_NUMBER.to_string(),
        }
    }
}

impl fmt::Display for MetricsReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Orbital period:     {} min", self.period)?;
        writeln!(f, "Orbital velocity:   {} km/s", self.velocity)?;
        writeln!(f, "Apogee:             {} km", self.apogee)?;
        writeln!(f, "Perigee:            {} km", self.perigee)?;
        write!(f, "Ground track shift: {}°/orbit", self.ground_track)
    }
}

/// Formatted live position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionReadout {
    /// Current (decorative) altitude in km, 0 decimals.
    pub altitude: String,
    /// Latitude in degrees, 2 decimals.
    pub latitude: String,
    /// Longitude in degrees, 2 decimals.
    pub longitude: String,
}

impl PositionReadout {
    /// Format one tick's output.
    #[must_use]
    pub fn from_tick(output: &TickOutput) -> Self {
        Self {
            altitude: fixed(output.pseudo_altitude_km, 0),
            latitude: fixed(output.latitude_deg, 2),
            longitude: fixed(output.longitude_deg, 2),
        }
    }
}

impl fmt::Display for PositionReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "alt {:>7} km  lat {:>7}°  lon {:>7}°",
            self.altitude, self.latitude, self.longitude
        )
    }
}
