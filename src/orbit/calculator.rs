//! Closed-form orbit calculator.
//!
//! Maps (altitude, inclination, eccentricity) to the derived metrics shown on
//! the dashboard. Period and velocity use the circular-orbit approximation
//! for every eccentricity; eccentricity only affects apogee and perigee.
//!
//! # References
//!
//! [6] Bate, Mueller, White, "Fundamentals of Astrodynamics," 1971.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use uom::si::f64::{Length, Time, Velocity};

use crate::error::{OrbitError, OrbitResult};
use crate::orbit::units::{
    deg_to_rad, length_km, time_min, velocity_km_s, EARTH_MU, EARTH_RADIUS_KM, MINUTES_PER_DAY,
};

/// User-supplied orbital parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitParameters {
    /// Altitude above the mean Earth radius (km).
    pub altitude_km: f64,
    /// Orbital inclination (degrees).
    pub inclination_deg: f64,
    /// Eccentricity, nominally in [0, 1).
    pub eccentricity: f64,
}

impl OrbitParameters {
    /// Create a parameter set.
    #[must_use]
    pub const fn new(altitude_km: f64, inclination_deg: f64, eccentricity: f64) -> Self {
        Self {
            altitude_km,
            inclination_deg,
            eccentricity,
        }
    }

    /// Semi-major axis approximated as Earth radius plus altitude (km).
    #[must_use]
    pub fn semi_major_axis_km(&self) -> f64 {
        EARTH_RADIUS_KM + self.altitude_km
    }

    /// Reject non-finite fields, naming the first offender.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::InvalidInput`] if any field is NaN or infinite.
    pub fn ensure_finite(&self) -> OrbitResult<()> {
        for (field, value) in [
            ("altitude_km", self.altitude_km),
            ("inclination_deg", self.inclination_deg),
            ("eccentricity", self.eccentricity),
        ] {
            if !value.is_finite() {
                return Err(OrbitError::invalid_input(field, value));
            }
        }
        Ok(())
    }

    /// Compute the derived metrics for these parameters.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::InvalidInput`] if any field is not finite.
    pub fn metrics(&self) -> OrbitResult<OrbitMetrics> {
        compute_metrics(self.altitude_km, self.inclination_deg, self.eccentricity)
    }
}

impl Default for OrbitParameters {
    fn default() -> Self {
        // Same starting point as the low-Earth preset.
        Self::new(509.0, 97.5, 0.001)
    }
}

/// Derived orbital metrics, always recomputed wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitMetrics {
    /// Semi-major axis used for every other quantity (km).
    pub semi_major_axis_km: f64,
    /// Orbital period (minutes).
    pub period_min: f64,
    /// Circular orbital speed (km/s).
    pub velocity_km_s: f64,
    /// Apogee altitude above the surface (km).
    pub apogee_km: f64,
    /// Perigee altitude above the surface (km).
    pub perigee_km: f64,
    /// Signed longitude drift per orbit (degrees). Displayed as magnitude.
    pub ground_track_shift_deg: f64,
}

impl OrbitMetrics {
    /// Orbital period as a typed time.
    #[must_use]
    pub fn period(&self) -> Time {
        time_min(self.period_min)
    }

    /// Orbital speed as a typed velocity.
    #[must_use]
    pub fn velocity(&self) -> Velocity {
        velocity_km_s(self.velocity_km_s)
    }

    /// Apogee altitude as a typed length.
    #[must_use]
    pub fn apogee(&self) -> Length {
        length_km(self.apogee_km)
    }

    /// Perigee altitude as a typed length.
    #[must_use]
    pub fn perigee(&self) -> Length {
        length_km(self.perigee_km)
    }

    /// Semi-major axis as a typed length.
    #[must_use]
    pub fn semi_major_axis(&self) -> Length {
        length_km(self.semi_major_axis_km)
    }

    /// Magnitude of the ground-track shift (degrees per orbit).
    #[must_use]
    pub fn ground_track_shift_abs_deg(&self) -> f64 {
        self.ground_track_shift_deg.abs()
    }
}

/// Compute orbital metrics from raw parameters.
///
/// Only finiteness is checked; negative altitude and eccentricity outside
/// [0, 1) are passed through the formulas unchanged.
///
/// # Errors
///
/// Returns [`OrbitError::InvalidInput`] if any input is NaN or infinite.
///
/// # Example
///
/// ```rust
/// use orbitscope::orbit::calculator::compute_metrics;
///
/// let m = compute_metrics(0.0, 0.0, 0.0).unwrap();
/// assert!((m.period_min - 84.35).abs() < 0.01);
/// ```
pub fn compute_metrics(
    altitude_km: f64,
    inclination_deg: f64,
    eccentricity: f64,
) -> OrbitResult<OrbitMetrics> {
    let params = OrbitParameters::new(altitude_km, inclination_deg, eccentricity);
    if let Err(err) = params.ensure_finite() {
        tracing::warn!(%err, "rejected orbital parameters");
        return Err(err);
    }

    let a = params.semi_major_axis_km();
    let period_min = 2.0 * PI * (a.powi(3) / EARTH_MU).sqrt() / 60.0;
    let velocity_km_s = (EARTH_MU / a).sqrt();
    let apogee_km = a * (1.0 + eccentricity) - EARTH_RADIUS_KM;
    let perigee_km = a * (1.0 - eccentricity) - EARTH_RADIUS_KM;
    let ground_track_shift_deg =
        360.0 * (period_min / MINUTES_PER_DAY) * deg_to_rad(inclination_deg).cos();

    tracing::debug!(
        altitude_km,
        inclination_deg,
        eccentricity,
        period_min,
        velocity_km_s,
        "computed orbit metrics"
    );

    Ok(OrbitMetrics {
        semi_major_axis_km: a,
        period_min,
        velocity_km_s,
        apogee_km,
        perigee_km,
        ground_track_shift_deg,
    })
}
