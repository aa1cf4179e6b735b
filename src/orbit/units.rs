//! Earth constants and type-safe unit conversions.
//!
//! The calculator works in raw kilometre/second/minute `f64` values to keep
//! the closed-form formulas readable. Callers that want dimensional safety
//! go through the `uom` helpers here.

use uom::si::f64::{Angle, Length, Time, Velocity};
use uom::si::angle::{degree, radian};
use uom::si::length::kilometer;
use uom::si::time::minute;
use uom::si::velocity::kilometer_per_second;

/// Mean Earth radius (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth gravitational parameter μ (km³/s²).
pub const EARTH_MU: f64 = 398_600.441_8;

/// Earth rotation rate (rad/s).
pub const EARTH_ROTATION_RATE: f64 = 7.292_115_9e-5;

/// Minutes in a solar day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Wrap a kilometre value as a typed length.
#[must_use]
pub fn length_km(km: f64) -> Length {
    Length::new::<kilometer>(km)
}

/// Wrap a km/s value as a typed velocity.
#[must_use]
pub fn velocity_km_s(km_s: f64) -> Velocity {
    Velocity::new::<kilometer_per_second>(km_s)
}

/// Wrap a minute value as a typed time.
#[must_use]
pub fn time_min(min: f64) -> Time {
    Time::new::<minute>(min)
}

/// Wrap a degree value as a typed angle.
#[must_use]
pub fn angle_deg(deg: f64) -> Angle {
    Angle::new::<degree>(deg)
}

/// Convert degrees to radians through `uom`.
#[must_use]
pub fn deg_to_rad(deg: f64) -> f64 {
    angle_deg(deg).get::<radian>()
}

/// Convert radians to degrees through `uom`.
#[must_use]
pub fn rad_to_deg(rad: f64) -> f64 {
    Angle::new::<radian>(rad).get::<degree>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use uom::si::length::meter;
    use uom::si::time::second;
    use uom::si::velocity::meter_per_second;

    #[test]
    fn test_earth_constants() {
        assert!((EARTH_RADIUS_KM - 6371.0).abs() < f64::EPSILON);
        assert!((EARTH_MU - 398_600.441_8).abs() < 1e-9);
        assert!((EARTH_ROTATION_RATE - 7.292_115_9e-5).abs() < 1e-15);
    }

    #[test]
    fn test_length_km_to_meters() {
        let r = length_km(EARTH_RADIUS_KM);
        assert!((r.get::<meter>() - 6_371_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_conversion() {
        let v = velocity_km_s(7.5);
        assert!((v.get::<meter_per_second>() - 7500.0).abs() < 1e-9);
    }

    #[test]
    fn test_time_conversion() {
        let t = time_min(90.0);
        assert!((t.get::<second>() - 5400.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_conversion() {
        assert!((deg_to_rad(180.0) - PI).abs() < 1e-12);
        assert!((rad_to_deg(PI / 2.0) - 90.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Degree/radian conversion is consistent in both directions.
        #[test]
        fn prop_angle_roundtrip(deg in -720.0f64..720.0) {
            let back = rad_to_deg(deg_to_rad(deg));
            prop_assert!((back - deg).abs() < 1e-9);
        }
    }
}
