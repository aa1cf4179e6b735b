//! Visualization geometry mapper.
//!
//! Maps altitude and eccentricity onto a bounded 2D ellipse in display
//! units. The eccentricity squash is cosmetic, not physically derived.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Radius at altitude 0 (display units).
pub const DEFAULT_MIN_RADIUS: f64 = 50.0;

/// Radius at and above the clamp altitude (display units).
pub const DEFAULT_MAX_RADIUS: f64 = 180.0;

/// Altitude above which the radius stops growing (km).
pub const DEFAULT_CLAMP_ALTITUDE_KM: f64 = 10_000.0;

/// Display-space layout of the orbit canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct GeometryConfig {
    /// Radius drawn for altitude 0.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_min_radius")]
    pub min_radius: f64,
    /// Radius drawn for altitudes at or above `clamp_altitude_km`.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_max_radius")]
    pub max_radius: f64,
    /// Altitude where the linear ramp ends (km).
    #[validate(range(min = 1.0))]
    #[serde(default = "default_clamp_altitude")]
    pub clamp_altitude_km: f64,
    /// Canvas center, x (display units).
    #[serde(default = "default_center")]
    pub center_x: f64,
    /// Canvas center, y (display units).
    #[serde(default = "default_center")]
    pub center_y: f64,
    /// Side length of the satellite marker glyph.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_marker_size")]
    pub marker_size: f64,
}

const fn default_min_radius() -> f64 {
    DEFAULT_MIN_RADIUS
}

const fn default_max_radius() -> f64 {
    DEFAULT_MAX_RADIUS
}

const fn default_clamp_altitude() -> f64 {
    DEFAULT_CLAMP_ALTITUDE_KM
}

const fn default_center() -> f64 {
    200.0
}

const fn default_marker_size() -> f64 {
    8.0
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            min_radius: default_min_radius(),
            max_radius: default_max_radius(),
            clamp_altitude_km: default_clamp_altitude(),
            center_x: default_center(),
            center_y: default_center(),
            marker_size: default_marker_size(),
        }
    }
}

impl GeometryConfig {
    /// Half the marker size, subtracted so the glyph is centered on the orbit.
    #[must_use]
    pub fn half_marker(&self) -> f64 {
        self.marker_size / 2.0
    }

    /// Visual radius for an altitude under this layout.
    #[must_use]
    pub fn radius_for(&self, altitude_km: f64) -> f64 {
        if altitude_km > self.clamp_altitude_km {
            self.max_radius
        } else {
            self.min_radius
                + (altitude_km / self.clamp_altitude_km) * (self.max_radius - self.min_radius)
        }
    }

    /// Ellipse for an altitude and eccentricity under this layout.
    #[must_use]
    pub fn ellipse_for(&self, altitude_km: f64, eccentricity: f64) -> VisualEllipse {
        let radius = self.radius_for(altitude_km);
        VisualEllipse {
            width: radius * 2.0 * (1.0 + eccentricity * 0.5),
            height: radius * 2.0 * (1.0 - eccentricity * 0.5),
        }
    }
}

/// Bounding box of the drawn orbit path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualEllipse {
    /// Full horizontal extent.
    pub width: f64,
    /// Full vertical extent.
    pub height: f64,
}

impl VisualEllipse {
    /// Radius the animation uses for the marker path: half the drawn width.
    #[must_use]
    pub fn track_radius(&self) -> f64 {
        self.width / 2.0
    }
}

/// Visual radius with the default layout.
#[must_use]
pub fn visual_radius(altitude_km: f64) -> f64 {
    GeometryConfig::default().radius_for(altitude_km)
}

/// Map altitude and eccentricity to an ellipse with the default layout.
#[must_use]
pub fn map_to_visual_radius(altitude_km: f64, eccentricity: f64) -> VisualEllipse {
    GeometryConfig::default().ellipse_for(altitude_km, eccentricity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_at_zero_altitude() {
        assert!((visual_radius(0.0) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_radius_at_clamp_altitude() {
        assert!((visual_radius(10_000.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_radius_midpoint() {
        assert!((visual_radius(5_000.0) - 115.0).abs() < 1e-9);
    }

    #[test]
    fn test_radius_clamped_above() {
        assert!((visual_radius(35_786.0) - 180.0).abs() < f64::EPSILON);
        assert!((visual_radius(384_400.0) - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_circular_ellipse() {
        let e = map_to_visual_radius(0.0, 0.0);
        assert!((e.width - 100.0).abs() < f64::EPSILON);
        assert!((e.height - 100.0).abs() < f64::EPSILON);
        assert!((e.track_radius() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_eccentric_squash() {
        let e = map_to_visual_radius(20_000.0, 0.8);
        assert!((e.width - 360.0 * 1.4).abs() < 1e-9);
        assert!((e.height - 360.0 * 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_custom_layout() {
        let cfg = GeometryConfig {
            min_radius: 10.0,
            max_radius: 20.0,
            clamp_altitude_km: 1_000.0,
            ..GeometryConfig::default()
        };
        assert!((cfg.radius_for(500.0) - 15.0).abs() < 1e-9);
        assert!((cfg.radius_for(2_000.0) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_half_marker() {
        assert!((GeometryConfig::default().half_marker() - 4.0).abs() < f64::EPSILON);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Radius never decreases with altitude inside the ramp.
        #[test]
        fn prop_radius_monotonic(
            low in 0.0f64..10_000.0,
            high in 0.0f64..10_000.0,
        ) {
            let (low, high) = if low <= high { (low, high) } else { (high, low) };
            prop_assert!(visual_radius(low) <= visual_radius(high));
        }

        /// Radius is constant above the clamp altitude.
        #[test]
        fn prop_radius_constant_above_clamp(altitude in 10_000.001f64..1e7) {
            prop_assert!((visual_radius(altitude) - DEFAULT_MAX_RADIUS).abs() < f64::EPSILON);
        }

        /// Radius stays within [min, max] for the ramp.
        #[test]
        fn prop_radius_bounded(altitude in 0.0f64..1e6) {
            let r = visual_radius(altitude);
            prop_assert!((DEFAULT_MIN_RADIUS..=DEFAULT_MAX_RADIUS).contains(&r));
        }
    }
}
