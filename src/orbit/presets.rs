//! Mission preset catalog.
//!
//! Six canonical orbits covering the regimes the dashboard is meant to teach:
//! low-Earth, Sun-synchronous, geostationary, inclined low orbit, highly
//! eccentric transfer, and a lunar-distance case.

use serde::{Deserialize, Serialize};

use crate::orbit::calculator::OrbitParameters;

/// Orbit regime a preset illustrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrbitClass {
    /// Low-Earth orbit.
    LowEarth,
    /// Near-polar retrograde orbit that precesses with the Sun.
    SunSynchronous,
    /// Equatorial orbit with a one-day period.
    Geostationary,
    /// Low orbit with a small inclination.
    InclinedLow,
    /// Strongly elliptical orbit.
    HighlyEccentric,
    /// Orbit at lunar distance.
    Lunar,
}

impl OrbitClass {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LowEarth => "Low Earth",
            Self::SunSynchronous => "Sun-synchronous",
            Self::Geostationary => "Geostationary",
            Self::InclinedLow => "Inclined low orbit",
            Self::HighlyEccentric => "Highly eccentric",
            Self::Lunar => "Lunar distance",
        }
    }
}

/// A named entry in the preset catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MissionPreset {
    /// Lookup key.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Orbit regime.
    pub class: OrbitClass,
    /// Canonical parameters.
    pub params: OrbitParameters,
}

/// The fixed catalog, in display order.
pub const PRESETS: [MissionPreset; 6] = [
    MissionPreset {
        id: "cartosat",
        name: "Cartosat",
        class: OrbitClass::LowEarth,
        params: OrbitParameters::new(509.0, 97.5, 0.001),
    },
    MissionPreset {
        id: "resourcesat",
        name: "Resourcesat",
        class: OrbitClass::SunSynchronous,
        params: OrbitParameters::new(817.0, 98.7, 0.001),
    },
    MissionPreset {
        id: "insat",
        name: "INSAT",
        class: OrbitClass::Geostationary,
        params: OrbitParameters::new(35_786.0, 0.1, 0.0003),
    },
    MissionPreset {
        id: "astrosat",
        name: "AstroSat",
        class: OrbitClass::InclinedLow,
        params: OrbitParameters::new(650.0, 6.0, 0.0017),
    },
    MissionPreset {
        id: "mangalyaan",
        name: "Mangalyaan",
        class: OrbitClass::HighlyEccentric,
        params: OrbitParameters::new(500.0, 19.2, 0.8),
    },
    MissionPreset {
        id: "chandrayaan",
        name: "Chandrayaan",
        class: OrbitClass::Lunar,
        params: OrbitParameters::new(384_400.0, 21.0, 0.055),
    },
];

/// Look up a preset's parameters by mission id.
///
/// Unknown ids (including `"custom"`) return `None`; callers treat that as a
/// no-op.
#[must_use]
pub fn load_preset(mission_id: &str) -> Option<OrbitParameters> {
    find_preset(mission_id).map(|preset| preset.params)
}

/// Look up the full catalog entry by mission id.
#[must_use]
pub fn find_preset(mission_id: &str) -> Option<&'static MissionPreset> {
    PRESETS.iter().find(|preset| preset.id == mission_id)
}

/// Iterate the catalog in display order.
pub fn presets() -> impl Iterator<Item = &'static MissionPreset> {
    PRESETS.iter()
}
