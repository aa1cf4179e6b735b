//! Orbit calculator and animation core.
//!
//! - [`calculator`]: closed-form period, velocity, apsides, ground-track shift
//! - [`geometry`]: altitude/eccentricity to a bounded display ellipse
//! - [`driver`]: pure tick transition and the timer-driven animation driver
//! - [`ticker`]: the single cancellable repeating task behind the driver
//! - [`presets`]: fixed mission catalog
//! - [`session`]: controller tying inputs, metrics and animation together
//! - [`format`]: fixed-precision readouts
//!
//! # Example
//!
//! ```rust
//! use orbitscope::orbit::prelude::*;
//!
//! let params = load_preset("insat").expect("catalog entry");
//! let metrics = params.metrics().expect("finite parameters");
//! assert!((metrics.period_min - 1436.0).abs() < 0.5);
//!
//! // Drive the animation headless, one tick at a time.
//! let mut driver = AnimationDriver::default();
//! driver.prime(TrackSnapshot::capture(&params, &GeometryConfig::default()));
//! let out = driver.step().expect("snapshot primed");
//! assert!(out.longitude_deg > -180.0 && out.longitude_deg <= 180.0);
//! ```

pub mod units;
pub mod calculator;
pub mod geometry;
pub mod ticker;
pub mod driver;
pub mod presets;
pub mod format;
pub mod session;

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::units::{
        EARTH_RADIUS_KM, EARTH_MU, EARTH_ROTATION_RATE, MINUTES_PER_DAY,
    };
    pub use super::calculator::{compute_metrics, OrbitMetrics, OrbitParameters};
    pub use super::geometry::{
        map_to_visual_radius, visual_radius, GeometryConfig, VisualEllipse,
    };
    pub use super::driver::{
        tick, AnimationDriver, AnimationState, MotionConfig, PhaseWrap,
        TickOutput, TrackSnapshot,
    };
    pub use super::presets::{load_preset, presets, MissionPreset, OrbitClass};
    pub use super::format::{MetricsReadout, PositionReadout};
    pub use super::session::{Selection, TrackingSession};
}
