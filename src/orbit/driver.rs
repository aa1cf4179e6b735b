//! Animation driver.
//!
//! The per-tick update is a pure function of ([`AnimationState`],
//! [`TrackSnapshot`], [`MotionConfig`]). [`AnimationDriver`] owns the state
//! and at most one [`RepeatingTask`]; every timer period it applies exactly
//! one tick.
//!
//! Ticks are counted, not timed: elapsed ticks stand in for seconds in the
//! Earth-rotation term, so the ground track is a teaching aid, not a
//! propagation.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::time::Duration;
use validator::Validate;

use crate::error::OrbitResult;
use crate::orbit::calculator::OrbitParameters;
use crate::orbit::geometry::GeometryConfig;
use crate::orbit::ticker::{RepeatingTask, TaskCounter};
use crate::orbit::units::{deg_to_rad, rad_to_deg, EARTH_RADIUS_KM, EARTH_ROTATION_RATE};

/// What happens when the phase angle passes a full turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseWrap {
    /// Snap to exactly zero, discarding the overshoot.
    #[default]
    Reset,
    /// Keep the overshoot, as a true modulo would.
    Remainder,
}

/// Cadence and per-tick motion of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct MotionConfig {
    /// Timer period (ms).
    #[validate(range(min = 1, max = 60_000))]
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Phase advance per tick (rad).
    #[validate(range(min = 0.000_001, max = 3.2))]
    #[serde(default = "default_angle_step")]
    pub angle_step_rad: f64,
    /// Phase wraparound behavior.
    #[serde(default)]
    pub phase_wrap: PhaseWrap,
    /// Amplitude of the decorative altitude oscillation (km).
    #[serde(default = "default_wobble_amplitude")]
    pub wobble_amplitude_km: f64,
    /// Oscillations per orbit.
    #[serde(default = "default_wobble_frequency")]
    pub wobble_frequency: f64,
}

const fn default_tick_interval_ms() -> u64 {
    50
}

const fn default_angle_step() -> f64 {
    0.02
}

const fn default_wobble_amplitude() -> f64 {
    50.0
}

const fn default_wobble_frequency() -> f64 {
    3.0
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            angle_step_rad: default_angle_step(),
            phase_wrap: PhaseWrap::default(),
            wobble_amplitude_km: default_wobble_amplitude(),
            wobble_frequency: default_wobble_frequency(),
        }
    }
}

impl MotionConfig {
    /// Timer period as a duration.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Mutable animation state, owned by the driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    /// Position along the drawn orbit (rad), in [0, 2π].
    pub phase_angle_rad: f64,
    /// Ticks applied since the last reset.
    pub elapsed_ticks: u64,
    /// Whether a repeating task is driving the state.
    pub running: bool,
}

/// Geometry captured when tracking starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackSnapshot {
    /// Baseline altitude (km).
    pub altitude_km: f64,
    /// Inclination used for the ground track (degrees).
    pub inclination_deg: f64,
    /// Radius of the marker path (display units).
    pub radius: f64,
    /// Canvas center, x.
    pub center_x: f64,
    /// Canvas center, y.
    pub center_y: f64,
    /// Offset that centers the marker glyph on the path.
    pub half_marker: f64,
}

impl TrackSnapshot {
    /// Capture the snapshot for a parameter set under a canvas layout.
    ///
    /// The path radius is half the drawn ellipse width, so eccentricity
    /// widens the marker path the same way it widens the drawn orbit.
    #[must_use]
    pub fn capture(params: &OrbitParameters, geometry: &GeometryConfig) -> Self {
        let ellipse = geometry.ellipse_for(params.altitude_km, params.eccentricity);
        Self {
            altitude_km: params.altitude_km,
            inclination_deg: params.inclination_deg,
            radius: ellipse.track_radius(),
            center_x: geometry.center_x,
            center_y: geometry.center_y,
            half_marker: geometry.half_marker(),
        }
    }
}

/// Everything one tick reports for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickOutput {
    /// Marker x (display units, top-left of the glyph).
    pub x: f64,
    /// Marker y (display units, top-left of the glyph).
    pub y: f64,
    /// Decorative oscillating altitude (km).
    pub pseudo_altitude_km: f64,
    /// Latitude estimate (degrees).
    pub latitude_deg: f64,
    /// Longitude estimate (degrees), in (−180, 180].
    pub longitude_deg: f64,
}

/// Normalize a longitude into (−180, 180].
#[must_use]
pub fn normalize_longitude(deg: f64) -> f64 {
    let wrapped = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Latitude and longitude (degrees) under an inclination-only rotation.
///
/// No right ascension of the ascending node; Earth rotation is a linear
/// subtraction of `EARTH_ROTATION_RATE × elapsed_ticks`.
#[must_use]
pub fn ground_position(
    altitude_km: f64,
    inclination_deg: f64,
    phase_angle_rad: f64,
    elapsed_ticks: u64,
) -> (f64, f64) {
    let inclination = deg_to_rad(inclination_deg);
    let r = EARTH_RADIUS_KM + altitude_km;

    let x_orb = r * phase_angle_rad.cos();
    let y_orb = r * phase_angle_rad.sin();

    let x_eci = x_orb;
    let y_eci = y_orb * inclination.cos();
    let z_eci = y_orb * inclination.sin();

    let lon = y_eci.atan2(x_eci) - EARTH_ROTATION_RATE * elapsed_ticks as f64;
    let lat = z_eci.atan2(x_eci.hypot(y_eci));

    (rad_to_deg(lat), normalize_longitude(rad_to_deg(lon)))
}

/// Advance the phase by one step, applying the wrap rule past 2π.
#[must_use]
pub fn advance_phase(phase_angle_rad: f64, step_rad: f64, wrap: PhaseWrap) -> f64 {
    let next = phase_angle_rad + step_rad;
    if next > TAU {
        match wrap {
            PhaseWrap::Reset => 0.0,
            PhaseWrap::Remainder => next - TAU,
        }
    } else {
        next
    }
}

/// Apply one tick: report the position for the current state, then advance.
#[must_use]
pub fn tick(
    state: &AnimationState,
    snapshot: &TrackSnapshot,
    motion: &MotionConfig,
) -> (AnimationState, TickOutput) {
    let phase = state.phase_angle_rad;

    let x = snapshot.center_x + snapshot.radius * phase.cos() - snapshot.half_marker;
    let y = snapshot.center_y + snapshot.radius * phase.sin() - snapshot.half_marker;

    let pseudo_altitude_km = snapshot.altitude_km
        + (phase * motion.wobble_frequency).sin() * motion.wobble_amplitude_km;

    let (latitude_deg, longitude_deg) = ground_position(
        snapshot.altitude_km,
        snapshot.inclination_deg,
        phase,
        state.elapsed_ticks,
    );

    let next = AnimationState {
        phase_angle_rad: advance_phase(phase, motion.angle_step_rad, motion.phase_wrap),
        elapsed_ticks: state.elapsed_ticks + 1,
        running: state.running,
    };

    let output = TickOutput {
        x,
        y,
        pseudo_altitude_km,
        latitude_deg,
        longitude_deg,
    };

    (next, output)
}

/// Owns the animation state and the single repeating task driving it.
#[derive(Debug)]
pub struct AnimationDriver {
    state: AnimationState,
    motion: MotionConfig,
    snapshot: Option<TrackSnapshot>,
    task: Option<RepeatingTask>,
    counter: TaskCounter,
    last_output: Option<TickOutput>,
}

impl AnimationDriver {
    /// Create a stopped driver at phase 0.
    #[must_use]
    pub fn new(motion: MotionConfig) -> Self {
        Self {
            state: AnimationState::default(),
            motion,
            snapshot: None,
            task: None,
            counter: TaskCounter::new(),
            last_output: None,
        }
    }

    /// Current animation state.
    #[must_use]
    pub const fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Motion configuration.
    #[must_use]
    pub const fn motion(&self) -> &MotionConfig {
        &self.motion
    }

    /// Snapshot in use, if tracking has been started or primed.
    #[must_use]
    pub const fn snapshot(&self) -> Option<&TrackSnapshot> {
        self.snapshot.as_ref()
    }

    /// Output of the most recent tick.
    #[must_use]
    pub const fn last_output(&self) -> Option<&TickOutput> {
        self.last_output.as_ref()
    }

    /// Whether a repeating task is driving the animation.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.running
    }

    /// Number of live repeating tasks. Never more than one.
    #[must_use]
    pub fn active_tasks(&self) -> usize {
        self.counter.live()
    }

    /// Set the snapshot without starting the timer, for headless stepping.
    pub fn prime(&mut self, snapshot: TrackSnapshot) {
        self.snapshot = Some(snapshot);
    }

    /// Start tracking from the current phase.
    ///
    /// Any task already running is cancelled and joined before the new one
    /// is spawned.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::OrbitError::Io`] if the timer thread cannot be spawned.
    pub fn start(&mut self, snapshot: TrackSnapshot) -> OrbitResult<()> {
        self.cancel_task();
        self.snapshot = Some(snapshot);

        let task = RepeatingTask::spawn(self.motion.tick_interval(), &self.counter)?;
        self.task = Some(task);
        self.state.running = true;

        tracing::info!(
            altitude_km = snapshot.altitude_km,
            radius = snapshot.radius,
            phase = self.state.phase_angle_rad,
            ticks = self.state.elapsed_ticks,
            "tracking started"
        );
        Ok(())
    }

    /// Stop tracking. Phase and tick count are kept.
    pub fn stop(&mut self) {
        self.cancel_task();
        if self.state.running {
            tracing::info!(
                phase = self.state.phase_angle_rad,
                ticks = self.state.elapsed_ticks,
                "tracking stopped"
            );
        }
        self.state.running = false;
    }

    /// Stop if running, otherwise start. Returns the new running flag.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::OrbitError::Io`] if starting fails.
    pub fn toggle(&mut self, snapshot: TrackSnapshot) -> OrbitResult<bool> {
        if self.state.running {
            self.stop();
        } else {
            self.start(snapshot)?;
        }
        Ok(self.state.running)
    }

    /// Zero the phase and tick count. Running state is unchanged.
    pub fn reset(&mut self) {
        self.state.phase_angle_rad = 0.0;
        self.state.elapsed_ticks = 0;
        self.last_output = None;
    }

    /// Update the radius and inclination of a captured snapshot.
    ///
    /// The baseline altitude stays as captured at start.
    pub fn refresh_geometry(&mut self, radius: f64, inclination_deg: f64) {
        if let Some(snapshot) = self.snapshot.as_mut() {
            snapshot.radius = radius;
            snapshot.inclination_deg = inclination_deg;
        }
    }

    /// Apply exactly one tick with the current snapshot.
    ///
    /// Returns `None` if no snapshot has been captured yet.
    pub fn step(&mut self) -> Option<TickOutput> {
        let snapshot = self.snapshot?;
        let (next, output) = tick(&self.state, &snapshot, &self.motion);
        self.state = next;
        self.last_output = Some(output);
        tracing::trace!(
            ticks = self.state.elapsed_ticks,
            lat = output.latitude_deg,
            lon = output.longitude_deg,
            "tick"
        );
        Some(output)
    }

    /// Apply one tick per timer period elapsed since the last poll.
    ///
    /// Returns an empty vector when stopped.
    pub fn poll(&mut self) -> Vec<TickOutput> {
        let fired = self.task.as_ref().map_or(0, RepeatingTask::drain);
        (0..fired).filter_map(|_| self.step()).collect()
    }

    /// Block up to `timeout` for the next timer period, then poll.
    ///
    /// Returns an empty vector on timeout or when stopped.
    pub fn wait_tick(&mut self, timeout: Duration) -> Vec<TickOutput> {
        let fired = self.task.as_ref().is_some_and(|task| task.wait(timeout));
        if !fired {
            return Vec::new();
        }
        let mut outputs: Vec<TickOutput> = self.step().into_iter().collect();
        outputs.extend(self.poll());
        outputs
    }

    fn cancel_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Longitude is always inside (−180, 180].
        #[test]
        fn prop_longitude_normalized(
            altitude in 0.0f64..400_000.0,
            inclination in -180.0f64..180.0,
            phase in 0.0f64..TAU,
            ticks in 0u64..100_000_000,
        ) {
            let (_, lon) = ground_position(altitude, inclination, phase, ticks);
            prop_assert!(lon > -180.0 && lon <= 180.0, "lon {}", lon);
        }

        /// Normalization keeps the angle modulo 360.
        #[test]
        fn prop_normalize_preserves_direction(deg in -1e6f64..1e6) {
            let n = normalize_longitude(deg);
            prop_assert!(n > -180.0 && n <= 180.0);
            let diff = (deg - n).rem_euclid(360.0);
            prop_assert!(diff < 1e-6 || (360.0 - diff) < 1e-6);
        }

        /// Phase stays in [0, 2π] under either wrap rule.
        #[test]
        fn prop_phase_bounded(phase in 0.0f64..TAU, step in 0.0001f64..1.0, remainder in any::<bool>()) {
            let wrap = if remainder { PhaseWrap::Remainder } else { PhaseWrap::Reset };
            let next = advance_phase(phase, step, wrap);
            prop_assert!((0.0..=TAU).contains(&next));
        }

        /// Tick output depends only on the state passed in.
        #[test]
        fn prop_tick_is_pure(phase in 0.0f64..TAU, ticks in 0u64..1_000_000) {
            let state = AnimationState { phase_angle_rad: phase, elapsed_ticks: ticks, running: false };
            let snapshot = TrackSnapshot::capture(
                &OrbitParameters::new(650.0, 6.0, 0.0017),
                &GeometryConfig::default(),
            );
            let motion = MotionConfig::default();
            prop_assert_eq!(tick(&state, &snapshot, &motion), tick(&state, &snapshot, &motion));
        }
    }
}
