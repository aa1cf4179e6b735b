//! Tracking session: the controller between inputs and the core.
//!
//! Holds the current parameters and recomputes metrics and geometry
//! wholesale whenever they change. Presets load through here, and tracking
//! is toggled with a snapshot of the current geometry.

use crate::config::OrbitConfig;
use crate::error::{OrbitError, OrbitResult};
use crate::orbit::calculator::{OrbitMetrics, OrbitParameters};
use crate::orbit::driver::{AnimationDriver, TickOutput, TrackSnapshot};
use crate::orbit::format::{MetricsReadout, PositionReadout};
use crate::orbit::geometry::{GeometryConfig, VisualEllipse};
use crate::orbit::presets::find_preset;

/// Which preset the parameters came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A catalog preset, by id.
    Preset(&'static str),
    /// Parameters entered by hand.
    Custom,
}

/// Application-level orbit tracking state.
#[derive(Debug)]
pub struct TrackingSession {
    params: OrbitParameters,
    selection: Selection,
    metrics: OrbitResult<OrbitMetrics>,
    ellipse: VisualEllipse,
    geometry: GeometryConfig,
    driver: AnimationDriver,
}

impl TrackingSession {
    /// Create a session from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::Config`] if the configured initial preset does
    /// not exist.
    pub fn from_config(config: &OrbitConfig) -> OrbitResult<Self> {
        let (params, selection) = match config.initial.preset.as_deref() {
            Some(id) => {
                let preset = find_preset(id)
                    .ok_or_else(|| OrbitError::config(format!("unknown initial preset '{id}'")))?;
                (preset.params, Selection::Preset(preset.id))
            }
            None => (config.initial.parameters(), Selection::Custom),
        };
        Ok(Self::with_parts(
            params,
            selection,
            config.geometry,
            AnimationDriver::new(config.motion),
        ))
    }

    /// Create a session with default layout and motion.
    #[must_use]
    pub fn new(params: OrbitParameters) -> Self {
        Self::with_parts(
            params,
            Selection::Custom,
            GeometryConfig::default(),
            AnimationDriver::default(),
        )
    }

    fn with_parts(
        params: OrbitParameters,
        selection: Selection,
        geometry: GeometryConfig,
        driver: AnimationDriver,
    ) -> Self {
        let mut session = Self {
            params,
            selection,
            metrics: params.metrics(),
            ellipse: geometry.ellipse_for(params.altitude_km, params.eccentricity),
            geometry,
            driver,
        };
        session.recompute();
        session
    }

    /// Current parameters.
    #[must_use]
    pub const fn params(&self) -> &OrbitParameters {
        &self.params
    }

    /// Current preset selection.
    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Metrics for the current parameters, or the rejection.
    #[must_use]
    pub const fn metrics(&self) -> Result<&OrbitMetrics, &OrbitError> {
        self.metrics.as_ref()
    }

    /// Ellipse for the current parameters.
    #[must_use]
    pub const fn ellipse(&self) -> &VisualEllipse {
        &self.ellipse
    }

    /// Canvas layout.
    #[must_use]
    pub const fn geometry(&self) -> &GeometryConfig {
        &self.geometry
    }

    /// Animation driver.
    #[must_use]
    pub const fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    /// Whether tracking is active.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.driver.is_running()
    }

    /// Formatted metrics, `NaN` everywhere if the parameters were rejected.
    #[must_use]
    pub fn metrics_readout(&self) -> MetricsReadout {
        self.metrics
            .as_ref()
            .map_or_else(|_| MetricsReadout::invalid(), MetricsReadout::from_metrics)
    }

    /// Formatted position from the last tick, if any.
    #[must_use]
    pub fn position_readout(&self) -> Option<PositionReadout> {
        self.driver.last_output().map(PositionReadout::from_tick)
    }

    /// Replace the parameters and recompute everything derived from them.
    ///
    /// The selection becomes [`Selection::Custom`].
    pub fn set_parameters(&mut self, params: OrbitParameters) {
        self.params = params;
        self.selection = Selection::Custom;
        self.recompute();
    }

    /// Load a catalog preset. Unknown ids leave the session untouched.
    ///
    /// Returns `true` if a preset was applied.
    pub fn load_preset(&mut self, mission_id: &str) -> bool {
        let Some(preset) = find_preset(mission_id) else {
            tracing::debug!(mission_id, "ignoring unknown preset");
            return false;
        };
        self.params = preset.params;
        self.selection = Selection::Preset(preset.id);
        tracing::info!(mission_id, "loaded preset");
        self.recompute();
        true
    }

    /// Start tracking if stopped, stop if running. Returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::Io`] if the timer cannot be started.
    pub fn toggle_tracking(&mut self) -> OrbitResult<bool> {
        let snapshot = self.snapshot();
        self.driver.toggle(snapshot)
    }

    /// Stop tracking, keeping the animation state.
    pub fn stop_tracking(&mut self) {
        self.driver.stop();
    }

    /// Zero the animation phase and tick count.
    pub fn reset_animation(&mut self) {
        self.driver.reset();
    }

    /// Apply any ticks that fired since the last poll.
    pub fn poll(&mut self) -> Vec<TickOutput> {
        self.driver.poll()
    }

    /// Advance one tick without the timer, priming the snapshot if needed.
    pub fn step(&mut self) -> Option<TickOutput> {
        if self.driver.snapshot().is_none() {
            self.driver.prime(self.snapshot());
        }
        self.driver.step()
    }

    /// Mutable access to the driver for callers that block on ticks.
    pub fn driver_mut(&mut self) -> &mut AnimationDriver {
        &mut self.driver
    }

    /// Snapshot of the current geometry.
    #[must_use]
    pub fn snapshot(&self) -> TrackSnapshot {
        TrackSnapshot::capture(&self.params, &self.geometry)
    }

    fn recompute(&mut self) {
        self.metrics = self.params.metrics();
        self.ellipse = self
            .geometry
            .ellipse_for(self.params.altitude_km, self.params.eccentricity);
        if self.driver.is_running() {
            self.driver
                .refresh_geometry(self.ellipse.track_radius(), self.params.inclination_deg);
        } else if self.driver.snapshot().is_some() {
            // Stopped: the next step or start sees the whole new parameter set.
            self.driver.prime(self.snapshot());
        }
    }
}

impl Default for TrackingSession {
    fn default() -> Self {
        Self::new(OrbitParameters::default())
    }
}
