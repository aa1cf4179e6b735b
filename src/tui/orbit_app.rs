//! Orbit TUI application state and logic.
//!
//! Terminal I/O is handled by the `orbit_tui` binary; everything the keys
//! do and everything the panels show is computed here so it can be tested.

use std::collections::VecDeque;

use crossterm::event::KeyCode;

use crate::config::OrbitConfig;
use crate::error::OrbitResult;
use crate::orbit::calculator::OrbitParameters;
use crate::orbit::format::{MetricsReadout, PositionReadout};
use crate::orbit::presets::PRESETS;
use crate::orbit::session::{Selection, TrackingSession};

/// Number of recent marker positions kept for the trail.
pub const TRAIL_LENGTH: usize = 120;

const ALTITUDE_STEP_KM: f64 = 100.0;
const INCLINATION_STEP_DEG: f64 = 1.0;
const ECCENTRICITY_STEP: f64 = 0.01;
const MAX_ECCENTRICITY: f64 = 0.99;

/// Input field the arrow keys edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Altitude in km.
    Altitude,
    /// Inclination in degrees.
    Inclination,
    /// Eccentricity.
    Eccentricity,
}

impl Field {
    /// Label shown next to the value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Altitude => "Altitude (km)",
            Self::Inclination => "Inclination (°)",
            Self::Eccentricity => "Eccentricity",
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::Altitude => Self::Inclination,
            Self::Inclination => Self::Eccentricity,
            Self::Eccentricity => Self::Altitude,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Altitude => Self::Eccentricity,
            Self::Inclination => Self::Altitude,
            Self::Eccentricity => Self::Inclination,
        }
    }

    /// All fields in display order.
    pub const ALL: [Self; 3] = [Self::Altitude, Self::Inclination, Self::Eccentricity];
}

/// Application state for the orbit dashboard.
#[derive(Debug)]
pub struct OrbitApp {
    /// Parameters, metrics and animation.
    pub session: TrackingSession,
    /// Field the arrow keys edit.
    pub selected: Field,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Last error message to show in the status line.
    pub status: Option<String>,
    trail: VecDeque<(f64, f64)>,
}

impl OrbitApp {
    /// Create an app with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_session(TrackingSession::default())
    }

    /// Create an app from a configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configured initial preset does not exist.
    pub fn from_config(config: &OrbitConfig) -> OrbitResult<Self> {
        Ok(Self::with_session(TrackingSession::from_config(config)?))
    }

    fn with_session(session: TrackingSession) -> Self {
        Self {
            session,
            selected: Field::Altitude,
            should_quit: false,
            status: None,
            trail: VecDeque::with_capacity(TRAIL_LENGTH),
        }
    }

    /// Apply ticks that fired since the last frame.
    pub fn update(&mut self) {
        let half = self.session.geometry().half_marker();
        for output in self.session.poll() {
            if self.trail.len() == TRAIL_LENGTH {
                self.trail.pop_front();
            }
            self.trail.push_back((output.x + half, output.y + half));
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.session.stop_tracking();
                self.should_quit = true;
            }
            KeyCode::Char(' ' | 't') => self.toggle(),
            KeyCode::Char('r') => {
                self.session.reset_animation();
                self.trail.clear();
            }
            KeyCode::Char(c @ '1'..='6') => {
                let index = (c as usize) - ('1' as usize);
                if let Some(preset) = PRESETS.get(index) {
                    self.session.load_preset(preset.id);
                    self.trail.clear();
                }
            }
            KeyCode::Up => self.selected = self.selected.previous(),
            KeyCode::Down | KeyCode::Tab => self.selected = self.selected.next(),
            KeyCode::Left | KeyCode::Char('[') => self.adjust(-1.0),
            KeyCode::Right | KeyCode::Char(']') => self.adjust(1.0),
            _ => {}
        }
    }

    fn toggle(&mut self) {
        match self.session.toggle_tracking() {
            Ok(running) => {
                self.status = None;
                tracing::debug!(running, "tracking toggled");
            }
            Err(err) => {
                tracing::error!(%err, "failed to start tracking");
                self.status = Some(err.to_string());
            }
        }
    }

    fn adjust(&mut self, direction: f64) {
        let mut params: OrbitParameters = *self.session.params();
        match self.selected {
            Field::Altitude => {
                params.altitude_km = (params.altitude_km + direction * ALTITUDE_STEP_KM).max(0.0);
            }
            Field::Inclination => {
                params.inclination_deg += direction * INCLINATION_STEP_DEG;
            }
            Field::Eccentricity => {
                params.eccentricity = (params.eccentricity + direction * ECCENTRICITY_STEP)
                    .clamp(0.0, MAX_ECCENTRICITY);
            }
        }
        self.session.set_parameters(params);
    }

    /// Current value of a field.
    #[must_use]
    pub fn field_value(&self, field: Field) -> f64 {
        let params = self.session.params();
        match field {
            Field::Altitude => params.altitude_km,
            Field::Inclination => params.inclination_deg,
            Field::Eccentricity => params.eccentricity,
        }
    }

    /// Recent marker centers, oldest first.
    pub fn trail(&self) -> impl Iterator<Item = &(f64, f64)> {
        self.trail.iter()
    }

    /// Whether the animation timer is running.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.session.is_tracking()
    }

    /// Name of the active preset, or "Custom".
    #[must_use]
    pub fn selection_name(&self) -> &'static str {
        match self.session.selection() {
            Selection::Preset(id) => PRESETS
                .iter()
                .find(|p| p.id == id)
                .map_or(id, |p| p.name),
            Selection::Custom => "Custom",
        }
    }

    /// Formatted metrics panel.
    #[must_use]
    pub fn metrics_readout(&self) -> MetricsReadout {
        self.session.metrics_readout()
    }

    /// Formatted position panel, if any tick has run.
    #[must_use]
    pub fn position_readout(&self) -> Option<PositionReadout> {
        self.session.position_readout()
    }
}

impl Default for OrbitApp {
    fn default() -> Self {
        Self::new()
    }
}
