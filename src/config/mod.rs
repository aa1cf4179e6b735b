//! Configuration system with YAML schema and validation.
//!
//! Mistake-proofing through:
//! - Type-safe configuration structs
//! - Schema validation via serde (`deny_unknown_fields`)
//! - Range checks via `validator`
//! - Semantic checks that span fields

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{OrbitError, OrbitResult};
use crate::orbit::calculator::OrbitParameters;
use crate::orbit::driver::{MotionConfig, PhaseWrap};
use crate::orbit::geometry::GeometryConfig;
use crate::orbit::presets::find_preset;

/// Top-level configuration.
///
/// Loaded from YAML files with full schema validation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct OrbitConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Animation cadence and motion.
    #[validate(nested)]
    #[serde(default)]
    pub motion: MotionConfig,

    /// Canvas layout.
    #[validate(nested)]
    #[serde(default)]
    pub geometry: GeometryConfig,

    /// Parameters shown at startup.
    #[validate(nested)]
    #[serde(default)]
    pub initial: InitialOrbit,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl OrbitConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> OrbitResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> OrbitResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> OrbitResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> OrbitConfigBuilder {
        OrbitConfigBuilder::default()
    }

    /// Validate constraints that span fields.
    fn validate_semantic(&self) -> OrbitResult<()> {
        let g = &self.geometry;
        if g.max_radius < g.min_radius {
            return Err(OrbitError::config(format!(
                "geometry.max_radius ({}) must not be below geometry.min_radius ({})",
                g.max_radius, g.min_radius
            )));
        }

        if !self.motion.wobble_amplitude_km.is_finite() || !self.motion.wobble_frequency.is_finite()
        {
            return Err(OrbitError::config("motion wobble settings must be finite"));
        }

        if let Some(id) = self.initial.preset.as_deref() {
            if find_preset(id).is_none() {
                return Err(OrbitError::config(format!("unknown initial preset '{id}'")));
            }
        } else {
            self.initial.parameters().ensure_finite()?;
        }

        Ok(())
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            motion: MotionConfig::default(),
            geometry: GeometryConfig::default(),
            initial: InitialOrbit::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct OrbitConfigBuilder {
    tick_interval_ms: Option<u64>,
    angle_step_rad: Option<f64>,
    phase_wrap: Option<PhaseWrap>,
    preset: Option<String>,
    parameters: Option<OrbitParameters>,
}

impl OrbitConfigBuilder {
    /// Set the timer period in milliseconds.
    #[must_use]
    pub const fn tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = Some(ms);
        self
    }

    /// Set the phase advance per tick.
    #[must_use]
    pub const fn angle_step_rad(mut self, step: f64) -> Self {
        self.angle_step_rad = Some(step);
        self
    }

    /// Set the phase wrap rule.
    #[must_use]
    pub const fn phase_wrap(mut self, wrap: PhaseWrap) -> Self {
        self.phase_wrap = Some(wrap);
        self
    }

    /// Start from a catalog preset.
    #[must_use]
    pub fn preset(mut self, id: impl Into<String>) -> Self {
        self.preset = Some(id.into());
        self
    }

    /// Start from explicit parameters.
    #[must_use]
    pub const fn parameters(mut self, params: OrbitParameters) -> Self {
        self.parameters = Some(params);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> OrbitConfig {
        let mut config = OrbitConfig::default();

        if let Some(ms) = self.tick_interval_ms {
            config.motion.tick_interval_ms = ms;
        }

        if let Some(step) = self.angle_step_rad {
            config.motion.angle_step_rad = step;
        }

        if let Some(wrap) = self.phase_wrap {
            config.motion.phase_wrap = wrap;
        }

        if let Some(params) = self.parameters {
            config.initial.altitude_km = params.altitude_km;
            config.initial.inclination_deg = params.inclination_deg;
            config.initial.eccentricity = params.eccentricity;
        }

        config.initial.preset = self.preset;
        config
    }
}

/// Starting orbit: a preset id, or explicit parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct InitialOrbit {
    /// Catalog id; overrides the explicit parameters when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// Altitude (km).
    #[validate(range(min = 0.0))]
    #[serde(default = "default_altitude")]
    pub altitude_km: f64,
    /// Inclination (degrees).
    #[serde(default = "default_inclination")]
    pub inclination_deg: f64,
    /// Eccentricity.
    #[validate(range(min = 0.0, exclusive_max = 1.0))]
    #[serde(default = "default_eccentricity")]
    pub eccentricity: f64,
}

fn default_altitude() -> f64 {
    OrbitParameters::default().altitude_km
}

fn default_inclination() -> f64 {
    OrbitParameters::default().inclination_deg
}

fn default_eccentricity() -> f64 {
    OrbitParameters::default().eccentricity
}

impl InitialOrbit {
    /// Explicit parameters, ignoring `preset`.
    #[must_use]
    pub const fn parameters(&self) -> OrbitParameters {
        OrbitParameters::new(self.altitude_km, self.inclination_deg, self.eccentricity)
    }
}

impl Default for InitialOrbit {
    fn default() -> Self {
        Self {
            preset: None,
            altitude_km: default_altitude(),
            inclination_deg: default_inclination(),
            eccentricity: default_eccentricity(),
        }
    }
}
