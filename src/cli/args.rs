//! CLI argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::orbit::calculator::OrbitParameters;
use crate::orbit::presets::load_preset;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "orbitscope", version)]
#[command(about = "Orbit metrics calculator and ground-track animator")]
pub struct Args {
    /// YAML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Compute period, velocity, apsides and ground-track shift
    Compute {
        #[command(flatten)]
        orbit: OrbitArgs,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the mission preset catalog
    Presets {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run the animation and print the estimated ground position per tick
    Track {
        #[command(flatten)]
        orbit: OrbitArgs,

        /// Number of ticks to print
        #[arg(short = 'n', long, default_value_t = 20)]
        ticks: u64,

        /// Drive ticks from the timer instead of stepping immediately
        #[arg(long)]
        realtime: bool,

        /// Emit one JSON object per tick
        #[arg(long)]
        json: bool,
    },
}

/// Orbit selection shared by commands.
///
/// A preset is applied first; explicit values then override its fields.
#[derive(Debug, Clone, Default, PartialEq, clap::Args)]
pub struct OrbitArgs {
    /// Mission preset id (see `presets`)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Altitude above the surface (km)
    #[arg(short, long, allow_hyphen_values = true)]
    pub altitude: Option<f64>,

    /// Inclination (degrees)
    #[arg(short, long, allow_hyphen_values = true)]
    pub inclination: Option<f64>,

    /// Eccentricity
    #[arg(short, long, allow_hyphen_values = true)]
    pub eccentricity: Option<f64>,
}

impl OrbitArgs {
    /// Resolve against a base parameter set.
    ///
    /// An unknown preset id leaves the base unchanged.
    #[must_use]
    pub fn resolve(&self, base: OrbitParameters) -> OrbitParameters {
        let mut params = match self.preset.as_deref() {
            Some(id) => load_preset(id).unwrap_or_else(|| {
                tracing::warn!(preset = id, "unknown preset, keeping current parameters");
                base
            }),
            None => base,
        };

        if let Some(altitude) = self.altitude {
            params.altitude_km = altitude;
        }
        if let Some(inclination) = self.inclination {
            params.inclination_deg = inclination;
        }
        if let Some(eccentricity) = self.eccentricity {
            params.eccentricity = eccentricity;
        }
        params
    }

    /// Whether any explicit value or preset was given.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.preset.is_none()
            && self.altitude.is_none()
            && self.inclination.is_none()
            && self.eccentricity.is_none()
    }
}
