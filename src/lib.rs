//! # orbitscope
//!
//! Educational orbital-mechanics calculator and ground-track animator.
//!
//! - Closed-form orbit metrics from altitude, inclination and eccentricity
//! - A bounded 2D display ellipse for the orbit path
//! - A tick-driven animation with a naive latitude/longitude estimate
//! - A fixed catalog of mission presets
//!
//! Presentation layers (the `orbitscope` CLI, the `orbit_tui` dashboard)
//! bind to these through explicit values; nothing here writes to a display.
//!
//! ## Example
//!
//! ```rust
//! use orbitscope::prelude::*;
//!
//! let metrics = compute_metrics(400.0, 51.6, 0.0).expect("finite input");
//! let readout = MetricsReadout::from_metrics(&metrics);
//! assert_eq!(readout.velocity, "7.67");
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops,  // Closed-form formulas read better unfused
    clippy::imprecise_flops,
    clippy::many_single_char_names,  // Standard orbital notation
    clippy::missing_const_for_fn,
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod orbit;
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{OrbitConfig, OrbitConfigBuilder};
    pub use crate::error::{OrbitError, OrbitResult};
    pub use crate::orbit::prelude::*;
}

/// Re-export for public API
pub use error::{OrbitError, OrbitResult};
