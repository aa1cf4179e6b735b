//! CLI output formatting.
//!
//! Every writer takes `&mut dyn Write` so tests can capture output.

use serde::Serialize;
use std::io::{self, Write};

use crate::orbit::calculator::{OrbitMetrics, OrbitParameters};
use crate::orbit::driver::TickOutput;
use crate::orbit::format::{MetricsReadout, PositionReadout};
use crate::orbit::geometry::VisualEllipse;
use crate::orbit::presets::MissionPreset;

/// JSON shape of the `compute` command.
#[derive(Debug, Serialize)]
pub struct ComputeReport<'a> {
    /// Input parameters.
    pub parameters: &'a OrbitParameters,
    /// Raw metrics.
    pub metrics: &'a OrbitMetrics,
    /// Formatted readout.
    pub readout: MetricsReadout,
    /// Display ellipse.
    pub ellipse: &'a VisualEllipse,
}

/// JSON shape of one `track` line.
#[derive(Debug, Serialize)]
pub struct TrackLine<'a> {
    /// Tick number, starting at 1.
    pub tick: u64,
    /// Raw output.
    #[serde(flatten)]
    pub output: &'a TickOutput,
}

/// Write metrics as text.
///
/// # Errors
///
/// Returns error if writing fails.
pub fn write_metrics(
    out: &mut dyn Write,
    params: &OrbitParameters,
    metrics: &OrbitMetrics,
) -> io::Result<()> {
    writeln!(
        out,
        "Altitude {} km, inclination {}°, eccentricity {}",
        params.altitude_km, params.inclination_deg, params.eccentricity
    )?;
    writeln!(out, "{}", MetricsReadout::from_metrics(metrics))
}

/// Write metrics as one JSON document.
///
/// # Errors
///
/// Returns error if serialization or writing fails.
pub fn write_metrics_json(
    out: &mut dyn Write,
    params: &OrbitParameters,
    metrics: &OrbitMetrics,
    ellipse: &VisualEllipse,
) -> crate::OrbitResult<()> {
    let report = ComputeReport {
        parameters: params,
        metrics,
        readout: MetricsReadout::from_metrics(metrics),
        ellipse,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// Write the preset catalog as a table.
///
/// # Errors
///
/// Returns error if writing fails.
pub fn write_presets<'a>(
    out: &mut dyn Write,
    presets: impl IntoIterator<Item = &'a MissionPreset>,
) -> io::Result<()> {
    writeln!(
        out,
        "{:<12} {:<12} {:<20} {:>10} {:>8} {:>8}",
        "ID", "NAME", "CLASS", "ALT (km)", "INC (°)", "ECC"
    )?;
    for preset in presets {
        writeln!(
            out,
            "{:<12} {:<12} {:<20} {:>10} {:>8} {:>8}",
            preset.id,
            preset.name,
            preset.class.label(),
            preset.params.altitude_km,
            preset.params.inclination_deg,
            preset.params.eccentricity
        )?;
    }
    Ok(())
}

/// Write the preset catalog as JSON.
///
/// # Errors
///
/// Returns error if serialization or writing fails.
pub fn write_presets_json<'a>(
    out: &mut dyn Write,
    presets: impl IntoIterator<Item = &'a MissionPreset>,
) -> crate::OrbitResult<()> {
    let list: Vec<&MissionPreset> = presets.into_iter().collect();
    serde_json::to_writer_pretty(&mut *out, &list)?;
    writeln!(out)?;
    Ok(())
}

/// Write one tick as text.
///
/// # Errors
///
/// Returns error if writing fails.
pub fn write_position(out: &mut dyn Write, tick: u64, output: &TickOutput) -> io::Result<()> {
    writeln!(out, "#{tick:<6} {}", PositionReadout::from_tick(output))
}

/// Write one tick as a JSON line.
///
/// # Errors
///
/// Returns error if serialization or writing fails.
pub fn write_position_json(
    out: &mut dyn Write,
    tick: u64,
    output: &TickOutput,
) -> crate::OrbitResult<()> {
    serde_json::to_writer(&mut *out, &TrackLine { tick, output })?;
    writeln!(out)?;
    Ok(())
}
