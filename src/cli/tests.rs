//! CLI module tests.

use super::args::{Args, Command, OrbitArgs};
use super::commands::run;
use super::output::{write_position, write_presets};
use crate::error::OrbitError;
use crate::orbit::calculator::OrbitParameters;
use crate::orbit::driver::TickOutput;
use crate::orbit::presets::presets;
use clap::Parser;
use std::io::Write;

fn run_to_string(argv: &[&str]) -> Result<String, OrbitError> {
    let args = Args::try_parse_from(argv).expect("arguments parse");
    let mut buf = Vec::new();
    run(&args, &mut buf)?;
    Ok(String::from_utf8(buf).expect("utf-8 output"))
}

// ============================================================================
// Args parsing tests
// ============================================================================

#[test]
fn test_parse_compute_with_values() {
    let args = Args::parse_from([
        "orbitscope",
        "compute",
        "--altitude",
        "400",
        "--inclination",
        "51.6",
        "--eccentricity",
        "0.001",
    ]);
    match args.command {
        Command::Compute { orbit, json } => {
            assert!(!json);
            assert_eq!(orbit.altitude, Some(400.0));
            assert_eq!(orbit.inclination, Some(51.6));
            assert_eq!(orbit.eccentricity, Some(0.001));
            assert!(orbit.preset.is_none());
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_parse_negative_inclination() {
    let args = Args::parse_from(["orbitscope", "compute", "-i", "-30"]);
    let Command::Compute { orbit, .. } = args.command else {
        panic!("expected compute");
    };
    assert_eq!(orbit.inclination, Some(-30.0));
}

#[test]
fn test_parse_track_defaults() {
    let args = Args::parse_from(["orbitscope", "track", "--preset", "insat"]);
    match args.command {
        Command::Track {
            orbit,
            ticks,
            realtime,
            json,
        } => {
            assert_eq!(orbit.preset.as_deref(), Some("insat"));
            assert_eq!(ticks, 20);
            assert!(!realtime);
            assert!(!json);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_parse_global_config() {
    let args = Args::parse_from(["orbitscope", "presets", "--config", "orbit.yaml"]);
    assert_eq!(args.config.as_deref(), Some(std::path::Path::new("orbit.yaml")));
}

#[test]
fn test_parse_requires_subcommand() {
    assert!(Args::try_parse_from(["orbitscope"]).is_err());
}

#[test]
fn test_parse_rejects_non_numeric_altitude() {
    assert!(Args::try_parse_from(["orbitscope", "compute", "--altitude", "high"]).is_err());
}

// ============================================================================
// Orbit argument resolution
// ============================================================================

#[test]
fn test_resolve_preset_then_override() {
    let orbit = OrbitArgs {
        preset: Some("insat".to_string()),
        inclination: Some(5.0),
        ..OrbitArgs::default()
    };
    let params = orbit.resolve(OrbitParameters::default());
    assert!((params.altitude_km - 35_786.0).abs() < f64::EPSILON);
    assert!((params.inclination_deg - 5.0).abs() < f64::EPSILON);
}

#[test]
fn test_resolve_unknown_preset_keeps_base() {
    let orbit = OrbitArgs {
        preset: Some("custom".to_string()),
        ..OrbitArgs::default()
    };
    let base = OrbitParameters::new(1.0, 2.0, 0.3);
    assert_eq!(orbit.resolve(base), base);
}

#[test]
fn test_orbit_args_is_empty() {
    assert!(OrbitArgs::default().is_empty());
    let orbit = OrbitArgs {
        altitude: Some(1.0),
        ..OrbitArgs::default()
    };
    assert!(!orbit.is_empty());
}

// ============================================================================
// Command execution
// ============================================================================

#[test]
fn test_compute_text() {
    let text = run_to_string(&["orbitscope", "compute", "--preset", "insat"]).expect("runs");
    assert!(text.contains("1435.7 min"));
    assert!(text.contains("358.9°/orbit"));
}

#[test]
fn test_compute_json() {
    let text = run_to_string(&["orbitscope", "compute", "-a", "0", "-i", "0", "-e", "0", "--json"])
        .expect("runs");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value["readout"]["apogee"], "0");
    assert!((value["metrics"]["semi_major_axis_km"].as_f64().expect("number") - 6371.0).abs() < 1e-9);
    assert!((value["ellipse"]["width"].as_f64().expect("number") - 100.0).abs() < 1e-9);
}

#[test]
fn test_compute_nan_rejected() {
    let err = run_to_string(&["orbitscope", "compute", "--altitude", "NaN"]).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_presets_text_lists_all() {
    let text = run_to_string(&["orbitscope", "presets"]).expect("runs");
    for preset in presets() {
        assert!(text.contains(preset.id), "missing {}", preset.id);
    }
}

#[test]
fn test_presets_json() {
    let text = run_to_string(&["orbitscope", "presets", "--json"]).expect("runs");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value.as_array().map(Vec::len), Some(6));
    assert_eq!(value[2]["class"], "geostationary");
}

#[test]
fn test_track_headless_line_count() {
    let text = run_to_string(&["orbitscope", "track", "-n", "5"]).expect("runs");
    assert_eq!(text.lines().count(), 5);
    assert!(text.lines().next().expect("first line").starts_with("#1"));
}

#[test]
fn test_track_json_lines() {
    let text = run_to_string(&["orbitscope", "track", "-n", "3", "--json"]).expect("runs");
    let ticks: Vec<u64> = text
        .lines()
        .map(|line| {
            let v: serde_json::Value = serde_json::from_str(line).expect("json line");
            v["tick"].as_u64().expect("tick")
        })
        .collect();
    assert_eq!(ticks, vec![1, 2, 3]);
}

#[test]
fn test_track_realtime_with_fast_config() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(b"motion:\n  tick_interval_ms: 5\n").expect("write");
    let path = file.path().to_str().expect("utf-8 path").to_string();

    let text = run_to_string(&["orbitscope", "--config", &path, "track", "-n", "3", "--realtime"])
        .expect("runs");
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn test_missing_config_is_io_error() {
    let err = run_to_string(&["orbitscope", "--config", "/nonexistent.yaml", "presets"]).unwrap_err();
    assert!(matches!(err, OrbitError::Io(_)));
}

// ============================================================================
// Output helpers
// ============================================================================

#[test]
fn test_write_position_format() {
    let mut buf = Vec::new();
    let output = TickOutput {
        x: 0.0,
        y: 0.0,
        pseudo_altitude_km: 509.0,
        latitude_deg: 0.0,
        longitude_deg: -0.5,
    };
    write_position(&mut buf, 7, &output).expect("write");
    let text = String::from_utf8(buf).expect("utf-8");
    assert!(text.starts_with("#7"));
    assert!(text.contains("-0.50"));
}

#[test]
fn test_write_presets_header() {
    let mut buf = Vec::new();
    write_presets(&mut buf, presets()).expect("write");
    let text = String::from_utf8(buf).expect("utf-8");
    assert!(text.starts_with("ID"));
    assert_eq!(text.lines().count(), 7);
}
