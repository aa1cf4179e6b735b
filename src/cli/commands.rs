//! CLI command handlers.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::config::OrbitConfig;
use crate::error::{OrbitError, OrbitResult};
use crate::orbit::driver::TickOutput;
use crate::orbit::presets::presets;
use crate::orbit::session::TrackingSession;

use super::output::{
    write_metrics, write_metrics_json, write_position, write_position_json, write_presets,
    write_presets_json,
};
use super::{Args, Command, OrbitArgs};

/// Log directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Log filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
#[must_use]
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Main CLI entry point.
///
/// Runs the command against stdout and maps failure to a non-zero exit.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&args, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Run a parsed command, writing results to `out`.
///
/// # Errors
///
/// Returns error if the configuration cannot be loaded, the orbital
/// parameters are not finite, the timer cannot start, or writing fails.
pub fn run(args: &Args, out: &mut dyn Write) -> OrbitResult<()> {
    let config = match &args.config {
        Some(path) => OrbitConfig::load(path)?,
        None => OrbitConfig::default(),
    };

    match &args.command {
        Command::Compute { orbit, json } => compute(&config, orbit, *json, out),
        Command::Presets { json } => {
            if *json {
                write_presets_json(out, presets())
            } else {
                Ok(write_presets(out, presets())?)
            }
        }
        Command::Track {
            orbit,
            ticks,
            realtime,
            json,
        } => track(&config, orbit, *ticks, *realtime, *json, out),
    }
}

fn session_for(config: &OrbitConfig, orbit: &OrbitArgs) -> OrbitResult<TrackingSession> {
    let mut session = TrackingSession::from_config(config)?;
    if !orbit.is_empty() {
        let params = orbit.resolve(*session.params());
        session.set_parameters(params);
    }
    Ok(session)
}

fn compute(
    config: &OrbitConfig,
    orbit: &OrbitArgs,
    json: bool,
    out: &mut dyn Write,
) -> OrbitResult<()> {
    let session = session_for(config, orbit)?;
    let params = *session.params();
    let metrics = params.metrics()?;

    if json {
        write_metrics_json(out, &params, &metrics, session.ellipse())
    } else {
        Ok(write_metrics(out, &params, &metrics)?)
    }
}

fn track(
    config: &OrbitConfig,
    orbit: &OrbitArgs,
    ticks: u64,
    realtime: bool,
    json: bool,
    out: &mut dyn Write,
) -> OrbitResult<()> {
    let mut session = session_for(config, orbit)?;
    // Reject non-finite parameters before animating them.
    session.params().ensure_finite()?;

    let mut emit = |n: u64, output: TickOutput| -> OrbitResult<()> {
        if json {
            write_position_json(out, n, &output)
        } else {
            Ok(write_position(out, n, &output)?)
        }
    };

    if !realtime {
        for n in 1..=ticks {
            if let Some(output) = session.step() {
                emit(n, output)?;
            }
        }
        return Ok(());
    }

    let timeout = Duration::from_millis(config.motion.tick_interval_ms.saturating_mul(4))
        .max(Duration::from_millis(100));
    session.toggle_tracking()?;

    let result = emit_timed_ticks(
        || session.driver_mut().wait_tick(timeout),
        ticks,
        MAX_MISSED_TICKS,
        &mut emit,
    );
    session.stop_tracking();
    result
}

/// Consecutive empty waits tolerated before a realtime run gives up.
const MAX_MISSED_TICKS: u32 = 10;

/// Emit `ticks` outputs from `wait`, failing after `max_missed` empty waits
/// in a row.
fn emit_timed_ticks(
    mut wait: impl FnMut() -> Vec<TickOutput>,
    ticks: u64,
    max_missed: u32,
    emit: &mut impl FnMut(u64, TickOutput) -> OrbitResult<()>,
) -> OrbitResult<()> {
    let mut printed = 0;
    let mut missed = 0;
    while printed < ticks {
        let outputs = wait();
        if outputs.is_empty() {
            missed += 1;
            tracing::warn!(missed, "no tick within timeout");
            if missed >= max_missed {
                return Err(OrbitError::TimerStalled { missed });
            }
            continue;
        }
        missed = 0;
        for output in outputs {
            if printed == ticks {
                break;
            }
            printed += 1;
            emit(printed, output)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TickOutput {
        TickOutput {
            x: 0.0,
            y: 0.0,
            pseudo_altitude_km: 509.0,
            latitude_deg: 0.0,
            longitude_deg: 0.0,
        }
    }

    #[test]
    fn test_default_log_filter_is_info() {
        assert_eq!(DEFAULT_LOG_FILTER, "info");
        let filter = EnvFilter::try_new(DEFAULT_LOG_FILTER).expect("valid directive");
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn test_stalled_timer_gives_up() {
        let mut waits = 0;
        let mut emitted = 0;
        let err = emit_timed_ticks(
            || {
                waits += 1;
                Vec::new()
            },
            5,
            3,
            &mut |_: u64, _: TickOutput| -> OrbitResult<()> {
                emitted += 1;
                Ok(())
            },
        )
        .unwrap_err();
        assert!(matches!(err, OrbitError::TimerStalled { missed: 3 }));
        assert_eq!(waits, 3);
        assert_eq!(emitted, 0);
    }

    #[test]
    fn test_intermittent_misses_reset_count() {
        let mut calls = 0;
        let mut seen = Vec::new();
        emit_timed_ticks(
            || {
                calls += 1;
                if calls % 2 == 0 {
                    vec![sample(), sample()]
                } else {
                    Vec::new()
                }
            },
            3,
            2,
            &mut |n: u64, _: TickOutput| -> OrbitResult<()> {
                seen.push(n);
                Ok(())
            },
        )
        .expect("misses never reach the limit in a row");
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
