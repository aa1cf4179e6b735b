//! Integration tests for the TUI module.

use super::orbit_app::{Field, OrbitApp};
use crate::config::OrbitConfig;
use crate::orbit::session::Selection;
use crossterm::event::KeyCode;
use std::time::Duration;

#[test]
fn test_orbit_app_lifecycle() {
    let config = OrbitConfig::builder().tick_interval_ms(2).build();
    let mut app = OrbitApp::from_config(&config).expect("valid config");

    // Initial state
    assert!(!app.is_tracking());
    assert!(!app.should_quit);

    // Pick a preset and start tracking
    app.handle_key(KeyCode::Char('2'));
    assert_eq!(app.session.selection(), Selection::Preset("resourcesat"));
    app.handle_key(KeyCode::Char(' '));
    assert!(app.is_tracking());

    std::thread::sleep(Duration::from_millis(20));
    app.update();
    let ticks = app.session.driver().state().elapsed_ticks;
    assert!(ticks > 0);

    // Stop: further updates apply nothing
    app.handle_key(KeyCode::Char(' '));
    std::thread::sleep(Duration::from_millis(10));
    app.update();
    assert_eq!(app.session.driver().state().elapsed_ticks, ticks);

    // Reset
    app.handle_key(KeyCode::Char('r'));
    assert_eq!(app.session.driver().state().elapsed_ticks, 0);

    // Quit
    app.handle_key(KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_edit_while_tracking_keeps_single_task() {
    let config = OrbitConfig::builder().tick_interval_ms(2).build();
    let mut app = OrbitApp::from_config(&config).expect("valid config");
    app.handle_key(KeyCode::Char('t'));

    app.selected = Field::Inclination;
    app.handle_key(KeyCode::Char(']'));
    app.handle_key(KeyCode::Char('4'));

    assert!(app.is_tracking());
    assert_eq!(app.session.driver().active_tasks(), 1);
    let snapshot = app.session.driver().snapshot().expect("captured at start");
    assert!((snapshot.inclination_deg - 6.0).abs() < f64::EPSILON);

    app.handle_key(KeyCode::Char('q'));
    assert_eq!(app.session.driver().active_tasks(), 0);
}

#[test]
fn test_from_config_unknown_preset() {
    let mut config = OrbitConfig::default();
    config.initial.preset = Some("hubble".to_string());
    assert!(OrbitApp::from_config(&config).is_err());
}
