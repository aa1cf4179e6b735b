//! TUI module for orbitscope.
//!
//! Reusable dashboard state extracted from `bin/orbit_tui.rs` so it can be
//! tested. Terminal I/O stays in the binary.

#[cfg(feature = "tui")]
pub mod orbit_app;

#[cfg(test)]
#[cfg(feature = "tui")]
mod tests;
