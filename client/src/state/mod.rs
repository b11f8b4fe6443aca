//! Per-view state for the dashboard screens.
//!
//! DESIGN
//! ======
//! Each page wraps exactly one of these structs in a `RwSignal` it owns;
//! nothing here is shared across routes. Transitions are plain methods so the
//! fetch/join/invalidate rules are testable without a browser.

pub mod costs;
pub mod dashboard;
pub mod migrations;
pub mod resources;
