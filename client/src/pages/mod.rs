//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetch orchestration and its state signal, and
//! delegates rendering details to `components`.

pub mod costs;
pub mod dashboard;
pub mod migrations;
pub mod resources;
