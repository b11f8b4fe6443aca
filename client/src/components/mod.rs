//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they receive data and callbacks as props
//! and never fetch or hold view state of their own.

pub mod error_banner;
pub mod nav_sidebar;
pub mod stat_card;
pub mod status_badge;
