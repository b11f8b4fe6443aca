//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep formatting and async lifecycle concerns out of page
//! logic so they can be unit tested without a browser.

pub mod format;
pub mod liveness;
