//! Teardown guard for async work spawned by a view.
//!
//! Requests are not cancelable, so a response can arrive after its page has
//! been unmounted. Each page holds a `Liveness` that flips to dead in
//! `on_cleanup`; continuations check it before touching view state.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Create a guard that dies when the current reactive owner is cleaned up.
    pub fn for_owner() -> Self {
        let liveness = Self::new();
        let on_drop = liveness.clone();
        leptos::prelude::on_cleanup(move || on_drop.retire());
        liveness
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn retire(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}
