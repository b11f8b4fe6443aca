//! Dashboard overview state.
//!
//! The page joins two fetches (aggregate summary + replatform estimate) and
//! treats them as one result: either failure discards both payloads.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use indexmap::IndexMap;

use crate::net::error::ApiError;
use crate::net::types::{CostEstimate, DashboardSummary, Strategy, status_label};

/// The only strategy the dashboard snapshot shows.
pub const DASHBOARD_COST_STRATEGY: Strategy = Strategy::Replatform;

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub summary: Option<DashboardSummary>,
    pub costs: Option<CostEstimate>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self { summary: None, costs: None, loading: true, error: None }
    }
}

impl DashboardState {
    /// Store the joined result of both dashboard fetches.
    pub fn apply(&mut self, result: Result<(DashboardSummary, CostEstimate), ApiError>) {
        self.loading = false;
        match result {
            Ok((summary, costs)) => {
                self.summary = Some(summary);
                self.costs = Some(costs);
                self.error = None;
            }
            Err(err) => {
                self.summary = None;
                self.costs = None;
                self.error = Some(err.to_string());
            }
        }
    }

    /// One `(label, count)` per status bucket, zero buckets included.
    pub fn status_cards(&self) -> Vec<(String, u64)> {
        self.summary.as_ref().map_or_else(Vec::new, |summary| {
            summary
                .migrations
                .by_status
                .iter()
                .map(|(status, count)| (status_label(status), *count))
                .collect()
        })
    }

    /// One `(category, count)` per non-empty resource category.
    pub fn category_cards(&self) -> Vec<(String, u64)> {
        self.summary
            .as_ref()
            .map_or_else(Vec::new, |summary| non_zero_buckets(&summary.resources.by_category))
    }
}

/// Drop empty buckets from a category histogram.
pub fn non_zero_buckets(buckets: &IndexMap<String, u64>) -> Vec<(String, u64)> {
    buckets
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(key, count)| (key.clone(), *count))
        .collect()
}
