//! Cost estimator state: selected strategy plus the estimate for it.
//!
//! DESIGN
//! ======
//! Every selection issues a fresh request tagged with a generation number.
//! Estimates are never cached per strategy, and a response for a superseded
//! selection is dropped so the cards always match the highlighted strategy.

#[cfg(test)]
#[path = "costs_test.rs"]
mod costs_test;

use crate::net::error::ApiError;
use crate::net::types::{CostEstimate, Strategy};

/// Identifies one in-flight estimate request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CostRequest {
    pub strategy: Strategy,
    pub generation: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CostsState {
    pub strategy: Strategy,
    pub estimate: Option<CostEstimate>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl Default for CostsState {
    fn default() -> Self {
        Self { strategy: Strategy::default(), estimate: None, loading: true, error: None, generation: 0 }
    }
}

impl CostsState {
    /// Select a strategy and describe the single request to issue for it.
    pub fn select(&mut self, strategy: Strategy) -> CostRequest {
        self.strategy = strategy;
        self.generation += 1;
        self.loading = true;
        CostRequest { strategy, generation: self.generation }
    }

    /// Store a response. Returns `false` when it belonged to a superseded request.
    pub fn apply(&mut self, request: CostRequest, result: Result<CostEstimate, ApiError>) -> bool {
        if request.generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(estimate) => {
                self.estimate = Some(estimate);
                self.error = None;
            }
            Err(err) => {
                self.estimate = None;
                self.error = Some(err.to_string());
            }
        }
        true
    }
}

/// Caption under the projected cost, naming the strategy by its wire key.
pub fn projected_caption(strategy: Strategy) -> String {
    format!("After {}", strategy.as_str())
}

/// Qualitative effort rating in the comparison table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn label(self) -> &'static str {
        match self {
            Complexity::Low => "Low",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Complexity::Low => "badge badge-completed",
            Complexity::Medium => "badge badge-analyzing",
            Complexity::High => "badge badge-in_progress",
        }
    }
}

/// One row of the static strategy comparison table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComparisonRow {
    pub strategy: Strategy,
    pub summary: &'static str,
    pub typical_savings: &'static str,
    pub complexity: Complexity,
}

/// Reference figures shown under the estimate; not derived from fetched data.
pub const STRATEGY_COMPARISON: [ComparisonRow; 5] = [
    ComparisonRow {
        strategy: Strategy::Rehost,
        summary: "Move as-is to cloud infrastructure",
        typical_savings: "~10%",
        complexity: Complexity::Low,
    },
    ComparisonRow {
        strategy: Strategy::Replatform,
        summary: "Minor optimizations during migration",
        typical_savings: "~25%",
        complexity: Complexity::Medium,
    },
    ComparisonRow {
        strategy: Strategy::Refactor,
        summary: "Rebuild as cloud-native / serverless",
        typical_savings: "~55%",
        complexity: Complexity::High,
    },
    ComparisonRow {
        strategy: Strategy::Repurchase,
        summary: "Replace with managed SaaS solution",
        typical_savings: "~30%",
        complexity: Complexity::Medium,
    },
    ComparisonRow {
        strategy: Strategy::Retire,
        summary: "Decommission unused workloads",
        typical_savings: "100%",
        complexity: Complexity::Low,
    },
];
