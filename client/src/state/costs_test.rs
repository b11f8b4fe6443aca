use super::*;
use crate::util::format::{format_percent, format_usd};

fn estimate(current: f64, projected: f64, pct: f64, strategy: Strategy) -> CostEstimate {
    CostEstimate {
        current_monthly_estimate_usd: current,
        projected_monthly_estimate_usd: projected,
        estimated_monthly_savings_usd: current - projected,
        estimated_savings_pct: pct,
        resource_count: 5,
        strategy: Some(strategy),
    }
}

#[test]
fn default_selection_is_replatform() {
    let state = CostsState::default();
    assert_eq!(state.strategy, Strategy::Replatform);
    assert!(state.loading);
}

#[test]
fn each_selection_issues_one_request_for_that_strategy() {
    let mut state = CostsState::default();
    let mut generations = Vec::new();
    for strategy in Strategy::ALL {
        let request = state.select(strategy);
        assert_eq!(request.strategy, strategy);
        assert!(state.loading);
        generations.push(request.generation);

        assert!(state.apply(request, Ok(estimate(1000.0, 750.0, 25.0, strategy))));
        assert!(!state.loading);
        assert_eq!(state.estimate.as_ref().and_then(|e| e.strategy), Some(strategy));
    }
    generations.dedup();
    assert_eq!(generations.len(), Strategy::ALL.len());
}

#[test]
fn reselecting_a_strategy_fetches_again() {
    let mut state = CostsState::default();
    let first = state.select(Strategy::Rehost);
    state.apply(first, Ok(estimate(100.0, 90.0, 10.0, Strategy::Rehost)));
    state.select(Strategy::Retire);
    let again = state.select(Strategy::Rehost);
    assert_ne!(first, again);
    assert!(state.loading);
}

#[test]
fn stale_response_is_dropped() {
    let mut state = CostsState::default();
    let old = state.select(Strategy::Refactor);
    let current = state.select(Strategy::Retain);
    assert!(!state.apply(old, Ok(estimate(100.0, 45.0, 55.0, Strategy::Refactor))));
    assert!(state.loading);
    assert!(state.estimate.is_none());
    assert!(state.apply(current, Ok(estimate(100.0, 100.0, 0.0, Strategy::Retain))));
    assert_eq!(state.estimate.as_ref().and_then(|e| e.strategy), Some(Strategy::Retain));
}

#[test]
fn failed_fetch_clears_estimate_and_loading() {
    let mut state = CostsState::default();
    let ok = state.select(Strategy::Rehost);
    state.apply(ok, Ok(estimate(100.0, 90.0, 10.0, Strategy::Rehost)));
    let failing = state.select(Strategy::Refactor);
    assert!(state.apply(failing, Err(ApiError::Network("offline".into()))));
    assert!(!state.loading);
    assert!(state.estimate.is_none());
    assert_eq!(state.error.as_deref(), Some("network error: offline"));
}

#[test]
fn retire_example_renders_expected_figures() {
    let mut state = CostsState::default();
    let request = state.select(Strategy::Retire);
    let body = serde_json::json!({
        "current_monthly_estimate_usd": 1000,
        "projected_monthly_estimate_usd": 0,
        "estimated_monthly_savings_usd": 1000,
        "estimated_savings_pct": 100,
        "resource_count": 5
    });
    state.apply(request, Ok(serde_json::from_value(body).unwrap()));
    let shown = state.estimate.unwrap();
    assert_eq!(format_usd(shown.current_monthly_estimate_usd), "$1,000");
    assert_eq!(format_usd(shown.projected_monthly_estimate_usd), "$0");
    assert_eq!(format!("{}% reduction", format_percent(shown.estimated_savings_pct)), "100% reduction");
}

#[test]
fn comparison_table_is_static_reference_content() {
    let strategies: Vec<Strategy> = STRATEGY_COMPARISON.iter().map(|row| row.strategy).collect();
    assert_eq!(
        strategies,
        vec![Strategy::Rehost, Strategy::Replatform, Strategy::Refactor, Strategy::Repurchase, Strategy::Retire]
    );
    assert_eq!(STRATEGY_COMPARISON[2].typical_savings, "~55%");
    assert_eq!(STRATEGY_COMPARISON[2].complexity, Complexity::High);
    assert_eq!(Complexity::Medium.badge_class(), "badge badge-analyzing");
}

#[test]
fn projected_caption_names_strategy_by_wire_key() {
    assert_eq!(projected_caption(Strategy::Replatform), "After replatform");
    assert_eq!(projected_caption(Strategy::Retire), "After retire");
}
