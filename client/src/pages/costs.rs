//! Cost estimator page: strategy picker, estimate cards, comparison table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each strategy click issues one estimate request. Responses are matched to
//! the selection that issued them; anything older is logged and dropped.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::stat_card::StatCard;
use crate::net::types::{CostEstimate, Strategy};
use crate::state::costs::{CostsState, STRATEGY_COMPARISON, projected_caption};
use crate::util::format::{format_percent, format_usd};
use crate::util::liveness::Liveness;

#[component]
pub fn CostsPage() -> impl IntoView {
    let state = RwSignal::new(CostsState::default());
    let liveness = Liveness::for_owner();

    let choose = move |strategy: Strategy| fetch_estimate(state, liveness.clone(), strategy);
    choose(Strategy::default());

    view! {
        <div>
            <div class="page-header">
                <h2>"Cost Estimator"</h2>
                <p>"Compare projected monthly spend across migration strategies"</p>
            </div>

            <div class="strategy-picker">
                {Strategy::ALL
                    .into_iter()
                    .map(|strategy| {
                        let choose = choose.clone();
                        view! {
                            <button
                                class="strategy-btn"
                                class:active=move || state.with(|s| s.strategy == strategy)
                                title=strategy.description()
                                on:click=move |_| choose(strategy)
                            >
                                {strategy.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                let current = state.get();
                if current.loading {
                    return view! { <div class="loading">"Calculating costs..."</div> }.into_any();
                }
                if let Some(message) = current.error {
                    return view! { <ErrorBanner message=message/> }.into_any();
                }
                match current.estimate {
                    Some(estimate) => view! { <EstimateCards estimate=estimate strategy=current.strategy/> }.into_any(),
                    None => ().into_any(),
                }
            }}

            <ComparisonTable/>
        </div>
    }
}

#[component]
fn EstimateCards(estimate: CostEstimate, strategy: Strategy) -> impl IntoView {
    view! {
        <div class="card-grid">
            <StatCard
                label="Current Monthly Cost"
                value=format_usd(estimate.current_monthly_estimate_usd)
                sub=format!("{} resources", estimate.resource_count)
            />
            <StatCard
                label="Projected Monthly Cost"
                value=format_usd(estimate.projected_monthly_estimate_usd)
                sub=projected_caption(strategy)
            />
            <StatCard
                label="Monthly Savings"
                value=format_usd(estimate.estimated_monthly_savings_usd)
                sub=format!("{}% reduction", format_percent(estimate.estimated_savings_pct))
                highlight=true
            />
        </div>
    }
}

#[component]
fn ComparisonTable() -> impl IntoView {
    view! {
        <div class="section">
            <h3 class="section-title">"Strategy Comparison"</h3>
            <div class="table-wrap">
                <table>
                    <thead>
                        <tr>
                            <th>"Strategy"</th>
                            <th>"Description"</th>
                            <th>"Typical Savings"</th>
                            <th>"Complexity"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {STRATEGY_COMPARISON
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.strategy.label()}</td>
                                        <td>{row.summary}</td>
                                        <td>{row.typical_savings}</td>
                                        <td>
                                            <span class=row.complexity.badge_class()>{row.complexity.label()}</span>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn fetch_estimate(state: RwSignal<CostsState>, liveness: Liveness, strategy: Strategy) {
    let Some(request) = state.try_update(|s| s.select(strategy)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::cost_estimate(request.strategy).await;
        if !liveness.is_alive() {
            return;
        }
        let applied = state.try_update(|s| s.apply(request, result)).unwrap_or(false);
        if !applied {
            leptos::logging::log!("dropped stale {} estimate", request.strategy);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (request, liveness);
}
