//! Dashboard page: migration and resource totals plus a replatform cost snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It dispatches the aggregate and cost requests
//! together and renders only once both have settled.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::stat_card::StatCard;
use crate::net::types::{CostEstimate, DashboardSummary};
use crate::state::dashboard::DashboardState;
use crate::util::format::{format_percent, format_usd};
use crate::util::liveness::Liveness;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());
    let liveness = Liveness::for_owner();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api;
        use crate::state::dashboard::DASHBOARD_COST_STRATEGY;

        let result = futures::future::try_join(api::dashboard(), api::cost_estimate(DASHBOARD_COST_STRATEGY)).await;
        if !liveness.is_alive() {
            return;
        }
        state.update(|s| s.apply(result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = liveness;

    view! {
        {move || {
            let current = state.get();
            if current.loading {
                return view! { <div class="loading">"Loading dashboard..."</div> }.into_any();
            }
            if let Some(message) = current.error.clone() {
                return view! { <ErrorBanner message=message/> }.into_any();
            }
            let status_cards = current.status_cards();
            let category_cards = current.category_cards();
            let (Some(summary), costs) = (current.summary, current.costs) else {
                return ().into_any();
            };
            view! {
                <div>
                    <div class="page-header">
                        <h2>"Dashboard"</h2>
                        <p>"Overview of your cloud migration status"</p>
                    </div>
                    <MigrationSummary summary=summary.clone() status_cards=status_cards/>
                    <ResourceSummaryCards total=summary.resources.total category_cards=category_cards/>
                    {costs.map(|costs| view! { <CostSnapshot costs=costs/> })}
                </div>
            }
            .into_any()
        }}
    }
}

#[component]
fn MigrationSummary(summary: DashboardSummary, status_cards: Vec<(String, u64)>) -> impl IntoView {
    view! {
        <div class="section">
            <h3 class="section-title">"Migration Summary"</h3>
            <div class="card-grid">
                <StatCard label="Total Migrations" value=summary.migrations.total.to_string()/>
                {status_cards
                    .into_iter()
                    .map(|(label, count)| view! { <StatCard label=label value=count.to_string()/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ResourceSummaryCards(total: u64, category_cards: Vec<(String, u64)>) -> impl IntoView {
    view! {
        <div class="section">
            <h3 class="section-title">"Resource Inventory"</h3>
            <div class="card-grid">
                <StatCard label="Total Resources" value=total.to_string()/>
                {category_cards
                    .into_iter()
                    .map(|(label, count)| view! { <StatCard label=label value=count.to_string()/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CostSnapshot(costs: CostEstimate) -> impl IntoView {
    view! {
        <div class="section">
            <h3 class="section-title">"Cost Snapshot (Replatform)"</h3>
            <div class="card-grid">
                <StatCard label="Current Monthly" value=format_usd(costs.current_monthly_estimate_usd)/>
                <StatCard label="Projected Monthly" value=format_usd(costs.projected_monthly_estimate_usd)/>
                <StatCard
                    label="Estimated Savings"
                    value=format!("{}%", format_percent(costs.estimated_savings_pct))
                    sub=format!("{}/mo", format_usd(costs.estimated_monthly_savings_usd))
                    highlight=true
                />
            </div>
        </div>
    }
}
