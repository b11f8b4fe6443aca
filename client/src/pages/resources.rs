//! Resource inventory page with a client-side type filter.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::stat_card::StatCard;
use crate::net::types::{Resource, ResourceType, resource_type_label};
use crate::state::resources::{ResourcesState, tag_badges};
use crate::util::liveness::Liveness;

#[component]
pub fn ResourcesPage() -> impl IntoView {
    let state = RwSignal::new(ResourcesState::default());
    let liveness = Liveness::for_owner();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api;
        use crate::net::types::ResourceQuery;

        let result = futures::future::try_join(api::list_resources(&ResourceQuery::default()), api::resource_summary()).await;
        if !liveness.is_alive() {
            return;
        }
        state.update(|s| s.apply(result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = liveness;

    view! {
        <Show
            when=move || !state.with(|s| s.loading)
            fallback=|| view! { <div class="loading">"Discovering resources..."</div> }
        >
            <div>
                <div class="page-header">
                    <h2>"Resource Inventory"</h2>
                    <p>"Discovered cloud resources across your environments"</p>
                </div>
                {move || state.with(|s| s.error.clone()).map(|message| view! { <ErrorBanner message=message/> })}
                <SummaryCards state=state/>
                <div class="toolbar">
                    <select
                        class="filter-select"
                        prop:value=move || state.with(|s| s.filter.clone().unwrap_or_default())
                        on:change=move |ev| state.update(|s| s.set_filter(&event_target_value(&ev)))
                    >
                        <option value="">"All Types"</option>
                        {ResourceType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <ResourceTable state=state/>
            </div>
        </Show>
    }
}

#[component]
fn SummaryCards(state: RwSignal<ResourcesState>) -> impl IntoView {
    let (total, cards) =
        state.with_untracked(|s| (s.summary.as_ref().map(|summary| summary.total), s.summary_cards()));

    total.map(|total| {
        view! {
            <div class="card-grid">
                <StatCard label="Total Discovered" value=total.to_string()/>
                {cards
                    .into_iter()
                    .map(|(label, count)| view! { <StatCard label=label value=count.to_string()/> })
                    .collect_view()}
            </div>
        }
    })
}

#[component]
fn ResourceTable(state: RwSignal<ResourcesState>) -> impl IntoView {
    view! {
        <div class="table-wrap">
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Type"</th>
                        <th>"Resource ID"</th>
                        <th>"Region"</th>
                        <th>"Tags"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state.with(|s| {
                            s.visible()
                                .into_iter()
                                .cloned()
                                .map(|resource| view! { <ResourceRow resource=resource/> })
                                .collect_view()
                        })
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ResourceRow(resource: Resource) -> impl IntoView {
    let badges = tag_badges(&resource);
    view! {
        <tr>
            <td>{resource.name}</td>
            <td>{resource_type_label(&resource.resource_type)}</td>
            <td class="mono">{resource.resource_id}</td>
            <td>{resource.region}</td>
            <td>
                {badges
                    .into_iter()
                    .map(|badge| view! { <span class="badge badge-tag badge-analyzing">{badge}</span> })
                    .collect_view()}
            </td>
        </tr>
    }
}
