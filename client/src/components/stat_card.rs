//! Summary card used for counts and cost figures.

use leptos::prelude::*;

/// A labelled figure with an optional caption underneath.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] sub: Option<String>,
    /// Render with the savings accent.
    #[prop(optional)]
    highlight: bool,
) -> impl IntoView {
    view! {
        <div class="card" class:cost-card=highlight>
            <div class="card-label">{label}</div>
            <div class="card-value" class:cost-savings=highlight>{value}</div>
            {sub.map(|sub| view! { <div class="card-sub">{sub}</div> })}
        </div>
    }
}
