//! Colored badge for a migration status.

use leptos::prelude::*;

use crate::net::types::MigrationStatus;

#[component]
pub fn StatusBadge(status: MigrationStatus) -> impl IntoView {
    let class = format!("badge badge-{}", status.as_str());
    view! { <span class=class>{status.label()}</span> }
}
