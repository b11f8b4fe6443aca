//! Migrations page: list, create, advance status, delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every successful mutation is followed by a full list reload; rows are never
//! patched locally. Action buttons are disabled while a mutation is in flight.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::status_badge::StatusBadge;
use crate::net::types::{Migration, MigrationStatus, Strategy};
use crate::state::migrations::{MigrationsState, RowAction, row_actions};
use crate::util::format::format_created_date;
use crate::util::liveness::Liveness;

#[component]
pub fn MigrationsPage() -> impl IntoView {
    let state = RwSignal::new(MigrationsState::default());
    let liveness = Liveness::for_owner();

    reload(state, liveness.clone());

    let on_toggle_form = move |_| state.update(MigrationsState::toggle_form);

    let on_submit = Callback::new({
        let liveness = liveness.clone();
        move |()| submit_create(state, liveness.clone())
    });

    let on_advance = Callback::new({
        let liveness = liveness.clone();
        move |(id, next): (String, MigrationStatus)| advance_status(state, liveness.clone(), id, next)
    });
    let on_delete = Callback::new(move |id: String| remove(state, liveness.clone(), id));
    let busy = Signal::derive(move || state.with(|s| s.pending_mutation));

    view! {
        <Show
            when=move || !state.with(|s| s.loading)
            fallback=|| view! { <div class="loading">"Loading migrations..."</div> }
        >
            <div>
                <div class="page-header">
                    <h2>"Migrations"</h2>
                    <p>"Manage and track your cloud migration workloads"</p>
                </div>

                {move || state.with(|s| s.error.clone()).map(|message| view! { <ErrorBanner message=message/> })}

                <div class="toolbar">
                    <button class="btn btn-primary" on:click=on_toggle_form>
                        {move || state.with(MigrationsState::form_toggle_label)}
                    </button>
                </div>

                <Show when=move || state.with(|s| s.show_form)>
                    <MigrationForm state=state busy=busy on_submit=on_submit/>
                </Show>

                <div class="table-wrap">
                    <table>
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Strategy"</th>
                                <th>"Source"</th>
                                <th>"Target"</th>
                                <th>"Status"</th>
                                <th>"Created"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let items = state.with(|s| s.items.clone());
                                if items.is_empty() {
                                    return view! {
                                        <tr>
                                            <td colspan="7" class="table-empty">
                                                "No migrations yet. Create one to get started."
                                            </td>
                                        </tr>
                                    }
                                    .into_any();
                                }
                                items
                                    .into_iter()
                                    .map(|migration| {
                                        view! {
                                            <MigrationRow
                                                migration=migration
                                                busy=busy
                                                on_advance=on_advance
                                                on_delete=on_delete
                                            />
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn MigrationForm(state: RwSignal<MigrationsState>, busy: Signal<bool>, on_submit: Callback<()>) -> impl IntoView {
    view! {
        <form
            class="card migration-form"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <div class="form-row">
                <div class="form-group">
                    <label>"Migration Name"</label>
                    <input
                        required=true
                        placeholder="e.g. Migrate user-service to ECS"
                        prop:value=move || state.with(|s| s.draft.name.clone())
                        on:input=move |ev| state.update(|s| s.draft.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Strategy"</label>
                    <select
                        prop:value=move || state.with(|s| s.draft.strategy.as_str())
                        on:change=move |ev| {
                            if let Some(strategy) = Strategy::parse(&event_target_value(&ev)) {
                                state.update(|s| s.draft.strategy = strategy);
                            }
                        }
                    >
                        {Strategy::ALL
                            .into_iter()
                            .map(|strategy| {
                                view! {
                                    <option
                                        value=strategy.as_str()
                                        selected=move || state.with(|s| s.draft.strategy == strategy)
                                    >
                                        {strategy.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label>"Source Environment"</label>
                    <input
                        required=true
                        placeholder="e.g. on-prem-dc1"
                        prop:value=move || state.with(|s| s.draft.source_environment.clone())
                        on:input=move |ev| state.update(|s| s.draft.source_environment = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Target Environment"</label>
                    <input
                        required=true
                        placeholder="e.g. aws-us-east-1"
                        prop:value=move || state.with(|s| s.draft.target_environment.clone())
                        on:input=move |ev| state.update(|s| s.draft.target_environment = event_target_value(&ev))
                    />
                </div>
            </div>
            <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                "Create Migration"
            </button>
        </form>
    }
}

#[component]
fn MigrationRow(
    migration: Migration,
    busy: Signal<bool>,
    on_advance: Callback<(String, MigrationStatus)>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let actions = row_actions(&migration.status);
    let id = migration.id.clone();

    view! {
        <tr>
            <td>{migration.name}</td>
            <td>{migration.strategy.as_str()}</td>
            <td>{migration.source_environment}</td>
            <td>{migration.target_environment}</td>
            <td>
                <StatusBadge status=migration.status/>
            </td>
            <td>{format_created_date(&migration.created_at)}</td>
            <td class="row-actions">
                {actions
                    .into_iter()
                    .map(|action| {
                        let id = id.clone();
                        match action {
                            RowAction::Advance { to, label } => {
                                view! {
                                    <button
                                        class="btn btn-outline"
                                        disabled=move || busy.get()
                                        on:click=move |_| on_advance.run((id.clone(), to.clone()))
                                    >
                                        {label}
                                    </button>
                                }
                                    .into_any()
                            }
                            RowAction::Delete => {
                                view! {
                                    <button
                                        class="btn btn-danger"
                                        disabled=move || busy.get()
                                        on:click=move |_| on_delete.run(id.clone())
                                    >
                                        "Delete"
                                    </button>
                                }
                                    .into_any()
                            }
                        }
                    })
                    .collect_view()}
            </td>
        </tr>
    }
}

/// Invalidate the list and fetch it again.
fn reload(state: RwSignal<MigrationsState>, liveness: Liveness) {
    state.update(MigrationsState::begin_load);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::list_migrations(&crate::net::types::MigrationQuery::default()).await;
        if !liveness.is_alive() {
            return;
        }
        state.update(|s| s.apply_list(result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = liveness;
}

fn submit_create(state: RwSignal<MigrationsState>, liveness: Liveness) {
    let Some(Ok(draft)) = state.try_update(MigrationsState::begin_create) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::create_migration(&draft).await;
        if !liveness.is_alive() {
            return;
        }
        if state.try_update(|s| s.finish_create(result)).unwrap_or(false) {
            reload(state, liveness);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (draft, liveness);
}

fn advance_status(state: RwSignal<MigrationsState>, liveness: Liveness, id: String, next: MigrationStatus) {
    if !state.try_update(MigrationsState::begin_mutation).unwrap_or(false) {
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let patch = crate::net::types::MigrationPatch::status(next);
        let result = crate::net::api::update_migration(&id, &patch).await;
        if !liveness.is_alive() {
            return;
        }
        if state.try_update(|s| s.finish_mutation(result)).unwrap_or(false) {
            reload(state, liveness);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (liveness, id, next);
        state.update(|s| s.pending_mutation = false);
    }
}

fn remove(state: RwSignal<MigrationsState>, liveness: Liveness, id: String) {
    if !state.try_update(MigrationsState::begin_mutation).unwrap_or(false) {
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::delete_migration(&id).await;
        if !liveness.is_alive() {
            return;
        }
        if state.try_update(|s| s.finish_mutation(result)).unwrap_or(false) {
            reload(state, liveness);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (liveness, id);
        state.update(|s| s.pending_mutation = false);
    }
}
