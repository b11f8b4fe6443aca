use super::*;
use crate::net::types::Strategy;

fn migration(id: &str, status: MigrationStatus) -> Migration {
    Migration {
        id: id.to_owned(),
        name: format!("migration {id}"),
        source_environment: "on-prem-dc1".to_owned(),
        target_environment: "aws-us-east-1".to_owned(),
        strategy: Strategy::Replatform,
        status,
        created_at: "2024-03-05T14:22:10+00:00".to_owned(),
        updated_at: None,
        started_at: None,
        completed_at: None,
        rollback_available: false,
    }
}

fn page(items: Vec<Migration>) -> Page<Migration> {
    let total = items.len() as u64;
    Page { items, total, limit: 50, offset: 0 }
}

fn filled_draft() -> MigrationDraft {
    MigrationDraft {
        name: "Migrate user-service to ECS".to_owned(),
        source_environment: "on-prem-dc1".to_owned(),
        target_environment: "aws-us-east-1".to_owned(),
        strategy: Strategy::Replatform,
    }
}

// =============================================================
// Row actions
// =============================================================

#[test]
fn pending_row_offers_start_and_delete() {
    assert_eq!(
        row_actions(&MigrationStatus::Pending),
        vec![RowAction::Advance { to: MigrationStatus::InProgress, label: "Start" }, RowAction::Delete]
    );
}

#[test]
fn in_progress_row_offers_complete_and_delete() {
    assert_eq!(
        row_actions(&MigrationStatus::InProgress),
        vec![RowAction::Advance { to: MigrationStatus::Completed, label: "Complete" }, RowAction::Delete]
    );
}

#[test]
fn completed_row_offers_only_delete() {
    assert_eq!(row_actions(&MigrationStatus::Completed), vec![RowAction::Delete]);
}

#[test]
fn every_status_offers_delete() {
    let statuses = [
        MigrationStatus::Pending,
        MigrationStatus::Analyzing,
        MigrationStatus::Ready,
        MigrationStatus::InProgress,
        MigrationStatus::Validating,
        MigrationStatus::Completed,
        MigrationStatus::Failed,
        MigrationStatus::RolledBack,
        MigrationStatus::Other("paused".into()),
    ];
    for status in statuses {
        assert!(row_actions(&status).contains(&RowAction::Delete), "{status} lacks Delete");
    }
}

// =============================================================
// Listing
// =============================================================

#[test]
fn default_state_is_loading_with_closed_form() {
    let state = MigrationsState::default();
    assert!(state.loading);
    assert!(!state.show_form);
    assert_eq!(state.draft.strategy, Strategy::Replatform);
    assert_eq!(state.form_toggle_label(), "+ New Migration");
}

#[test]
fn apply_list_replaces_previous_items() {
    let mut state = MigrationsState::default();
    state.apply_list(Ok(page(vec![migration("a", MigrationStatus::Pending)])));
    state.begin_load();
    state.apply_list(Ok(page(vec![migration("b", MigrationStatus::Completed)])));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "b");
}

#[test]
fn apply_list_failure_keeps_rows_and_clears_loading() {
    let mut state = MigrationsState::default();
    state.apply_list(Ok(page(vec![migration("a", MigrationStatus::Pending)])));
    state.begin_load();
    state.apply_list(Err(ApiError::Network("offline".into())));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("network error: offline"));
}

// =============================================================
// Create
// =============================================================

#[test]
fn toggle_form_flips_label() {
    let mut state = MigrationsState::default();
    state.toggle_form();
    assert!(state.show_form);
    assert_eq!(state.form_toggle_label(), "Cancel");
}

#[test]
fn begin_create_with_missing_field_sends_nothing() {
    let mut state = MigrationsState { show_form: true, ..MigrationsState::default() };
    state.draft = MigrationDraft { target_environment: String::new(), ..filled_draft() };
    assert_eq!(state.begin_create(), Err("Target environment is required."));
    assert!(!state.pending_mutation);
    assert!(state.show_form);
    assert_eq!(state.error.as_deref(), Some("Target environment is required."));
}

#[test]
fn successful_create_resets_form_and_requests_reload() {
    let mut state = MigrationsState { show_form: true, draft: filled_draft(), ..MigrationsState::default() };
    let submitted = state.begin_create().unwrap();
    assert_eq!(submitted, filled_draft());
    assert!(state.pending_mutation);

    let reload = state.finish_create(Ok(migration("new", MigrationStatus::Pending)));
    assert!(reload);
    assert!(!state.show_form);
    assert!(!state.pending_mutation);
    assert_eq!(state.draft, MigrationDraft::default());

    state.begin_load();
    state.apply_list(Ok(page(vec![migration("new", MigrationStatus::Pending)])));
    assert!(state.items.iter().any(|m| m.id == "new"));
}

#[test]
fn failed_create_keeps_form_open_with_values() {
    let mut state = MigrationsState { show_form: true, draft: filled_draft(), ..MigrationsState::default() };
    state.begin_create().unwrap();
    let reload = state.finish_create(Err(ApiError::from_status(400, r#"{"error": "bad strategy"}"#)));
    assert!(!reload);
    assert!(state.show_form);
    assert_eq!(state.draft, filled_draft());
    assert_eq!(state.error.as_deref(), Some("request failed (400): bad strategy"));
}

// =============================================================
// Mutation gating
// =============================================================

#[test]
fn second_mutation_is_refused_while_one_is_pending() {
    let mut state = MigrationsState { draft: filled_draft(), ..MigrationsState::default() };
    assert!(state.begin_mutation());
    assert!(!state.begin_mutation());
    assert_eq!(state.begin_create(), Err("Another change is still in progress."));
    assert!(state.finish_mutation(Ok(())));
    assert!(state.begin_mutation());
}

#[test]
fn failed_mutation_surfaces_error_without_reload() {
    let mut state = MigrationsState::default();
    assert!(state.begin_mutation());
    let reload = state.finish_mutation::<()>(Err(ApiError::from_status(404, r#"{"error": "Migration not found"}"#)));
    assert!(!reload);
    assert!(!state.pending_mutation);
    assert_eq!(state.error.as_deref(), Some("request failed (404): Migration not found"));
}
