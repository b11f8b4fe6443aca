//! Migration list state: fetched rows, create form, and mutation gating.
//!
//! DESIGN
//! ======
//! The list is never patched locally. Every successful mutation reports that
//! the list must be reloaded, and the page re-fetches it from the backend.
//! Only one mutation may be in flight at a time; while one is pending every
//! mutating action is refused, so a double click or a delete racing a status
//! change cannot send a second request.

#[cfg(test)]
#[path = "migrations_test.rs"]
mod migrations_test;

use crate::net::error::ApiError;
use crate::net::types::{Migration, MigrationDraft, MigrationStatus, Page};

const MUTATION_BUSY_MESSAGE: &str = "Another change is still in progress.";

#[derive(Clone, Debug, PartialEq)]
pub struct MigrationsState {
    pub items: Vec<Migration>,
    pub loading: bool,
    pub error: Option<String>,
    pub show_form: bool,
    pub draft: MigrationDraft,
    pub pending_mutation: bool,
}

impl Default for MigrationsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            show_form: false,
            draft: MigrationDraft::default(),
            pending_mutation: false,
        }
    }
}

/// An action button offered on a migration row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowAction {
    Advance { to: MigrationStatus, label: &'static str },
    Delete,
}

/// Actions for a row in `status`: the forward transition (if any), then Delete.
pub fn row_actions(status: &MigrationStatus) -> Vec<RowAction> {
    let mut actions = Vec::with_capacity(2);
    if let (Some(to), Some(label)) = (status.next(), status.advance_label()) {
        actions.push(RowAction::Advance { to, label });
    }
    actions.push(RowAction::Delete);
    actions
}

impl MigrationsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replace the list with a fresh fetch.
    pub fn apply_list(&mut self, result: Result<Page<Migration>, ApiError>) {
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    pub fn toggle_form(&mut self) {
        self.show_form = !self.show_form;
    }

    pub fn form_toggle_label(&self) -> &'static str {
        if self.show_form { "Cancel" } else { "+ New Migration" }
    }

    /// Validate the draft and claim the mutation slot.
    ///
    /// # Errors
    ///
    /// Returns the message shown to the user when the draft is incomplete or
    /// another mutation is in flight. No request must be sent in that case.
    pub fn begin_create(&mut self) -> Result<MigrationDraft, &'static str> {
        if self.pending_mutation {
            return Err(MUTATION_BUSY_MESSAGE);
        }
        match self.draft.validate() {
            Ok(valid) => {
                self.pending_mutation = true;
                Ok(valid)
            }
            Err(message) => {
                self.error = Some(message.to_owned());
                Err(message)
            }
        }
    }

    /// Settle a create request. Returns `true` when the list must be reloaded.
    pub fn finish_create(&mut self, result: Result<Migration, ApiError>) -> bool {
        self.pending_mutation = false;
        match result {
            Ok(_) => {
                self.draft = MigrationDraft::default();
                self.show_form = false;
                self.error = None;
                true
            }
            Err(err) => {
                self.error = Some(err.to_string());
                false
            }
        }
    }

    /// Claim the mutation slot for a status change or delete.
    pub fn begin_mutation(&mut self) -> bool {
        if self.pending_mutation {
            return false;
        }
        self.pending_mutation = true;
        true
    }

    /// Settle a status change or delete. Returns `true` when the list must be reloaded.
    pub fn finish_mutation<T>(&mut self, result: Result<T, ApiError>) -> bool {
        self.pending_mutation = false;
        match result {
            Ok(_) => true,
            Err(err) => {
                self.error = Some(err.to_string());
                false
            }
        }
    }
}
