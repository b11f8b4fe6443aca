//! Resource inventory state with a client-side type filter.
//!
//! The list and summary are fetched once per mount. Filtering is a pure
//! predicate over the fetched items and never triggers another request.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use indexmap::IndexMap;

use crate::net::error::ApiError;
use crate::net::types::{Page, Resource, ResourceCategory, ResourceSummary};
use crate::state::dashboard::non_zero_buckets;

#[derive(Clone, Debug, PartialEq)]
pub struct ResourcesState {
    pub items: Vec<Resource>,
    pub summary: Option<ResourceSummary>,
    /// Exact `resource_type` to show; `None` shows every type.
    pub filter: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ResourcesState {
    fn default() -> Self {
        Self { items: Vec::new(), summary: None, filter: None, loading: true, error: None }
    }
}

impl ResourcesState {
    /// Store the joined result of the list + summary fetches.
    pub fn apply(&mut self, result: Result<(Page<Resource>, ResourceSummary), ApiError>) {
        self.loading = false;
        match result {
            Ok((page, summary)) => {
                self.items = page.items;
                self.summary = Some(summary);
                self.error = None;
            }
            Err(err) => {
                self.items.clear();
                self.summary = None;
                self.error = Some(err.to_string());
            }
        }
    }

    /// Set the filter from a `<select>` value; the empty string clears it.
    pub fn set_filter(&mut self, raw: &str) {
        self.filter = if raw.is_empty() { None } else { Some(raw.to_owned()) };
    }

    pub fn visible(&self) -> Vec<&Resource> {
        match self.filter.as_deref() {
            Some(wanted) => self.items.iter().filter(|r| r.resource_type == wanted).collect(),
            None => self.items.iter().collect(),
        }
    }

    pub fn summary_cards(&self) -> Vec<(String, u64)> {
        self.summary.as_ref().map_or_else(Vec::new, |s| non_zero_buckets(&s.by_category))
    }
}

/// Count resources per category the same way the backend summary does,
/// with every category present even when empty, in `ResourceCategory::ALL` order.
pub fn count_by_category(items: &[Resource]) -> IndexMap<String, u64> {
    let mut counts: IndexMap<String, u64> =
        ResourceCategory::ALL.iter().map(|c| (c.as_str().to_owned(), 0)).collect();
    for resource in items {
        let category = ResourceCategory::for_type(&resource.resource_type);
        *counts.entry(category.as_str().to_owned()).or_default() += 1;
    }
    counts
}

/// Tag pairs rendered as `key: value` badge text.
pub fn tag_badges(resource: &Resource) -> Vec<String> {
    resource.tags.iter().map(|(k, v)| format!("{k}: {v}")).collect()
}
