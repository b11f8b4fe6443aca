//! Inline error banner shown in place of, or above, page content.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="error-msg" role="alert">{message}</div> }
}
