//! Sidebar navigation built from the route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The screen list is passed in by `App`, so the sidebar and the router are
//! driven by the same table rather than a global router instance.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::Screen;

#[component]
pub fn NavSidebar(screens: &'static [Screen]) -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar-brand">
                <h1>"CloudMigrate"</h1>
                <span class="brand-tag">"PRO"</span>
            </div>
            <ul class="nav-links">
                {screens
                    .iter()
                    .map(|screen| {
                        view! {
                            <li>
                                <A href=screen.href() exact=screen.is_root()>
                                    {screen.label()}
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="sidebar-footer">
                <p>{concat!("v", env!("CARGO_PKG_VERSION"))}</p>
            </div>
        </nav>
    }
}
