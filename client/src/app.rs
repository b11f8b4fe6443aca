//! Root application component with the route table and SSR shell.
//!
//! DESIGN
//! ======
//! `Screen` is the single path-to-view table. The sidebar renders from it and
//! the router declares one `Route` per entry; there is no shared state between
//! screens, so no contexts are provided here.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_sidebar::NavSidebar;
use crate::pages::{costs::CostsPage, dashboard::DashboardPage, migrations::MigrationsPage, resources::ResourcesPage};

/// A top-level screen reachable from the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Migrations,
    Resources,
    Costs,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Dashboard, Screen::Migrations, Screen::Resources, Screen::Costs];

    /// Router segment without the leading slash.
    pub fn segment(self) -> &'static str {
        match self {
            Screen::Dashboard => "",
            Screen::Migrations => "migrations",
            Screen::Resources => "resources",
            Screen::Costs => "costs",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Screen::Dashboard => "/",
            Screen::Migrations => "/migrations",
            Screen::Resources => "/resources",
            Screen::Costs => "/costs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Migrations => "Migrations",
            Screen::Resources => "Resources",
            Screen::Costs => "Cost Estimator",
        }
    }

    pub fn is_root(self) -> bool {
        matches!(self, Screen::Dashboard)
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/cloudmigrate.css"/>
        <Title text="CloudMigrate"/>

        <Router>
            <div class="app">
                <NavSidebar screens=&Screen::ALL/>
                <main class="content">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment(Screen::Dashboard.segment()) view=DashboardPage/>
                        <Route path=StaticSegment(Screen::Migrations.segment()) view=MigrationsPage/>
                        <Route path=StaticSegment(Screen::Resources.segment()) view=ResourcesPage/>
                        <Route path=StaticSegment(Screen::Costs.segment()) view=CostsPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
