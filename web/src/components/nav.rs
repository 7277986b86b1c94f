//! Navigation links shown above the dashboard body.

use leptos::prelude::*;

use novanest_common::routes::DASHBOARD_LINKS;

/// "Browse All Startups" and "Search Startups", rendered in every state.
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="dashboard-links">
            {DASHBOARD_LINKS
                .into_iter()
                .map(|link| view! { <a href=link.href class="nav-link">{link.label}</a> })
                .collect_view()}
        </nav>
    }
}
