//! Root Leptos application component with routing.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use novanest_common::config::Config;

use crate::pages::investor_dashboard::InvestorDashboard;

/// Client settings compiled into the bundle. The WASM side has no config
/// file, so the backend URL comes from the build environment.
pub fn client_config() -> Config {
    match option_env!("NOVANEST_API_BASE_URL") {
        Some(url) => Config::default().with_api_base_url(url),
        None => Config::default(),
    }
}

/// Document shell rendered by the server around `<App/>`.
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

/// The root `<App/>` component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(client_config());

    view! {
        <Stylesheet id="leptos" href="/pkg/novanest-web.css"/>
        <Title text="Novanest – Investor Dashboard"/>
        <Meta name="description" content="Browse and filter startups raising funds on Novanest"/>

        <Router>
            <main class="main-content">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=InvestorDashboard/>
                    <Route path=path!("/dashboard") view=InvestorDashboard/>
                </Routes>
            </main>
        </Router>
    }
}
