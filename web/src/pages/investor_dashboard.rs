//! Investor dashboard – fetches startups, lets the user filter them, and
//! shows the result as a grid of cards.

use leptos::prelude::*;
use leptos::task::spawn_local;

use novanest_client::{HttpStartupSource, StartupSource};
use novanest_common::card::{LOAD_FAILED, NO_RESULTS, REFRESH_FAILED};
use novanest_common::config::Config;
use novanest_common::{DashboardView, FetchError, Filter, StartupCard as CardModel, ViewState};

use crate::app::client_config;
use crate::components::filter_bar::FilterBar;
use crate::components::nav::Nav;
use crate::components::startup_card::StartupCard;
use crate::storage::stored_credential;

// ─── Fetch ───────────────────────────────────────────────────────────────────

/// Start a fetch for `filter`. Loading is set before the request leaves; the
/// result is dropped if a newer fetch started meanwhile or the page is gone.
fn spawn_fetch(state: RwSignal<ViewState>, config: Config, filter: Filter) {
    let Some(ticket) = state.try_update(|s| s.begin()) else {
        return;
    };
    let credential = stored_credential(&config.token_storage_key);

    spawn_local(async move {
        let result = match HttpStartupSource::new(&config) {
            Ok(source) => source.list_startups(&credential, &filter).await,
            Err(e) => Err(FetchError::Network(format!("{e:#}"))),
        };
        if let Err(e) = &result {
            if e.is_auth() {
                leptos::logging::warn!("Error fetching startups: {e} (token missing or expired?)");
            } else {
                leptos::logging::error!("Error fetching startups: {e}");
            }
        }
        state.try_update(|s| s.settle(ticket, result));
    });
}

// ─── Page component ──────────────────────────────────────────────────────────

#[component]
pub fn InvestorDashboard() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_else(client_config);
    let state = RwSignal::new(ViewState::new());

    let fetch = move |filter: Filter| spawn_fetch(state, config.clone(), filter);

    // Initial load without filters (effects only run in the browser).
    Effect::new({
        let fetch = fetch.clone();
        move |_| fetch(Filter::new())
    });

    let on_filter = Callback::new(move |filter: Filter| fetch(filter));

    view! {
        <div class="dashboard-page">
            <h2 class="dashboard-title">"Investor Dashboard"</h2>

            <div class="intro-panel">
                <h3>"Find Your Next Investment"</h3>
                <p>"Browse through startups and filter by industry, stage, and funding goals."</p>
            </div>

            <FilterBar on_filter=on_filter/>
            <Nav/>

            {move || match state.with(ViewState::view) {
                DashboardView::Loading => view! { <Spinner/> }.into_any(),
                DashboardView::Empty => view! {
                    <div class="no-results">{NO_RESULTS}</div>
                }.into_any(),
                DashboardView::Failed { .. } => view! {
                    <div class="error">{LOAD_FAILED}</div>
                }.into_any(),
                DashboardView::Populated { cards, refresh_error } => view! {
                    {refresh_error.map(|_| view! { <p class="refresh-error">{REFRESH_FAILED}</p> })}
                    <div class="startup-grid">
                        <For
                            each=move || cards.clone()
                            key=|card| card.id.clone()
                            children=move |card: CardModel| view! { <StartupCard card=card/> }
                        />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class="spinner" role="status" aria-label="Loading"></div>
        </div>
    }
}
