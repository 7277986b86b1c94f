//! Dashboard controller: owns the view-state and runs fetches against it.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{error, info, warn};

use novanest_common::{Credential, DashboardView, FetchError, Filter, Settled, ViewState};

use crate::fetcher::StartupSource;

/// View-state plus the source it is filled from.
///
/// Several fetches may be in flight at once (one per filter change); only the
/// most recently started one is allowed to write its result back.
pub struct Dashboard<S> {
    source: S,
    state: Mutex<ViewState>,
}

impl<S: StartupSource> Dashboard<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(ViewState::new()),
        }
    }

    /// Run one fetch with `filter` and hand its outcome to the view-state.
    ///
    /// Loading is set before the request goes out. A failure is logged and
    /// leaves the current list in place; it is never returned as an error.
    pub async fn fetch_startups(&self, credential: &Credential, filter: &Filter) -> Settled {
        let ticket = self.lock().begin();
        let result = self.source.list_startups(credential, filter).await;
        if let Err(e) = &result {
            log_fetch_failure(e);
        }

        let settled = self.lock().settle(ticket, result);
        if settled == Settled::Committed {
            info!("Showing {} startup(s)", self.lock().records().len());
        }
        settled
    }

    pub fn view(&self) -> DashboardView {
        self.lock().view()
    }

    /// Snapshot of the current view-state.
    pub fn state(&self) -> ViewState {
        self.lock().clone()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Diagnostics for a failed fetch. Every cause is handled the same way.
pub fn log_fetch_failure(e: &FetchError) {
    if e.is_auth() {
        warn!("Error fetching startups: {e} (token missing or expired?)");
    } else {
        error!("Error fetching startups: {e}");
    }
}
