//! Dashboard view-state: the last good record list, a loading flag, and the
//! request sequencing that keeps stale responses out.
//!
//! Every fetch takes a [`RequestTicket`] from [`ViewState::begin`] before it
//! goes out. Only the most recently issued ticket may write back; anything
//! older is discarded when it arrives, so responses landing out of order can
//! never overwrite newer results.

use tracing::debug;

use crate::card::StartupCard;
use crate::error::FetchError;
use crate::protocol::Startup;

/// Sequence number handed out when a fetch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn seq(self) -> u64 {
        self.0
    }
}

/// Outcome of handing a completed fetch back to the view-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// Records replaced, loading cleared.
    Committed,
    /// Failure recorded, records kept, loading cleared.
    Failed,
    /// A newer request was issued meanwhile; nothing changed.
    Superseded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    records: Vec<Startup>,
    is_loading: bool,
    last_error: Option<FetchError>,
    issued: u64,
}

impl Default for ViewState {
    /// Empty list, loading: the dashboard always opens on the spinner.
    fn default() -> Self {
        Self {
            records: Vec::new(),
            is_loading: true,
            last_error: None,
            issued: 0,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch as started. Must be called before the request is sent.
    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        self.is_loading = true;
        RequestTicket(self.issued)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Replace the list with a successful response.
    pub fn commit(&mut self, ticket: RequestTicket, records: Vec<Startup>) -> Settled {
        if !self.is_latest(ticket) {
            debug!(
                "Discarding response #{} (latest is #{})",
                ticket.0, self.issued
            );
            return Settled::Superseded;
        }
        self.records = records;
        self.last_error = None;
        self.is_loading = false;
        Settled::Committed
    }

    /// Record a failed fetch. The current list is left as it is.
    pub fn fail(&mut self, ticket: RequestTicket, error: FetchError) -> Settled {
        if !self.is_latest(ticket) {
            debug!(
                "Discarding failure of #{} (latest is #{}): {error}",
                ticket.0, self.issued
            );
            return Settled::Superseded;
        }
        self.last_error = Some(error);
        self.is_loading = false;
        Settled::Failed
    }

    pub fn settle(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<Startup>, FetchError>,
    ) -> Settled {
        match result {
            Ok(records) => self.commit(ticket, records),
            Err(e) => self.fail(ticket, e),
        }
    }

    pub fn records(&self) -> &[Startup] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Error of the latest settled fetch, if it failed.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Which of the mutually exclusive bodies to render.
    pub fn view(&self) -> DashboardView {
        if self.is_loading {
            return DashboardView::Loading;
        }
        if !self.records.is_empty() {
            return DashboardView::Populated {
                cards: self.records.iter().map(StartupCard::from).collect(),
                refresh_error: self.last_error.clone(),
            };
        }
        match &self.last_error {
            Some(error) => DashboardView::Failed {
                error: error.clone(),
            },
            None => DashboardView::Empty,
        }
    }
}

/// The dashboard body, derived purely from [`ViewState`].
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Loading,
    /// Successful fetch, no records.
    Empty,
    /// Fetch failed with no earlier list to fall back on.
    Failed { error: FetchError },
    /// One card per record in server order. `refresh_error` is set when the
    /// latest fetch failed and these are the last good results.
    Populated {
        cards: Vec<StartupCard>,
        refresh_error: Option<FetchError>,
    },
}

impl DashboardView {
    pub fn card_count(&self) -> usize {
        match self {
            DashboardView::Populated { cards, .. } => cards.len(),
            _ => 0,
        }
    }
}
