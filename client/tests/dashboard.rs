//! `Dashboard` view-state transitions driven by a scripted source whose
//! replies are released by the test, in whatever order it chooses.
//!
//! `join!(biased; ..)` polls in argument order, so the first argument always
//! takes the older ticket.

use std::cell::Cell;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tokio::sync::oneshot;

use novanest_client::{Dashboard, StartupSource};
use novanest_common::{Credential, DashboardView, FetchError, Filter, Settled, Startup};

type Reply = Result<Vec<Startup>, FetchError>;

struct Scripted {
    replies: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
    started: AtomicUsize,
}

impl Scripted {
    fn new(replies: Vec<oneshot::Receiver<Reply>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            started: AtomicUsize::new(0),
        }
    }

    /// Source whose replies are all known up front.
    fn ready(replies: Vec<Reply>) -> Self {
        let receivers = replies
            .into_iter()
            .map(|reply| {
                let (tx, rx) = oneshot::channel();
                tx.send(reply).unwrap();
                rx
            })
            .collect();
        Self::new(receivers)
    }

    fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }
}

impl StartupSource for Scripted {
    async fn list_startups(&self, _credential: &Credential, _filter: &Filter) -> Reply {
        let rx = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected fetch");
        self.started.fetch_add(1, Ordering::SeqCst);
        rx.await.expect("reply sender dropped")
    }
}

fn startups(ids: &[&str]) -> Vec<Startup> {
    ids.iter()
        .map(|id| {
            let mut s = Startup::new(*id);
            s.name = Some(format!("Startup {id}"));
            s
        })
        .collect()
}

fn card_ids(view: &DashboardView) -> Vec<String> {
    match view {
        DashboardView::Populated { cards, .. } => cards.iter().map(|c| c.id.clone()).collect(),
        other => panic!("expected populated view, got {other:?}"),
    }
}

async fn until(cond: impl Fn() -> bool) {
    while !cond() {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_initial_fetch_populates_in_server_order() {
    let dashboard = Dashboard::new(Scripted::ready(vec![Ok(startups(&["c", "a", "b"]))]));
    let token = Credential::bearer("t0k");

    assert_eq!(dashboard.view(), DashboardView::Loading);
    let settled = dashboard.fetch_startups(&token, &Filter::new()).await;

    assert_eq!(settled, Settled::Committed);
    let view = dashboard.view();
    assert_eq!(view.card_count(), 3);
    assert_eq!(card_ids(&view), ["c", "a", "b"]);
}

#[tokio::test]
async fn test_empty_result_shows_no_results() {
    let dashboard = Dashboard::new(Scripted::ready(vec![Ok(vec![])]));
    dashboard
        .fetch_startups(&Credential::missing(), &Filter::new())
        .await;
    assert_eq!(dashboard.view(), DashboardView::Empty);
}

#[tokio::test]
async fn test_failed_refetch_keeps_last_good_list() {
    let dashboard = Dashboard::new(Scripted::ready(vec![
        Ok(startups(&["a1", "a2", "a3"])),
        Err(FetchError::Status { status: 503 }),
    ]));
    let token = Credential::bearer("t0k");

    dashboard.fetch_startups(&token, &Filter::new()).await;
    let settled = dashboard
        .fetch_startups(&token, &Filter::new().with("industry", "AI"))
        .await;

    assert_eq!(settled, Settled::Failed);
    let state = dashboard.state();
    assert!(!state.is_loading());
    let view = state.view();
    assert_eq!(card_ids(&view), ["a1", "a2", "a3"]);
    assert!(matches!(
        view,
        DashboardView::Populated {
            refresh_error: Some(FetchError::Status { status: 503 }),
            ..
        }
    ));
}

#[tokio::test]
async fn test_first_fetch_failure_shows_error() {
    let dashboard = Dashboard::new(Scripted::ready(vec![Err(FetchError::Network(
        "connection refused".into(),
    ))]));
    dashboard
        .fetch_startups(&Credential::bearer("t0k"), &Filter::new())
        .await;
    assert!(matches!(dashboard.view(), DashboardView::Failed { .. }));
}

#[tokio::test]
async fn test_loading_visible_for_whole_request() {
    let (tx, rx) = oneshot::channel();
    let dashboard = Dashboard::new(Scripted::new(vec![rx]));
    let token = Credential::bearer("t0k");

    let filter = Filter::new();
    let fetch = dashboard.fetch_startups(&token, &filter);
    let driver = async {
        until(|| dashboard.source().started() == 1).await;
        assert_eq!(dashboard.view(), DashboardView::Loading);
        tx.send(Ok(startups(&["x"]))).unwrap();
    };
    let (settled, ()) = tokio::join!(biased; fetch, driver);

    assert_eq!(settled, Settled::Committed);
    assert_eq!(card_ids(&dashboard.view()), ["x"]);
}

#[tokio::test]
async fn test_slow_earlier_response_cannot_overwrite_newer() {
    let (tx_a, rx_a) = oneshot::channel();
    let (tx_b, rx_b) = oneshot::channel();
    let dashboard = Dashboard::new(Scripted::new(vec![rx_a, rx_b]));
    let token = Credential::bearer("t0k");
    let fintech = Filter::new().with("industry", "Fintech");
    let health = Filter::new().with("industry", "Health");

    let driver = async {
        until(|| dashboard.source().started() == 2).await;
        tx_b.send(Ok(startups(&["health"]))).unwrap();
        until(|| !dashboard.state().is_loading()).await;
        tx_a.send(Ok(startups(&["fintech"]))).unwrap();
    };
    let (a, b, ()) = tokio::join!(
        biased;
        dashboard.fetch_startups(&token, &fintech),
        dashboard.fetch_startups(&token, &health),
        driver
    );

    assert_eq!(a, Settled::Superseded);
    assert_eq!(b, Settled::Committed);
    assert_eq!(card_ids(&dashboard.view()), ["health"]);
}

#[tokio::test]
async fn test_loading_held_until_latest_request_settles() {
    let (tx_a, rx_a) = oneshot::channel();
    let (tx_b, rx_b) = oneshot::channel();
    let dashboard = Dashboard::new(Scripted::new(vec![rx_a, rx_b]));
    let token = Credential::bearer("t0k");
    let seed = Filter::new().with("stage", "Seed");
    let first_done = Cell::new(false);

    let first = async {
        let settled = dashboard.fetch_startups(&token, &Filter::new()).await;
        first_done.set(true);
        settled
    };
    let second = dashboard.fetch_startups(&token, &seed);
    let driver = async {
        until(|| dashboard.source().started() == 2).await;
        tx_a.send(Err(FetchError::Decode("truncated".into()))).unwrap();
        until(|| first_done.get()).await;
        assert_eq!(dashboard.view(), DashboardView::Loading);
        tx_b.send(Ok(vec![])).unwrap();
    };
    let (a, b, ()) = tokio::join!(biased; first, second, driver);

    assert_eq!(a, Settled::Superseded);
    assert_eq!(b, Settled::Committed);
    assert_eq!(dashboard.view(), DashboardView::Empty);
}
