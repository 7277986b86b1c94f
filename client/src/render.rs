//! Plain-text rendition of the dashboard for terminals.

use std::fmt;

use novanest_common::card::{LOAD_FAILED, NO_RESULTS, REFRESH_FAILED};
use novanest_common::routes::DASHBOARD_LINKS;
use novanest_common::{DashboardView, StartupCard};

pub const TITLE: &str = "Investor Dashboard";
pub const SPINNER: &str = "Loading startups…";

/// Terminal view of a [`DashboardView`]: the header links followed by exactly
/// one body.
pub struct TextView<'a>(pub &'a DashboardView);

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f)?;
        for link in DASHBOARD_LINKS {
            writeln!(f, "[{}] {}", link.label, link.href)?;
        }
        writeln!(f)?;

        match self.0 {
            DashboardView::Loading => writeln!(f, "{SPINNER}"),
            DashboardView::Empty => writeln!(f, "{NO_RESULTS}"),
            DashboardView::Failed { .. } => writeln!(f, "{LOAD_FAILED}"),
            DashboardView::Populated {
                cards,
                refresh_error,
            } => {
                for card in cards {
                    write_card(f, card)?;
                    writeln!(f)?;
                }
                if refresh_error.is_some() {
                    writeln!(f, "! {REFRESH_FAILED}")?;
                }
                Ok(())
            }
        }
    }
}

pub fn render(view: &DashboardView) -> String {
    TextView(view).to_string()
}

fn write_card(f: &mut fmt::Formatter<'_>, card: &StartupCard) -> fmt::Result {
    writeln!(f, "{}", card.title)?;
    writeln!(f, "  Founder: {}", card.founder)?;
    writeln!(f, "  Industry: {}", card.industry)?;
    writeln!(f, "  Stage: {}", card.stage)?;
    writeln!(f, "  Funding Goal: {}", card.funding_goal)?;
    writeln!(f, "  View Details: {}", card.detail_href)
}
