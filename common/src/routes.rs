//! Client-side routes produced by the dashboard.
//!
//! The views behind these paths live elsewhere; the dashboard only links to
//! them.

pub const DASHBOARD: &str = "/";
pub const BROWSE_ALL: &str = "/pitchdeck";
pub const SEARCH: &str = "/startups/search";

/// Detail view of one startup.
pub fn startup_detail(id: &str) -> String {
    format!("/startups/{}", urlencoded(id))
}

/// Percent-encode a single path segment.
fn urlencoded(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// A static navigation affordance rendered above the dashboard body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// The two links always shown, regardless of loading or result state.
pub const DASHBOARD_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Browse All Startups",
        href: BROWSE_ALL,
    },
    NavLink {
        label: "Search Startups",
        href: SEARCH,
    },
];
