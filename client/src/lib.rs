//! Novanest dashboard client – fetches startups from the backend and keeps
//! the dashboard view-state.

pub mod dashboard;
pub mod fetcher;
pub mod render;

pub use dashboard::Dashboard;
pub use fetcher::{HttpStartupSource, StartupSource};
