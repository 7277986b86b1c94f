//! Shared types for the Novanest investor dashboard.
//!
//! Everything here is free of network I/O so that the terminal client and the
//! Leptos front-end (native and WASM) render the same view-state the same way.

pub mod card;
pub mod config;
pub mod credential;
pub mod error;
pub mod filter;
pub mod protocol;
pub mod routes;
pub mod view_state;

pub use card::StartupCard;
pub use credential::Credential;
pub use error::FetchError;
pub use filter::{Filter, FilterValue};
pub use protocol::{FounderRef, Startup};
pub use view_state::{DashboardView, RequestTicket, Settled, ViewState};
