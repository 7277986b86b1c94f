//! Browser-side credential lookup.
//!
//! This is the only place that touches local storage; the result is passed
//! to the fetcher explicitly.

use novanest_common::Credential;

/// Read the bearer token stored under `key`. Missing storage or a missing
/// entry yields an empty credential rather than an error.
#[cfg(feature = "hydrate")]
pub fn stored_credential(key: &str) -> Credential {
    let token = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten());
    if token.is_none() {
        leptos::logging::warn!("No token under `{key}` in local storage");
    }
    Credential::from_stored(token)
}

/// Off the browser there is no local storage.
#[cfg(not(feature = "hydrate"))]
pub fn stored_credential(_key: &str) -> Credential {
    Credential::missing()
}
