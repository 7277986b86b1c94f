//! Bearer credential passed explicitly to every fetch.

use std::fmt;

/// Key under which the token is persisted (browser local storage, token file).
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// A bearer token, possibly missing.
///
/// A missing token is still sent as `Bearer ` with an empty value; the
/// backend decides what to do with it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    token: Option<String>,
}

impl Credential {
    pub fn bearer(token: impl Into<String>) -> Self {
        let token = token.into();
        let token = token.trim();
        Self {
            token: (!token.is_empty()).then(|| token.to_string()),
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }

    /// Build from an optional stored value.
    pub fn from_stored(value: Option<String>) -> Self {
        value.map(Self::bearer).unwrap_or_default()
    }

    pub fn is_present(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> &str {
        self.token.as_deref().unwrap_or("")
    }

    /// Value of the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.is_present() { "<redacted>" } else { "<missing>" };
        f.debug_tuple("Credential").field(&shown).finish()
    }
}
