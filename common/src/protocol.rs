//! Wire types returned by the backend's `GET /api/startups` endpoint.
//!
//! The backend owns these records; the client decodes them leniently so a
//! missing display field never fails the whole list.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Path of the startup listing, relative to the API base URL.
pub const STARTUPS_PATH: &str = "/api/startups";

/// One fundraising company profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Startup {
    /// Stable backend identifier, used as the list key.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "startupName", default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(rename = "founderId", default)]
    pub founder: Option<FounderRef>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub stage: Option<String>,
    /// Funding target as display text (`5000`, `1250.5`).
    #[serde(rename = "fundingGoal", default, deserialize_with = "lenient_text")]
    pub funding_goal: Option<String>,
}

/// Owner of a startup record.
///
/// The backend populates the founder server-side; when it does not, only the
/// bare identifier comes through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FounderRef {
    Resolved {
        #[serde(rename = "_id", default, deserialize_with = "lenient_text")]
        id: Option<String>,
        #[serde(default, deserialize_with = "lenient_text")]
        name: Option<String>,
    },
    Unresolved(String),
}

impl FounderRef {
    /// Display name, if the reference was resolved.
    pub fn name(&self) -> Option<&str> {
        match self {
            FounderRef::Resolved { name, .. } => name.as_deref(),
            FounderRef::Unresolved(_) => None,
        }
    }
}

impl Startup {
    /// Minimal record with only the identifier set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            founder: None,
            industry: None,
            stage: None,
            funding_goal: None,
        }
    }

    pub fn founder_name(&self) -> Option<&str> {
        self.founder.as_ref().and_then(FounderRef::name)
    }
}

/// Accept any JSON scalar as display text. `null`, arrays and objects become
/// `None` instead of failing the record.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_text))
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => n.as_f64().map(js_number),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Format a number the way a JavaScript template literal does: `-0` prints
/// as `0`, and magnitudes outside `[1e-6, 1e21)` use exponent notation with
/// an explicit sign (`1e+21`, `1.5e-7`).
pub fn js_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{n}");
    }
    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

/// Decode a response body into the ordered record list.
pub fn decode_startups(body: &[u8]) -> Result<Vec<Startup>, serde_json::Error> {
    serde_json::from_slice(body)
}
