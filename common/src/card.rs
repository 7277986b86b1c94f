//! Display model of a single startup card.

use serde::{Deserialize, Serialize};

use crate::protocol::Startup;
use crate::routes;

/// Literal shown when a successful fetch returns nothing.
pub const NO_RESULTS: &str =
    "No startups match your filters. Try adjusting your search criteria.";

/// Shown when the very first fetch fails and there is nothing to keep.
pub const LOAD_FAILED: &str = "Startups could not be loaded. Please try again later.";

/// Shown next to a retained list whose refresh failed.
pub const REFRESH_FAILED: &str = "Could not refresh startups; showing the last results.";

/// Everything a card shows, already formatted. Absent record fields become
/// empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupCard {
    /// Record identifier, the list key.
    pub id: String,
    pub title: String,
    pub founder: String,
    pub industry: String,
    pub stage: String,
    /// Funding target prefixed with the currency symbol, e.g. `$5000`.
    pub funding_goal: String,
    pub detail_href: String,
}

impl From<&Startup> for StartupCard {
    fn from(s: &Startup) -> Self {
        Self {
            id: s.id.clone(),
            title: s.name.clone().unwrap_or_default(),
            founder: s.founder_name().unwrap_or_default().to_string(),
            industry: s.industry.clone().unwrap_or_default(),
            stage: s.stage.clone().unwrap_or_default(),
            funding_goal: format_funding(s.funding_goal.as_deref()),
            detail_href: routes::startup_detail(&s.id),
        }
    }
}

/// `$` followed by the amount as the backend sent it (`5000`, `1250.5`).
pub fn format_funding(goal: Option<&str>) -> String {
    format!("${}", goal.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::decode_startups;

    #[test]
    fn test_sparse_record_renders_empty_fields() {
        let list =
            decode_startups(br#"[{ "_id": "a1", "startupName": "Acme", "fundingGoal": 5000 }]"#)
                .unwrap();
        let card = StartupCard::from(&list[0]);
        assert_eq!(card.title, "Acme");
        assert_eq!(card.funding_goal, "$5000");
        assert_eq!(card.founder, "");
        assert_eq!(card.industry, "");
        assert_eq!(card.stage, "");
        assert_eq!(card.detail_href, "/startups/a1");
    }

    #[test]
    fn test_format_funding() {
        assert_eq!(format_funding(Some("1250.5")), "$1250.5");
        assert_eq!(format_funding(Some("0")), "$0");
        assert_eq!(format_funding(None), "$");
    }

    #[test]
    fn test_funding_goal_printed_like_the_backend_number() {
        let list = decode_startups(
            br#"[{"_id": "a", "fundingGoal": 1e21}, {"_id": "b", "fundingGoal": -0.0},
                 {"_id": "c", "fundingGoal": "5000"}]"#,
        )
        .unwrap();
        let goals: Vec<String> = list.iter().map(|s| StartupCard::from(s).funding_goal).collect();
        assert_eq!(goals, ["$1e+21", "$0", "$5000"]);
    }
}
