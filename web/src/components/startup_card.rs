//! Card component for a single startup in the dashboard grid.

use leptos::prelude::*;

use novanest_common::StartupCard as CardModel;

/// Name, founder, industry, stage, funding goal and a link to the detail view.
#[component]
pub fn StartupCard(card: CardModel) -> impl IntoView {
    view! {
        <div class="startup-card">
            <h3 class="startup-name">{card.title}</h3>
            <p class="startup-field"><strong>"Founder:"</strong>" "{card.founder}</p>
            <p class="startup-field"><strong>"Industry:"</strong>" "{card.industry}</p>
            <p class="startup-field"><strong>"Stage:"</strong>" "{card.stage}</p>
            <p class="startup-field"><strong>"Funding Goal:"</strong>" "{card.funding_goal}</p>
            <a href=card.detail_href class="startup-link">"View Details"</a>
        </div>
    }
}
