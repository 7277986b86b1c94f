//! Filter inputs for the dashboard.

use leptos::prelude::*;

use novanest_common::Filter;

const STAGES: [&str; 5] = ["Idea", "MVP", "Seed", "Series A", "Series B"];

/// Criteria for the raw input values. Industry and funding are trimmed; a
/// funding value that does not parse is left out.
pub fn build_filter(industry: &str, stage: &str, min_funding: &str) -> Filter {
    Filter::new()
        .with("industry", industry.trim())
        .with("stage", stage)
        .with("fundingGoal", min_funding.trim().parse::<f64>().ok())
}

/// Collects industry, stage and minimum funding goal and hands the resulting
/// [`Filter`] to `on_filter`. Blank inputs are left in the filter and dropped
/// when the query string is built.
#[component]
pub fn FilterBar(#[prop(into)] on_filter: Callback<Filter>) -> impl IntoView {
    let (industry, set_industry) = signal(String::new());
    let (stage, set_stage) = signal(String::new());
    let (min_funding, set_min_funding) = signal(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_filter.run(build_filter(
            &industry.get_untracked(),
            &stage.get_untracked(),
            &min_funding.get_untracked(),
        ));
    };

    let reset = move |_: leptos::ev::MouseEvent| {
        set_industry.set(String::new());
        set_stage.set(String::new());
        set_min_funding.set(String::new());
        on_filter.run(build_filter("", "", ""));
    };

    view! {
        <form class="filter-bar" on:submit=submit>
            <input
                type="text"
                class="filter-input"
                placeholder="Industry (e.g. Fintech)"
                prop:value=move || industry.get()
                on:input=move |ev| set_industry.set(event_target_value(&ev))
            />
            <select
                class="filter-input"
                prop:value=move || stage.get()
                on:change=move |ev| set_stage.set(event_target_value(&ev))
            >
                <option value="">"Any stage"</option>
                {STAGES.iter().map(|s| view! { <option value=*s>{*s}</option> }).collect_view()}
            </select>
            <input
                type="number"
                min="0"
                class="filter-input"
                placeholder="Min. funding goal"
                prop:value=move || min_funding.get()
                on:input=move |ev| set_min_funding.set(event_target_value(&ev))
            />
            <button type="submit" class="btn-primary">"Apply Filters"</button>
            <button type="button" class="btn-secondary" on:click=reset>"Reset"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industry_is_trimmed() {
        let filter = build_filter("  Fintech ", "Seed", " 5000 ");
        assert_eq!(
            filter.to_query_string(),
            "industry=Fintech&stage=Seed&fundingGoal=5000"
        );
    }

    #[test]
    fn test_zero_or_garbage_funding_is_dropped() {
        assert_eq!(build_filter("AI", "", "0").to_query_string(), "industry=AI");
        assert_eq!(build_filter("AI", "", "abc").to_query_string(), "industry=AI");
        assert_eq!(build_filter("", "MVP", "").to_query_string(), "stage=MVP");
    }

    #[test]
    fn test_reset_sends_empty_criteria() {
        assert_eq!(build_filter("", "", "").to_query_string(), "");
        assert_eq!(build_filter("   ", "", "  ").to_query_string(), "");
    }
}
