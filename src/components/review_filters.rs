use leptos::ev::Event;
use leptos::*;

use crate::app::{use_client_state, use_controller};

/// Search box and rating select. Each change filters the full cached list.
#[component]
pub fn ReviewFilters() -> impl IntoView {
    let state = use_client_state();
    let controller = use_controller();

    let on_search = {
        let controller = controller.clone();
        move |ev: Event| controller.set_search_term(event_target_value(&ev))
    };
    let on_rating = move |ev: Event| controller.set_rating_filter(&event_target_value(&ev));

    view! {
        <div class="search-filter">
            <input
                type="text"
                id="searchInput"
                placeholder="Search by title or author..."
                prop:value=move || state.with(|s| s.filter.search_term.clone())
                on:input=on_search
            />
            <select id="filterRating" on:change=on_rating>
                <option value="">"All Ratings"</option>
                <option value="5">"5 Stars"</option>
                <option value="4">"4 Stars"</option>
                <option value="3">"3 Stars"</option>
                <option value="2">"2 Stars"</option>
                <option value="1">"1 Star"</option>
            </select>
        </div>
    }
}
