use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::controller::SiteController;
use crate::search::SearchEntry;

/// Full-screen search overlay with predictive suggestions.
#[component]
pub fn SearchOverlay() -> impl IntoView {
    let controller = expect_context::<SiteController>();

    let overlay_class = move || {
        if controller.overlay_open() {
            "search-overlay active"
        } else {
            "search-overlay"
        }
    };
    let panel_class = move || {
        if controller.panel_open() {
            "search-suggestions active"
        } else {
            "search-suggestions"
        }
    };

    view! {
        <div id="searchOverlay" class=overlay_class>
            <button class="search-close" on:click=move |_| controller.toggle_search(Some(false))>
                "Close"
            </button>
            <form
                id="searchForm"
                class="search-form"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    controller.submit_search();
                }
            >
                <input
                    id="searchInput"
                    class="search-input"
                    type="text"
                    autocomplete="off"
                    placeholder="Search products, solutions, pages..."
                    node_ref=controller.search_input_ref()
                    prop:value=move || controller.query()
                    on:input=move |ev| controller.search_input(event_target_value(&ev))
                />
                <span id="charCount" class="char-count">{move || controller.counter()}</span>
            </form>
            <div id="searchSuggestions" class=panel_class>
                <For
                    each=move || controller.suggestions()
                    key=|entry: &SearchEntry| entry.name.clone()
                    children=move |entry: SearchEntry| {
                        let name = entry.name.clone();
                        view! {
                            <div
                                class="suggestion-item"
                                on:click=move |_| controller.go_to_search_result(&entry)
                            >
                                {name}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
