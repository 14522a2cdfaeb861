use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::BRAND;
use crate::controller::SiteController;
use crate::router::{NavLink, PageId};

#[component]
pub fn Nav(links: Vec<NavLink>, home: PageId) -> impl IntoView {
    let controller = expect_context::<SiteController>();
    let home_href = home.href();

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a
                    href=home_href
                    class="nav-brand"
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        controller.route(home.as_str());
                    }
                >
                    <span class="nav-title">{BRAND}</span>
                </a>
                <div class="nav-links">
                    {links.into_iter().map(|link| view! { <NavItem link=link /> }).collect_view()}
                    <button class="nav-search" on:click=move |_| controller.toggle_search(None)>
                        "Search"
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavItem(link: NavLink) -> impl IntoView {
    let controller = expect_context::<SiteController>();
    let href = link.href();
    let label = link.label.clone();
    let target = link.target.clone();

    let class = move || {
        if controller.is_link_active(&link) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <a
            href=href
            class=class
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                controller.route(target.as_str());
            }
        >
            {label}
        </a>
    }
}
