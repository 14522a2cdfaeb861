use leptos::ev::MouseEvent;
use leptos::html;
use leptos::prelude::*;

use crate::controller::SiteController;
use crate::router::Card;

#[component]
pub fn TiltCard(card: Card) -> impl IntoView {
    let controller = expect_context::<SiteController>();
    let card_ref = NodeRef::<html::Div>::new();
    let link = card.link.clone();

    let on_move = move |ev: MouseEvent| {
        if let Some(el) = card_ref.get_untracked() {
            controller.tilt(&el, f64::from(ev.client_x()), f64::from(ev.client_y()));
        }
    };
    let on_leave = move |_| {
        if let Some(el) = card_ref.get_untracked() {
            controller.reset_tilt(&el);
        }
    };
    let on_click = move |_| {
        if let Some(page) = &link {
            controller.route(page.as_str());
        }
    };

    view! {
        <div
            class="card-3d"
            node_ref=card_ref
            on:mousemove=on_move
            on:mouseleave=on_leave
            on:click=on_click
        >
            <h3 class="card-title">{card.title}</h3>
            <p class="card-body">{card.body}</p>
        </div>
    }
}
