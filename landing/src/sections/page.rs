use leptos::prelude::*;

use super::{ContactForm, TiltCard};
use crate::router::{Page, PageCategory};

/// One routable section. Only the home section starts visible; afterwards
/// the controller owns the `active` and animation classes.
#[component]
pub fn PageSection(page: Page, initially_active: bool) -> impl IntoView {
    let class = if initially_active {
        format!("page-section active {}", page.category.animation().class())
    } else {
        "page-section".to_string()
    };
    let eyebrow = match page.category {
        PageCategory::Solution => Some("Solution"),
        PageCategory::Product => Some("Product"),
        PageCategory::General => None,
    };
    let cards = (!page.cards.is_empty()).then(|| {
        view! {
            <div class="card-grid" data-tilt="">
                {page.cards.into_iter().map(|card| view! { <TiltCard card=card /> }).collect_view()}
            </div>
        }
    });

    view! {
        <section id=page.id.to_string() class=class>
            <div class="container">
                <div class="section-header">
                    {eyebrow.map(|text| view! { <p class="section-eyebrow">{text}</p> })}
                    <h2 class="section-title">{page.title}</h2>
                    <p class="section-description">{page.summary}</p>
                </div>
                {cards}
                {page.contact_form.then(|| view! { <ContactForm /> })}
            </div>
        </section>
    }
}
