use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::BRAND;
use crate::controller::SiteController;

#[component]
pub fn Footer() -> impl IntoView {
    let controller = expect_context::<SiteController>();
    let link = move |id: &'static str, label: &'static str| {
        view! {
            <a
                href=format!("#{id}")
                class="footer-link"
                on:click=move |ev: MouseEvent| {
                    ev.prevent_default();
                    controller.route(id);
                }
            >
                {label}
            </a>
        }
    };

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">{BRAND}</span>
                </div>
                <div class="footer-links">
                    {link("about", "About")}
                    {link("careers", "Careers")}
                    {link("contact", "Contact")}
                </div>
                <p class="footer-copyright">"(c)2025 Meridian. All rights reserved."</p>
            </div>
        </footer>
    }
}
