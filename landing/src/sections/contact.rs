use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::controller::SiteController;

/// Contact form. Nothing is sent anywhere: submitting confirms with a toast
/// and clears the fields.
#[component]
pub fn ContactForm() -> impl IntoView {
    let controller = expect_context::<SiteController>();

    view! {
        <form
            id="contactForm"
            class="contact-form"
            node_ref=controller.contact_form_ref()
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                controller.submit_contact();
            }
        >
            <input class="form-input" type="text" name="name" placeholder="Your name" required=true />
            <input class="form-input" type="email" name="email" placeholder="Email" required=true />
            <textarea class="form-input" name="message" rows="5" placeholder="What are you building?"></textarea>
            <button type="submit" class="btn-primary">"Send message"</button>
        </form>
    }
}
