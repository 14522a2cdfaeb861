use leptos::prelude::*;

use crate::controller::SiteController;

#[component]
pub fn Toast() -> impl IntoView {
    let controller = expect_context::<SiteController>();

    view! {
        <div id="toast" class=move || controller.toast_class()>
            <span id="toastMsg">{move || controller.toast_message()}</span>
        </div>
    }
}
