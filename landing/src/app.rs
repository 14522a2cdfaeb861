use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::controller::SiteController;
use crate::sections::*;

/// Root view. Expects the controller built from the same `config`.
#[component]
pub fn App(config: SiteConfig, controller: SiteController) -> impl IntoView {
    provide_context(controller);
    controller.bind_escape();

    let home = config.home.clone();
    let pages = config
        .pages
        .into_iter()
        .map(|page| {
            let initially_active = page.id == home;
            view! { <PageSection page=page initially_active=initially_active /> }
        })
        .collect_view();

    view! {
        <Nav links=config.nav home=config.home />
        <main>{pages}</main>
        <SearchOverlay />
        <Toast />
        <Footer />
    }
}
