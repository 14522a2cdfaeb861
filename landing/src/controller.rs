//! The page controller.
//!
//! One [`SiteController`] is built at startup and shared through Leptos
//! context. It is `Copy`: every field is a reactive handle, so event
//! handlers capture it by value instead of reaching for globals.

use std::time::Duration;

use leptos::html;
use leptos::prelude::*;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;

use crate::config::SiteConfig;
use crate::dom;
use crate::router::{NavLink, PageId, Router};
use crate::search::{Catalog, SearchBox, SearchEntry};
use crate::tilt::TiltConfig;
use crate::toast::{ToastKind, ToastState};

pub const NAVIGATING: &str = "Navigating to page...";
pub const SEARCHING: &str = "Searching...";
pub const MESSAGE_SENT: &str = "Message sent successfully!";

#[derive(Debug, Clone, Copy)]
struct Timings {
    focus_delay: Duration,
    toast_duration: Duration,
}

#[derive(Clone, Copy)]
pub struct SiteController {
    router: RwSignal<Router>,
    catalog: StoredValue<Catalog>,
    search: RwSignal<SearchBox>,
    overlay_open: RwSignal<bool>,
    toast: RwSignal<ToastState>,
    tilt: StoredValue<TiltConfig>,
    timings: StoredValue<Timings>,
    search_input: NodeRef<html::Input>,
    contact_form: NodeRef<html::Form>,
}

impl SiteController {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            router: RwSignal::new(config.router()),
            catalog: StoredValue::new(config.catalog()),
            search: RwSignal::new(SearchBox::default()),
            overlay_open: RwSignal::new(false),
            toast: RwSignal::new(ToastState::default()),
            tilt: StoredValue::new(config.tilt),
            timings: StoredValue::new(Timings {
                focus_delay: Duration::from_millis(config.search.focus_delay_ms),
                toast_duration: Duration::from_millis(config.toast.duration_ms),
            }),
            search_input: NodeRef::new(),
            contact_form: NodeRef::new(),
        }
    }

    // ------------------------------------------------------------------
    // Routing
    // ------------------------------------------------------------------

    /// Show the section `id`. Silently ignored when the page is not
    /// configured or its element is missing from the document.
    pub fn route(&self, id: &str) {
        if self.router.with_untracked(|router| router.page(id).is_none()) {
            debug!(page = id, "ignoring route to unknown page");
            return;
        }
        let document = match dom::document() {
            Ok(document) => document,
            Err(err) => {
                debug!(page = id, %err, "ignoring route");
                return;
            }
        };
        let Some(target) = document.get_element_by_id(id) else {
            debug!(page = id, "ignoring route, section not in document");
            return;
        };
        let Some(transition) = self.router.try_update(|router| router.navigate(id)).flatten()
        else {
            return;
        };

        dom::reveal_section(&document, &target, transition.animation);
        debug!(from = %transition.from, to = %transition.to, "routed");
    }

    pub fn current_page(&self) -> PageId {
        self.router.with(|router| router.current().clone())
    }

    pub fn is_link_active(&self, link: &NavLink) -> bool {
        self.router.with(|router| {
            router
                .current_page()
                .is_some_and(|page| link.is_active_for(page))
        })
    }

    // ------------------------------------------------------------------
    // Search overlay
    // ------------------------------------------------------------------

    /// Open or close the overlay; `None` flips it. Opening focuses the
    /// input once the overlay has had a moment to appear.
    pub fn toggle_search(&self, force: Option<bool>) {
        let open = force.unwrap_or_else(|| !self.overlay_open.get_untracked());
        self.overlay_open.set(open);

        if open {
            let input = self.search_input;
            let delay = self.timings.with_value(|t| t.focus_delay);
            set_timeout(
                move || {
                    let Some(input) = input.try_get_untracked().flatten() else {
                        debug!("search input not mounted, focus skipped");
                        return;
                    };
                    if let Err(err) = input.focus() {
                        debug!(?err, "search input focus failed");
                    }
                },
                delay,
            );
        }
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay_open.get()
    }

    pub fn search_input(&self, value: String) {
        self.catalog
            .with_value(|catalog| self.search.update(|search| search.input(value, catalog)));
    }

    pub fn query(&self) -> String {
        self.search.with(|search| search.query().to_string())
    }

    pub fn counter(&self) -> String {
        let search = self.search;
        self.catalog
            .with_value(|catalog| search.with(|s| catalog.counter(s.query())))
    }

    pub fn suggestions(&self) -> Vec<SearchEntry> {
        self.search.with(|search| search.suggestions().to_vec())
    }

    pub fn panel_open(&self) -> bool {
        self.search.with(SearchBox::panel_open)
    }

    pub fn go_to_search_result(&self, entry: &SearchEntry) {
        self.toggle_search(Some(false));
        if let Some(page) = self.search.try_update(|search| search.select(entry)) {
            self.route(page.as_str());
        }
        self.show_toast(NAVIGATING, ToastKind::Success);
    }

    pub fn submit_search(&self) {
        let outcome = self
            .catalog
            .with_value(|catalog| self.search.try_update(|search| search.submit(catalog)));

        match outcome {
            Some(Ok(query)) => {
                debug!(%query, "search submitted");
                self.toggle_search(Some(false));
                self.show_toast(SEARCHING, ToastKind::Success);
            }
            Some(Err(err)) => self.show_toast(err.to_string(), ToastKind::Error),
            None => {}
        }
    }

    pub fn search_input_ref(&self) -> NodeRef<html::Input> {
        self.search_input
    }

    /// Close the overlay on Escape anywhere in the document.
    pub fn bind_escape(&self) {
        let Ok(document) = dom::document() else {
            return;
        };
        let controller = *self;
        let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            if event.key() == "Escape" {
                controller.toggle_search(Some(false));
            }
        }) as Box<dyn FnMut(_)>);

        if let Err(err) =
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        {
            debug!(?err, "escape listener not bound");
            return;
        }

        closure.forget();
    }

    // ------------------------------------------------------------------
    // Contact form
    // ------------------------------------------------------------------

    pub fn contact_form_ref(&self) -> NodeRef<html::Form> {
        self.contact_form
    }

    pub fn submit_contact(&self) {
        let Some(form) = self.contact_form.get_untracked() else {
            return;
        };
        self.show_toast(MESSAGE_SENT, ToastKind::Success);
        form.reset();
    }

    // ------------------------------------------------------------------
    // Toast
    // ------------------------------------------------------------------

    /// Show `message` and hide it after the configured duration. Earlier
    /// hide timers are not cancelled.
    pub fn show_toast(&self, message: impl Into<String>, kind: ToastKind) {
        let message = message.into();
        self.toast.update(|toast| toast.show(message, kind));

        let toast = self.toast;
        let duration = self.timings.with_value(|t| t.toast_duration);
        set_timeout(
            move || {
                toast.try_update(ToastState::hide);
            },
            duration,
        );
    }

    pub fn toast_class(&self) -> String {
        self.toast.with(ToastState::class_name)
    }

    pub fn toast_message(&self) -> String {
        self.toast.with(|toast| toast.message().to_string())
    }

    pub fn toast_state(&self) -> ToastState {
        self.toast.get()
    }

    // ------------------------------------------------------------------
    // Tilt
    // ------------------------------------------------------------------

    pub fn tilt(&self, card: &HtmlElement, client_x: f64, client_y: f64) {
        let config = self.tilt.get_value();
        let tilt = config.tilt(dom::bounding_rect(card), client_x, client_y);
        dom::apply_tilt(card, &tilt, &config.transform(&tilt));
    }

    pub fn reset_tilt(&self, card: &HtmlElement) {
        let transform = self.tilt.with_value(TiltConfig::neutral_transform);
        dom::reset_tilt(card, &transform);
    }
}
