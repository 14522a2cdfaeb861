//! Imperative document access.
//!
//! Leptos renders the shell; a few effects still have to poke the live
//! elements directly: restarting a section's entry animation needs a forced
//! reflow between removing and re-adding classes, and the tilt writes inline
//! style on every pointer move.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::DomError;
use crate::router::Animation;
use crate::tilt::{Rect, Tilt};

const SECTION_CLASS: &str = "page-section";
const ACTIVE: &str = "active";

pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

/// Show `target` as the only active section and replay its animation.
pub fn reveal_section(document: &Document, target: &Element, animation: Animation) {
    let sections = document.get_elements_by_class_name(SECTION_CLASS);
    for index in 0..sections.length() {
        if let Some(section) = sections.item(index) {
            clear_section(&section);
        }
    }

    // Without the reflow the browser coalesces remove+add and the
    // animation does not restart.
    force_reflow(target);

    let classes = target.class_list();
    let _ = classes.add_1(animation.class());
    let _ = classes.add_1(ACTIVE);

    scroll_to_top();
}

fn clear_section(section: &Element) {
    let classes = section.class_list();
    let _ = classes.remove_1(ACTIVE);
    for animation in Animation::ALL {
        let _ = classes.remove_1(animation.class());
    }
}

fn force_reflow(element: &Element) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.offset_width();
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn bounding_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

pub fn apply_tilt(card: &HtmlElement, tilt: &Tilt, transform: &str) {
    let style = card.style();
    let _ = style.set_property("--mouse-x", &tilt.mouse_x_px());
    let _ = style.set_property("--mouse-y", &tilt.mouse_y_px());
    let _ = style.set_property("transform", transform);
}

pub fn reset_tilt(card: &HtmlElement, transform: &str) {
    let _ = card.style().set_property("transform", transform);
}
