//! Scroll-section reveal: toggle an `in-view` class on viewport entry and
//! exit. Hosts own the transition styling.

use crate::constants::{IN_VIEW_CLASS, SCROLL_SECTION_SELECTOR};
use crate::observe::IntersectionNotifier;
use fx_core::VisibilityNotifier;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_sections(document: &web::Document, notifier: &mut IntersectionNotifier) -> usize {
    let Ok(list) = document.query_selector_all(SCROLL_SECTION_SELECTOR) else {
        return 0;
    };
    let mut wired = 0;
    for i in 0..list.length() {
        let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let target = el.clone();
        let on_change = Box::new(move |visible: bool| {
            let _ = target
                .class_list()
                .toggle_with_force(IN_VIEW_CLASS, visible);
        });
        if notifier.subscribe(&el, on_change).is_err() {
            // No observation available: reveal once and move on.
            let _ = el.class_list().add_1(IN_VIEW_CLASS);
        }
        wired += 1;
    }
    wired
}
