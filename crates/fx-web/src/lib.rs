#![cfg(target_arch = "wasm32")]

use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod decode;
mod dom;
mod format;
mod observe;
mod particles;
mod reveal;
mod status;
mod timer;

// Wiring handles for the whole page; leaked after init since the effects
// live exactly as long as the page does.
struct Page {
    _drivers: Vec<decode::DecodeDriver>,
    _emitter: Option<particles::StardustEmitter>,
    _status: status::StatusBar,
    _notifier: observe::IntersectionNotifier,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    let reduced_motion = dom::prefers_reduced_motion();
    let coarse_pointer = dom::has_coarse_pointer();
    dom::inject_effect_styles(&document);

    let base_seed: u64 = rand::random();
    let mut notifier = observe::IntersectionNotifier::new();

    let mut drivers = Vec::new();
    if let Ok(list) = document.query_selector_all(constants::DECODE_SELECTOR) {
        for i in 0..list.length() {
            let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
                continue;
            };
            let seed = fx_core::derive_seed(base_seed, i as u64);
            match decode::wire(&document, el, reduced_motion, seed, &mut notifier) {
                Ok(driver) => drivers.push(driver),
                Err(e) => log::error!("[decode] wiring failed: {e:?}"),
            }
        }
    }

    let emitter = particles::wire(&document, reduced_motion, coarse_pointer, rand::random());
    let status = status::wire(&document, rand::random());
    let sections = reveal::wire_sections(&document, &mut notifier);

    log::info!(
        "[init] decode={} stardust={} sections={} reduced_motion={}",
        drivers.len(),
        emitter.is_some(),
        sections,
        reduced_motion
    );

    Box::leak(Box::new(Page {
        _drivers: drivers,
        _emitter: emitter,
        _status: status,
        _notifier: notifier,
    }));
    Ok(())
}
