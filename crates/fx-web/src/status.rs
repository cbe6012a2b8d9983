//! Status-bar readouts: uptime, synthetic memory load, session hash.

use crate::constants::{STATUS_HASH_ID, STATUS_INTERVAL_MS, STATUS_MEM_ID, STATUS_UPTIME_ID};
use crate::format;
use crate::timer::Interval;
use instant::Instant;
use web_sys as web;

/// Handle keeping the one-second ticker alive.
pub struct StatusBar {
    _ticker: Option<Interval>,
}

/// Every target element is optional; a page without a status bar wires to
/// nothing and the ticker is skipped entirely.
pub fn wire(document: &web::Document, hash_bits: u32) -> StatusBar {
    if let Some(el) = document.get_element_by_id(STATUS_HASH_ID) {
        el.set_text_content(Some(&format::session_hash(hash_bits)));
    }

    let uptime_el = document.get_element_by_id(STATUS_UPTIME_ID);
    let mem_el = document.get_element_by_id(STATUS_MEM_ID);
    if uptime_el.is_none() && mem_el.is_none() {
        return StatusBar { _ticker: None };
    }

    let start = Instant::now();
    let ticker = Interval::new(STATUS_INTERVAL_MS, move || {
        let secs = start.elapsed().as_secs();
        if let Some(el) = &uptime_el {
            el.set_text_content(Some(&format::uptime_text(secs)));
        }
        if let Some(el) = &mem_el {
            el.set_text_content(Some(&format::mem_text(secs)));
        }
    });
    StatusBar { _ticker: ticker }
}
