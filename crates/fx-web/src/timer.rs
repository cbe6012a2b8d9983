//! RAII wrappers over the browser interval/timeout APIs.
//!
//! Each guard keeps its closure alive for as long as the browser may call
//! it and clears the timer on drop, so replacing a guard in place is the
//! structural "cancel before restart" the effect drivers rely on. Timer
//! callbacks may drop their own guard; the closure glue holds a reference
//! for the duration of the call.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    /// Arm a repeating timer; `None` when there is no window to attach to.
    pub fn new(ms: u32, f: impl FnMut() + 'static) -> Option<Self> {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = web::window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms as i32,
            )
            .ok()?;
        Some(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}

pub struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Arm a one-shot timer; `None` when there is no window to attach to.
    pub fn new(ms: u32, f: impl FnMut() + 'static) -> Option<Self> {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = web::window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms as i32,
            )
            .ok()?;
        Some(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.id);
        }
    }
}
