//! Intersection-observer backing for the visibility-notifier capability.

use fx_core::{SubscribeError, VisibilityNotifier};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type EntryCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

struct Subscription {
    observer: web::IntersectionObserver,
    _closure: EntryCallback,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// One observer per subscribed element, default (zero) threshold, so any
/// visible pixel reports as visible. Subscriptions live as long as the
/// notifier.
#[derive(Default)]
pub struct IntersectionNotifier {
    subscriptions: Vec<Subscription>,
}

impl IntersectionNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VisibilityNotifier<web::Element> for IntersectionNotifier {
    fn subscribe(
        &mut self,
        target: &web::Element,
        mut on_change: Box<dyn FnMut(bool)>,
    ) -> Result<(), SubscribeError> {
        let closure: EntryCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                        on_change(entry.is_intersecting());
                    }
                }
            },
        )
            as Box<dyn FnMut(_, _)>);

        let observer = web::IntersectionObserver::new(closure.as_ref().unchecked_ref())
            .map_err(|_| SubscribeError::Unsupported)?;
        observer.observe(target);
        self.subscriptions.push(Subscription {
            observer,
            _closure: closure,
        });
        Ok(())
    }
}
