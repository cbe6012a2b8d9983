//! Cursor stardust: throttled pointer-trail particles in a fixed overlay.

use crate::constants::STARDUST_LAYER_ID;
use crate::format;
use crate::timer::Timeout;
use fx_core::{emitter_allowed, ParticlePool, ParticleSpec};
use glam::Vec2;
use instant::Instant;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct PendingRemoval {
    token: u64,
    node: web::Element,
    _timer: Timeout,
}

struct EmitterInner {
    pool: ParticlePool,
    document: web::Document,
    container: web::Element,
    pending: SmallVec<[PendingRemoval; 8]>,
    next_token: u64,
}

struct MoveListener {
    window: web::Window,
    closure: Closure<dyn FnMut(web::MouseEvent)>,
}

impl Drop for MoveListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("mousemove", self.closure.as_ref().unchecked_ref());
    }
}

/// Handle for the wired emitter. Dropping it detaches the listener and
/// drains the outstanding removal timers.
pub struct StardustEmitter {
    inner: Rc<RefCell<EmitterInner>>,
    listener: Option<MoveListener>,
}

impl StardustEmitter {
    pub fn teardown(&mut self) {
        self.listener = None;
        let mut b = self.inner.borrow_mut();
        for p in b.pending.drain(..) {
            p.node.remove();
        }
        let live = b.pool.live_count();
        for _ in 0..live {
            b.pool.release();
        }
    }
}

impl Drop for StardustEmitter {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Attach the emitter. On a coarse (touch) pointer or under reduced
/// motion nothing is wired at all, so no particle can ever spawn.
pub fn wire(
    document: &web::Document,
    reduced_motion: bool,
    coarse_pointer: bool,
    seed: u64,
) -> Option<StardustEmitter> {
    if !emitter_allowed(reduced_motion, coarse_pointer) {
        log::info!("[stardust] disabled (coarse pointer or reduced motion)");
        return None;
    }
    let window = web::window()?;

    let container = match document.get_element_by_id(STARDUST_LAYER_ID) {
        Some(el) => el,
        None => {
            let el = document.create_element("div").ok()?;
            let _ = el.set_attribute("id", STARDUST_LAYER_ID);
            let _ = el.set_attribute(
                "style",
                "position:fixed;inset:0;z-index:9999;overflow:hidden;pointer-events:none",
            );
            let body = document.body()?;
            body.append_child(&el).ok()?;
            el
        }
    };

    let inner = Rc::new(RefCell::new(EmitterInner {
        pool: ParticlePool::new(seed),
        document: document.clone(),
        container,
        pending: SmallVec::new(),
        next_token: 0,
    }));

    let rc = inner.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        on_move(&rc, at);
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "mousemove",
            closure.as_ref().unchecked_ref(),
            &opts,
        )
        .ok()?;

    Some(StardustEmitter {
        inner,
        listener: Some(MoveListener { window, closure }),
    })
}

fn on_move(inner: &Rc<RefCell<EmitterInner>>, at: Vec2) {
    let spec = {
        let mut b = inner.borrow_mut();
        // Host container gone (detached mid-flight): skip silently.
        if !b.container.is_connected() {
            return;
        }
        match b.pool.try_emit(Instant::now()) {
            Some(spec) => spec,
            None => return,
        }
    };
    spawn(inner, at, spec);
}

fn spawn(inner: &Rc<RefCell<EmitterInner>>, at: Vec2, spec: ParticleSpec) {
    let (document, container) = {
        let b = inner.borrow();
        (b.document.clone(), b.container.clone())
    };
    let node = match document.create_element("div") {
        Ok(node) => node,
        Err(_) => {
            inner.borrow_mut().pool.release();
            return;
        }
    };
    let _ = node.set_attribute("style", &format::particle_spawn_style(at.x, at.y));
    if container.append_child(&node).is_err() {
        inner.borrow_mut().pool.release();
        return;
    }

    // Flush layout so the fade transitions instead of snapping.
    if let Some(h) = node.dyn_ref::<web::HtmlElement>() {
        let _ = h.offset_width();
    }
    let _ = node.set_attribute(
        "style",
        &format::particle_fade_style(at.x, at.y, spec.drift.x, spec.drift.y, spec.scale),
    );

    let mut b = inner.borrow_mut();
    let token = b.next_token;
    b.next_token += 1;

    let rc = inner.clone();
    let expiring = node.clone();
    let timer = Timeout::new(ParticlePool::removal_delay().as_millis() as u32, move || {
        expiring.remove();
        let mut b = rc.borrow_mut();
        b.pool.release();
        b.pending.retain(|p| p.token != token);
    });
    match timer {
        Some(timer) => b.pending.push(PendingRemoval {
            token,
            node,
            _timer: timer,
        }),
        None => {
            node.remove();
            b.pool.release();
        }
    }
}
