//! DOM driver for one decode-text element.
//!
//! The driver owns the real timers and child nodes; the state machine in
//! `fx-core` decides what happens. Effects map onto timer guards held in
//! `Option` slots, so arming a timer structurally replaces (and thereby
//! clears) its predecessor.

use crate::constants as ui;
use crate::observe::IntersectionNotifier;
use crate::timer::{Interval, Timeout};
use anyhow::anyhow;
use fx_core::constants::{
    GLITCH_PULSE_MS, GLITCH_REPEAT_DELAY_MS, LOOP_INTERVAL_MS, TICK_INTERVAL_MS,
};
use fx_core::{AssumeVisible, DecodeEvent, DecodeSession, Effect, Phase, VisibilityNotifier};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct Inner {
    session: DecodeSession,
    root: web::Element,
    value: web::Element,
    tick: Option<Interval>,
    replay: Option<Interval>,
    glitch: Option<Interval>,
    glitch_off: Option<Timeout>,
}

/// Handle for one wired element. Dropping it releases every timer the
/// driver holds.
pub struct DecodeDriver {
    inner: Rc<RefCell<Inner>>,
}

impl Drop for DecodeDriver {
    fn drop(&mut self) {
        let mut b = self.inner.borrow_mut();
        b.tick = None;
        b.replay = None;
        b.glitch = None;
        b.glitch_off = None;
    }
}

/// Scaffold the element (shadow/value/caret spans), seed a session from
/// its text content, and subscribe it to visibility. Falls back to a
/// single assumed-visible reveal when intersection observation is
/// unavailable.
pub fn wire(
    document: &web::Document,
    root: web::Element,
    reduced_motion: bool,
    seed: u64,
    notifier: &mut IntersectionNotifier,
) -> anyhow::Result<DecodeDriver> {
    let source = root.text_content().unwrap_or_default();
    let source = source.trim().to_owned();
    root.set_text_content(None);

    if !reduced_motion {
        let shadow = document
            .create_element("span")
            .map_err(|e| anyhow!("shadow span: {e:?}"))?;
        shadow.set_class_name(ui::SHADOW_CLASS);
        let _ = shadow.set_attribute("aria-hidden", "true");
        shadow.set_text_content(Some(&source));
        let _ = root.append_child(&shadow);
    }

    let value = document
        .create_element("span")
        .map_err(|e| anyhow!("value span: {e:?}"))?;
    value.set_class_name(ui::VALUE_CLASS);
    let _ = root.append_child(&value);

    if !reduced_motion {
        let caret = document
            .create_element("span")
            .map_err(|e| anyhow!("caret span: {e:?}"))?;
        caret.set_class_name(ui::CARET_CLASS);
        let _ = caret.set_attribute("aria-hidden", "true");
        let _ = root.append_child(&caret);
    }

    let inner = Rc::new(RefCell::new(Inner {
        session: DecodeSession::new(&source, reduced_motion, seed),
        root: root.clone(),
        value,
        tick: None,
        replay: None,
        glitch: None,
        glitch_off: None,
    }));

    let mut out = Vec::new();
    inner.borrow_mut().session.activate(&mut out);
    apply(&inner, out);

    if reduced_motion {
        // Static text; nothing to observe, nothing to schedule.
        return Ok(DecodeDriver { inner });
    }

    let rc = inner.clone();
    let on_change = Box::new(move |visible: bool| {
        dispatch(&rc, DecodeEvent::VisibilityChanged(visible));
    });
    if notifier.subscribe(&root, on_change).is_err() {
        log::warn!("[decode] intersection observer unavailable, assuming visible");
        let rc = inner.clone();
        let _ = AssumeVisible.subscribe(
            &root,
            Box::new(move |visible: bool| {
                dispatch(&rc, DecodeEvent::VisibilityChanged(visible));
            }),
        );
    }

    Ok(DecodeDriver { inner })
}

fn dispatch(inner: &Rc<RefCell<Inner>>, event: DecodeEvent) {
    let out = {
        let mut b = inner.borrow_mut();
        let mut out = Vec::new();
        b.session.handle(event, &mut out);
        out
    };
    apply(inner, out);
    sync_decoration(inner);
}

fn apply(inner: &Rc<RefCell<Inner>>, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::Render(text) => {
                inner.borrow().value.set_text_content(Some(&text));
            }
            Effect::StartTick => {
                let rc = inner.clone();
                let timer =
                    Interval::new(TICK_INTERVAL_MS, move || dispatch(&rc, DecodeEvent::Tick));
                inner.borrow_mut().tick = timer;
            }
            Effect::StopTick => inner.borrow_mut().tick = None,
            Effect::StartLoop => {
                let rc = inner.clone();
                let timer =
                    Interval::new(LOOP_INTERVAL_MS, move || dispatch(&rc, DecodeEvent::LoopFired));
                inner.borrow_mut().replay = timer;
            }
            Effect::StopLoop => inner.borrow_mut().replay = None,
        }
    }
}

// Caret while scrambling; rare jitter/shadow pulse while resolved on
// screen. Reduced motion never reaches here with a running session.
fn sync_decoration(inner: &Rc<RefCell<Inner>>) {
    let (phase, reduced, root) = {
        let b = inner.borrow();
        (b.session.phase(), b.session.reduced_motion(), b.root.clone())
    };

    let _ = root
        .class_list()
        .toggle_with_force(ui::IS_DECODING_CLASS, phase == Phase::Scrambling);

    let pulse_wanted = phase == Phase::Resolved && !reduced;
    let pulse_running = inner.borrow().glitch.is_some();
    if pulse_wanted && !pulse_running {
        let rc = inner.clone();
        let timer = Interval::new(GLITCH_REPEAT_DELAY_MS + GLITCH_PULSE_MS, move || pulse(&rc));
        inner.borrow_mut().glitch = timer;
    } else if !pulse_wanted && pulse_running {
        let mut b = inner.borrow_mut();
        b.glitch = None;
        b.glitch_off = None;
        let _ = b.root.remove_attribute(ui::GLITCH_ATTR);
    }
}

fn pulse(inner: &Rc<RefCell<Inner>>) {
    let root = inner.borrow().root.clone();
    let _ = root.set_attribute(ui::GLITCH_ATTR, "on");
    let rc = inner.clone();
    let off = Timeout::new(GLITCH_PULSE_MS, move || {
        let mut b = rc.borrow_mut();
        let _ = b.root.remove_attribute(ui::GLITCH_ATTR);
        b.glitch_off = None;
    });
    inner.borrow_mut().glitch_off = off;
}
