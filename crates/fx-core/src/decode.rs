//! Decode (scramble-reveal) text state machine.
//!
//! A [`DecodeSession`] owns no timers and touches no platform APIs. It is
//! advanced by [`DecodeEvent`]s and answers with [`Effect`]s that the host
//! driver applies: arming/clearing the tick and replay-loop timers and
//! rendering display strings. This keeps the whole reveal lifecycle
//! testable on any target.

use crate::constants::{GLYPHS, ITERATIONS_PER_CHAR};
use rand::prelude::*;

/// Lifecycle phase of one decoding text instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Created, not yet told it is visible.
    Idle,
    /// Tick timer running, noise being replaced left to right.
    Scrambling,
    /// Source text on screen, waiting for the replay loop.
    Resolved,
    /// Off-screen; all timers released, progress discarded.
    Suspended,
}

/// External stimulus delivered by the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeEvent {
    /// Viewport-intersection transition (any visible pixel counts).
    VisibilityChanged(bool),
    /// The tick timer fired.
    Tick,
    /// The replay-loop timer fired.
    LoopFired,
}

/// Timer and render commands for the driver that owns the real resources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Replace the displayed text.
    Render(String),
    /// Arm the tick timer. Always preceded by `StopTick` in the same batch.
    StartTick,
    StopTick,
    /// Arm the replay-loop timer.
    StartLoop,
    StopLoop,
}

/// One scramble-reveal instance bound to a single source string.
pub struct DecodeSession {
    source: String,
    chars: Vec<char>,
    iteration: usize,
    max_iterations: usize,
    phase: Phase,
    visible: bool,
    reduced_motion: bool,
    rng: StdRng,
}

impl DecodeSession {
    pub fn new(text: &str, reduced_motion: bool, seed: u64) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let max_iterations = chars.len() * ITERATIONS_PER_CHAR;
        Self {
            source: text.to_owned(),
            chars,
            iteration: 0,
            max_iterations,
            phase: Phase::Idle,
            visible: false,
            reduced_motion,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Called once when the driver mounts the session. Under reduced motion
    /// the source is rendered verbatim and the session pins itself
    /// `Resolved`; every later event is ignored and no timer is ever armed.
    pub fn activate(&mut self, out: &mut Vec<Effect>) {
        if self.reduced_motion {
            self.phase = Phase::Resolved;
            out.push(Effect::Render(self.source.clone()));
        }
    }

    /// Single transition function for the whole lifecycle.
    pub fn handle(&mut self, event: DecodeEvent, out: &mut Vec<Effect>) {
        if self.reduced_motion {
            return;
        }
        match event {
            DecodeEvent::VisibilityChanged(true) => {
                self.visible = true;
                log::debug!("[decode] visible, restarting \"{}\"", self.source);
                out.push(Effect::StopTick);
                out.push(Effect::StopLoop);
                self.start_scramble(out);
                out.push(Effect::StartLoop);
            }
            DecodeEvent::VisibilityChanged(false) => {
                self.visible = false;
                self.phase = Phase::Suspended;
                log::debug!("[decode] suspended \"{}\"", self.source);
                out.push(Effect::StopTick);
                out.push(Effect::StopLoop);
            }
            DecodeEvent::LoopFired => {
                // The loop keeps its own cadence; an invisible fire is
                // skipped without rescheduling anything.
                if self.visible {
                    out.push(Effect::StopTick);
                    self.start_scramble(out);
                }
            }
            DecodeEvent::Tick => self.step(out),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_scrambling(&self) -> bool {
        self.phase == Phase::Scrambling
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn start_scramble(&mut self, out: &mut Vec<Effect>) {
        self.iteration = 0;
        if self.max_iterations == 0 {
            // Nothing to scramble; resolve without ever arming the timer.
            self.phase = Phase::Resolved;
            out.push(Effect::Render(self.source.clone()));
            return;
        }
        self.phase = Phase::Scrambling;
        out.push(Effect::StartTick);
    }

    fn step(&mut self, out: &mut Vec<Effect>) {
        // A tick delivered after suspension or resolve is a ghost; drop it.
        if self.phase != Phase::Scrambling {
            return;
        }
        self.iteration += 1;
        if self.iteration >= self.max_iterations {
            self.phase = Phase::Resolved;
            out.push(Effect::Render(self.source.clone()));
            out.push(Effect::StopTick);
        } else {
            let frame = self.scramble_frame();
            out.push(Effect::Render(frame));
        }
    }

    // Revealed prefix after tick n has ceil(n / 5) characters; unrevealed
    // positions show uniform noise from the glyph alphabet.
    fn scramble_frame(&mut self) -> String {
        let revealed = self.iteration.div_ceil(ITERATIONS_PER_CHAR);
        let mut frame = String::with_capacity(self.source.len());
        for (i, c) in self.chars.iter().enumerate() {
            if i < revealed {
                frame.push(*c);
            } else {
                let glyph = GLYPHS.as_bytes().choose(&mut self.rng).copied();
                frame.push(glyph.unwrap_or(b'#') as char);
            }
        }
        frame
    }
}

/// Derive a per-instance seed from a base seed, so sibling sessions get
/// independent noise streams.
#[inline]
pub fn derive_seed(base: u64, index: u64) -> u64 {
    base ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
