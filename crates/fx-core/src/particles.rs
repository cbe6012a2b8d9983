//! Bounded pool accounting for the cursor stardust particles.

use crate::constants::{
    EMIT_THROTTLE_MS, MAX_PARTICLES, PARTICLE_DRIFT, PARTICLE_LIFETIME_MS,
    PARTICLE_REMOVE_GRACE_MS, PARTICLE_SCALE_MIN, PARTICLE_SCALE_SPAN,
};
use glam::Vec2;
use instant::Instant;
use rand::prelude::*;
use std::time::Duration;

/// Wiring policy: the emitter must not attach listeners at all on coarse
/// (touch) pointers or under reduced motion.
#[inline]
pub fn emitter_allowed(reduced_motion: bool, coarse_pointer: bool) -> bool {
    !reduced_motion && !coarse_pointer
}

/// Randomized trajectory for a freshly emitted particle.
#[derive(Clone, Copy, Debug)]
pub struct ParticleSpec {
    /// Lateral drift over the fade, in px per axis.
    pub drift: Vec2,
    /// Terminal scale at the end of the fade.
    pub scale: f32,
}

/// Owns the live-particle counter and the emission policy (throttle plus
/// population cap). The visual layer owns the nodes and calls back into
/// [`ParticlePool::release`] when each one expires.
pub struct ParticlePool {
    live: u32,
    last_emit: Option<Instant>,
    rng: StdRng,
}

impl ParticlePool {
    pub fn new(seed: u64) -> Self {
        Self {
            live: 0,
            last_emit: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Accept or reject one pointer event. Rejects only when the event
    /// lands inside the throttle window; at the population cap the
    /// particle is still spawned and the counter saturates.
    pub fn try_emit(&mut self, now: Instant) -> Option<ParticleSpec> {
        if let Some(last) = self.last_emit {
            if now.duration_since(last) < Duration::from_millis(EMIT_THROTTLE_MS) {
                return None;
            }
        }
        self.last_emit = Some(now);
        self.live = (self.live + 1).min(MAX_PARTICLES);

        let dx = (self.rng.gen::<f32>() - 0.5) * (2.0 * PARTICLE_DRIFT);
        let dy = (self.rng.gen::<f32>() - 0.5) * (2.0 * PARTICLE_DRIFT);
        let scale = PARTICLE_SCALE_MIN + self.rng.gen::<f32>() * PARTICLE_SCALE_SPAN;
        Some(ParticleSpec {
            drift: Vec2::new(dx, dy),
            scale,
        })
    }

    /// One particle expired; the counter floors at zero.
    pub fn release(&mut self) {
        self.live = self.live.saturating_sub(1);
    }

    pub fn live_count(&self) -> u32 {
        self.live
    }

    /// Fade duration of a particle.
    pub fn lifetime() -> Duration {
        Duration::from_millis(PARTICLE_LIFETIME_MS)
    }

    /// Delay between spawning a particle and removing its node; the grace
    /// period lets the fade finish before the node disappears.
    pub fn removal_delay() -> Duration {
        Duration::from_millis(PARTICLE_LIFETIME_MS + PARTICLE_REMOVE_GRACE_MS)
    }
}
