// Host-side tests for the stardust particle pool: throttle windows,
// counter clamping, and the randomized trajectory ranges.

use fx_core::constants::{
    EMIT_THROTTLE_MS, MAX_PARTICLES, PARTICLE_DRIFT, PARTICLE_LIFETIME_MS,
    PARTICLE_REMOVE_GRACE_MS, PARTICLE_SCALE_MIN, PARTICLE_SCALE_SPAN,
};
use fx_core::{emitter_allowed, ParticlePool};
use instant::Instant;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn live_count_saturates_at_cap() {
    let mut pool = ParticlePool::new(1);
    let t0 = Instant::now();
    for i in 0..100u64 {
        let spawned = pool.try_emit(t0 + ms(i * EMIT_THROTTLE_MS));
        assert!(spawned.is_some(), "well-spaced event {i} was throttled");
        assert!(
            pool.live_count() <= MAX_PARTICLES,
            "live count {} exceeded the cap",
            pool.live_count()
        );
    }
    assert_eq!(pool.live_count(), MAX_PARTICLES);
}

#[test]
fn release_floors_at_zero() {
    let mut pool = ParticlePool::new(2);
    let t0 = Instant::now();
    pool.try_emit(t0);
    pool.try_emit(t0 + ms(EMIT_THROTTLE_MS));
    assert_eq!(pool.live_count(), 2);

    for _ in 0..10 {
        pool.release();
    }
    assert_eq!(pool.live_count(), 0, "release must floor at zero");
}

#[test]
fn burst_within_one_window_spawns_once() {
    // 100 synthetic moves inside 40 ms of real time: exactly one spawn.
    let mut pool = ParticlePool::new(3);
    let t0 = Instant::now();
    let mut spawned = 0;
    for i in 0..100u64 {
        let t = t0 + Duration::from_micros(i * 400); // 0..40ms
        if pool.try_emit(t).is_some() {
            spawned += 1;
        }
    }
    assert_eq!(spawned, 1);
    assert_eq!(pool.live_count(), 1);
}

#[test]
fn throttle_boundary_is_inclusive() {
    let mut pool = ParticlePool::new(4);
    let t0 = Instant::now();
    assert!(pool.try_emit(t0).is_some(), "first event is always accepted");
    assert!(
        pool.try_emit(t0 + ms(EMIT_THROTTLE_MS - 1)).is_none(),
        "39 ms after the last accept must be throttled"
    );
    assert!(
        pool.try_emit(t0 + ms(EMIT_THROTTLE_MS)).is_some(),
        "exactly 40 ms after the last accept must pass"
    );
}

#[test]
fn throttle_window_follows_accepted_events_only() {
    let mut pool = ParticlePool::new(5);
    let t0 = Instant::now();
    pool.try_emit(t0);
    // A rejected event must not push the window forward.
    assert!(pool.try_emit(t0 + ms(30)).is_none());
    assert!(
        pool.try_emit(t0 + ms(EMIT_THROTTLE_MS)).is_some(),
        "window anchors on the accepted event, not the rejected one"
    );
}

#[test]
fn trajectories_stay_in_range() {
    let mut pool = ParticlePool::new(6);
    let t0 = Instant::now();
    for i in 0..500u64 {
        let spec = pool
            .try_emit(t0 + ms(i * EMIT_THROTTLE_MS))
            .expect("well-spaced event");
        assert!(
            spec.drift.x.abs() <= PARTICLE_DRIFT && spec.drift.y.abs() <= PARTICLE_DRIFT,
            "drift {:?} outside the lateral bound",
            spec.drift
        );
        assert!(
            spec.scale >= PARTICLE_SCALE_MIN
                && spec.scale <= PARTICLE_SCALE_MIN + PARTICLE_SCALE_SPAN,
            "terminal scale {} out of range",
            spec.scale
        );
        pool.release();
    }
}

#[test]
fn interleaved_emits_and_releases_keep_the_counter_bounded() {
    let mut pool = ParticlePool::new(7);
    let t0 = Instant::now();
    let mut t = t0;
    for step in 0..1_000u64 {
        t += ms(EMIT_THROTTLE_MS);
        pool.try_emit(t);
        // Release on a skewed rhythm so the counter wanders both ways.
        if step % 3 != 0 {
            pool.release();
        }
        let live = pool.live_count();
        assert!(live <= MAX_PARTICLES, "counter overflowed: {live}");
    }
}

#[test]
fn emitter_declines_coarse_pointers_and_reduced_motion() {
    assert!(emitter_allowed(false, false));
    assert!(!emitter_allowed(true, false), "reduced motion must disable wiring");
    assert!(!emitter_allowed(false, true), "coarse pointer must disable wiring");
    assert!(!emitter_allowed(true, true));
}

#[test]
fn removal_delay_covers_fade_plus_grace() {
    assert_eq!(ParticlePool::lifetime(), ms(PARTICLE_LIFETIME_MS));
    assert_eq!(
        ParticlePool::removal_delay(),
        ms(PARTICLE_LIFETIME_MS + PARTICLE_REMOVE_GRACE_MS)
    );
    assert!(ParticlePool::removal_delay() > ParticlePool::lifetime());
}
