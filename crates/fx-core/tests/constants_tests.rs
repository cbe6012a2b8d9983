// Sanity checks on the effect tuning constants and their relationships.

use fx_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn decode_timing_is_sane() {
    assert!(TICK_INTERVAL_MS > 0);
    assert!(LOOP_INTERVAL_MS > TICK_INTERVAL_MS);
    assert!(ITERATIONS_PER_CHAR > 0);

    // The decoration pulse must fit inside its quiet gap.
    assert!(GLITCH_PULSE_MS < GLITCH_REPEAT_DELAY_MS);
    assert!(CARET_BLINK_MS > 0);
}

#[test]
fn glyph_set_is_single_byte_noise() {
    assert!(!GLYPHS.is_empty());
    // The scrambler indexes the set bytewise; every glyph must be ASCII.
    assert!(GLYPHS.is_ascii());
    assert_eq!(GLYPHS.len(), GLYPHS.chars().count());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn stardust_bounds_are_sane() {
    assert!(MAX_PARTICLES > 0);
    assert!(EMIT_THROTTLE_MS > 0);
    assert!(PARTICLE_REMOVE_GRACE_MS < PARTICLE_LIFETIME_MS);

    // Particles shrink; they never grow past full size.
    assert!(PARTICLE_SCALE_MIN > 0.0);
    assert!(PARTICLE_SCALE_MIN + PARTICLE_SCALE_SPAN <= 1.0);
    assert!(PARTICLE_DRIFT > 0.0);
}
