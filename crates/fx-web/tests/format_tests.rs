// Host-side tests for the pure formatting helpers. The main crate is
// wasm-only, so the module is included directly.

#![allow(dead_code)]
mod format {
    include!("../src/format.rs");
}

use format::*;

#[test]
fn uptime_is_whole_seconds_with_suffix() {
    assert_eq!(uptime_text(0), "0S");
    assert_eq!(uptime_text(7), "7S");
    assert_eq!(uptime_text(3661), "3661S");
}

#[test]
fn mem_readout_cycles_over_five_steps() {
    assert_eq!(mem_text(0), "24.0MB");
    assert_eq!(mem_text(4), "28.0MB");
    assert_eq!(mem_text(5), "24.0MB");
    assert_eq!(mem_text(123), "27.0MB");
}

#[test]
fn session_hash_is_six_upper_hex_digits() {
    assert_eq!(session_hash(0), "000000");
    assert_eq!(session_hash(u32::MAX), "FFFFFF");
    // Only the low 24 bits participate.
    assert_eq!(session_hash(0xABCD_EF12), "CDEF12");

    for bits in [0x1u32, 0xBEEF, 0x00C0_FFEE, 0x1234_5678] {
        let hash = session_hash(bits);
        assert_eq!(hash.len(), 6);
        assert!(
            hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()),
            "hash {hash} not uppercase hex"
        );
    }
}

#[test]
fn spawn_style_centers_the_node_on_the_pointer() {
    let style = particle_spawn_style(10.0, 30.0);
    assert!(style.contains("left:8px"), "style was: {style}");
    assert!(style.contains("top:28px"));
    assert!(style.contains("transform:translate(0px, 0px) scale(1)"));
    assert!(style.contains("opacity:1"));
    assert!(style.contains("pointer-events:none"));
}

#[test]
fn fade_style_carries_drift_scale_and_lifetime() {
    let style = particle_fade_style(10.0, 30.0, 12.0, -8.5, 0.5);
    assert!(
        style.contains("transform:translate(12px, -8.5px) scale(0.5)"),
        "style was: {style}"
    );
    assert!(style.contains("opacity:0"));
    assert!(
        style.contains(&format!(
            "transition:transform {ms}ms ease-out, opacity {ms}ms ease-out",
            ms = fx_core::constants::PARTICLE_LIFETIME_MS
        )),
        "fade must last exactly one particle lifetime"
    );
}

#[test]
fn styles_share_the_same_base_box() {
    // Spawn and fade rewrite the whole style attribute; position and
    // sizing must be identical or the node would jump.
    let spawn = particle_spawn_style(100.0, 200.0);
    let fade = particle_fade_style(100.0, 200.0, 5.0, 5.0, 0.3);
    for fragment in ["left:98px", "top:198px", "width:6px", "height:6px", "border-radius:50%"] {
        assert!(spawn.contains(fragment), "spawn missing {fragment}");
        assert!(fade.contains(fragment), "fade missing {fragment}");
    }
}
