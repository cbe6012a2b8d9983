// Pure string builders for the DOM layer: status-bar readouts and particle
// style attributes. Kept free of platform types so they test host-side.

use fx_core::constants::PARTICLE_LIFETIME_MS;

// Particle node geometry
const PARTICLE_SIZE_PX: f32 = 6.0;
const PARTICLE_CENTER_OFFSET_PX: f32 = 2.0;
const PARTICLE_GLOW: &str = "0 0 8px rgba(255,255,255,0.9)";

/// Status-bar uptime readout, whole seconds.
pub fn uptime_text(secs: u64) -> String {
    format!("{secs}S")
}

/// Synthetic memory readout; wanders over a five-step cycle.
pub fn mem_text(secs: u64) -> String {
    format!("{:.1}MB", 24.0 + (secs % 5) as f64)
}

/// Six uppercase hex digits derived from the low 24 bits.
pub fn session_hash(bits: u32) -> String {
    format!("{:06X}", bits & 0x00FF_FFFF)
}

fn particle_base(x: f32, y: f32) -> String {
    format!(
        "position:absolute;left:{}px;top:{}px;width:{PARTICLE_SIZE_PX}px;\
         height:{PARTICLE_SIZE_PX}px;border-radius:50%;background:white;\
         pointer-events:none;box-shadow:{PARTICLE_GLOW};\
         transition:transform {ms}ms ease-out, opacity {ms}ms ease-out;",
        x - PARTICLE_CENTER_OFFSET_PX,
        y - PARTICLE_CENTER_OFFSET_PX,
        ms = PARTICLE_LIFETIME_MS,
    )
}

/// Style attribute for a freshly inserted particle: full size, full
/// opacity, not yet moving.
pub fn particle_spawn_style(x: f32, y: f32) -> String {
    format!(
        "{}transform:translate(0px, 0px) scale(1);opacity:1",
        particle_base(x, y)
    )
}

/// Style attribute for the fade: the transition carries the node to its
/// drift target and terminal scale while the opacity drops to zero.
pub fn particle_fade_style(x: f32, y: f32, dx: f32, dy: f32, scale: f32) -> String {
    format!(
        "{}transform:translate({dx}px, {dy}px) scale({scale});opacity:0",
        particle_base(x, y)
    )
}
