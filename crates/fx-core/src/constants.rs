// Shared tuning constants for the decode and stardust effects. The web
// frontend consumes these; tests pin the relationships between them.

// Decode animation
pub const GLYPHS: &str = "01_/-!?X#[]{}<>"; // noise alphabet for unrevealed positions
pub const ITERATIONS_PER_CHAR: usize = 5; // scramble steps spent per source character
pub const TICK_INTERVAL_MS: u32 = 45; // one scramble frame per tick
pub const LOOP_INTERVAL_MS: u32 = 8_000; // replay cadence while resolved and visible

// Decoration (resolved, full-motion only)
pub const GLITCH_PULSE_MS: u32 = 800; // active jitter/shadow window
pub const GLITCH_REPEAT_DELAY_MS: u32 = 15_000; // quiet gap between pulses
pub const CARET_BLINK_MS: u32 = 1_000; // caret opacity cycle while scrambling

// Stardust emitter
pub const MAX_PARTICLES: u32 = 6; // live-particle counter ceiling
pub const PARTICLE_LIFETIME_MS: u64 = 600; // fade-out duration
pub const PARTICLE_REMOVE_GRACE_MS: u64 = 50; // extra delay before the node is removed
pub const EMIT_THROTTLE_MS: u64 = 40; // minimum spacing between accepted pointer events
pub const PARTICLE_DRIFT: f32 = 20.0; // max lateral drift per axis, in px
pub const PARTICLE_SCALE_MIN: f32 = 0.1; // terminal scale lower bound
pub const PARTICLE_SCALE_SPAN: f32 = 0.9; // terminal scale = min + rand * span
