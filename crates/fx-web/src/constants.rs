// Page-level wiring constants: the selectors and class hooks the effects
// attach to, and DOM-side timing.

// Decode text
pub const DECODE_SELECTOR: &str = ".decode-text";
pub const VALUE_CLASS: &str = "decode-text__value";
pub const SHADOW_CLASS: &str = "decode-text__shadow";
pub const CARET_CLASS: &str = "decode-text__caret";
pub const IS_DECODING_CLASS: &str = "is-decoding";
pub const GLITCH_ATTR: &str = "data-glitch";

// Stardust
pub const STARDUST_LAYER_ID: &str = "stardust-layer";

// Status bar (all targets optional on the page)
pub const STATUS_UPTIME_ID: &str = "status-uptime";
pub const STATUS_MEM_ID: &str = "status-mem";
pub const STATUS_HASH_ID: &str = "status-hash";
pub const STATUS_INTERVAL_MS: u32 = 1_000;

// Scroll reveal
pub const SCROLL_SECTION_SELECTOR: &str = ".scroll-section";
pub const IN_VIEW_CLASS: &str = "in-view";

// Injected stylesheet
pub const STYLE_ID: &str = "portfolio-fx-styles";
