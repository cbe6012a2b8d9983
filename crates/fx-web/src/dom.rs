use crate::constants::STYLE_ID;
use fx_core::constants::{CARET_BLINK_MS, GLITCH_PULSE_MS};
use web_sys as web;

#[inline]
pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

#[inline]
pub fn has_coarse_pointer() -> bool {
    media_matches("(pointer: coarse)")
}

fn media_matches(query: &str) -> bool {
    web::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Install the effect stylesheet once; later calls are no-ops.
pub fn inject_effect_styles(document: &web::Document) {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else { return };
    if let Ok(style) = document.create_element("style") {
        let _ = style.set_attribute("id", STYLE_ID);
        style.set_text_content(Some(&effect_css()));
        let _ = head.append_child(&style);
    }
}

// Caret blink while scrambling; jitter plus shadow pulse during the rare
// glitch window once resolved. Hosts style everything else themselves.
fn effect_css() -> String {
    format!(
        r#".decode-text{{position:relative;display:inline-block}}
.decode-text__shadow{{position:absolute;top:0;left:0;z-index:-1;opacity:0;user-select:none;pointer-events:none}}
.decode-text__caret{{display:none;margin-left:0.25em;width:2px;height:0.8em;background:currentColor;vertical-align:middle}}
.decode-text.is-decoding .decode-text__caret{{display:inline-block;animation:fx-caret-blink {blink}ms linear infinite}}
.decode-text[data-glitch="on"] .decode-text__value{{animation:fx-jitter {pulse}ms ease-in-out}}
.decode-text[data-glitch="on"] .decode-text__shadow{{animation:fx-shadow-pulse {pulse}ms ease-in-out}}
@keyframes fx-caret-blink{{0%,100%{{opacity:0}}50%{{opacity:1}}}}
@keyframes fx-jitter{{0%,100%{{transform:translateX(0)}}33%{{transform:translateX(-1px)}}66%{{transform:translateX(1px)}}}}
@keyframes fx-shadow-pulse{{0%,100%{{opacity:0;transform:translateX(-1px)}}50%{{opacity:0.2;transform:translateX(1px)}}}}
"#,
        blink = CARET_BLINK_MS,
        pulse = GLITCH_PULSE_MS,
    )
}
