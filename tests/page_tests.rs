// Host-side checks of the static page and startup order.
// The main crate is wasm-only, so we read the shipped files directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

const INDEX_HTML: &str = include_str!("../index.html");
const STYLE_CSS: &str = include_str!("../style.css");
const LIB_RS: &str = include_str!("../src/lib.rs");

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("missing {:?}", needle))
}

#[test]
fn every_element_id_exists_in_index() {
    for id in [
        CANVAS_ID,
        HERO_TILT_ID,
        HERO_STAGE_ID,
        CONTACTS_DESKTOP_ID,
        CONTACTS_MOBILE_ID,
        GALLERY_DESKTOP_ID,
        GALLERY_MOBILE_ID,
    ] {
        position(INDEX_HTML, &format!("id=\"{}\"", id));
    }
}

#[test]
fn tilt_is_measured_on_the_wrapper_outside_the_rotating_element() {
    let stage = position(INDEX_HTML, &format!("id=\"{}\"", HERO_STAGE_ID));
    let tilt = position(INDEX_HTML, &format!("id=\"{}\"", HERO_TILT_ID));
    let panel = position(INDEX_HTML, "class=\"hero__panel\"");
    assert!(stage < tilt && tilt < panel);
    // Nothing else is measured for the tilt.
    assert!(!INDEX_HTML.contains("id=\"hero-panel\""));
}

#[test]
fn hero_shows_logo_badge_above_title() {
    let logo = position(INDEX_HTML, "class=\"hero__logo\"");
    let title = position(INDEX_HTML, ">LEMON</h1>");
    assert!(logo < title);
    position(STYLE_CSS, ".hero__logo {");
}

#[test]
fn hero_is_revealed_before_waiting_on_orientation_or_gpu() {
    let reveal = position(LIB_RS, "page::reveal_on_load(&document)");
    assert!(reveal < position(LIB_RS, "probe_orientation("));
    assert!(reveal < position(LIB_RS, "init_gpu("));
    assert!(reveal < position(LIB_RS, "element_by_id(&document, CANVAS_ID)"));
}

#[test]
fn idle_and_hover_animations_are_styled() {
    position(STYLE_CSS, ".tile--grid[data-reveal-view].revealed:hover");
    position(STYLE_CSS, ".tile--stair[data-reveal-view].revealed:hover");
    position(STYLE_CSS, "transform: scale(0) rotate(-180deg)");
    position(STYLE_CSS, "@keyframes wobble");
    position(STYLE_CSS, "animation: spin 10s linear infinite");
    position(STYLE_CSS, "transform: translateZ(50px)");
}
