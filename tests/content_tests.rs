// Host-side tests for the static page content.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod content {
    include!("../src/content.rs");
}

use content::*;

#[test]
fn desktop_tiles_fit_the_grid() {
    for (i, t) in DESKTOP_TILES.iter().enumerate() {
        assert!(t.col >= 1 && t.row >= 1, "tile {} starts before line 1", i);
        assert!(t.last_col() <= GALLERY_COLUMNS, "tile {} overflows", i);
    }
    assert_eq!(DESKTOP_TILES.len(), DESKTOP_ROTATIONS_DEG.len());
    assert_eq!(DESKTOP_TILES.len(), TILE_EMOJIS.len());
}

#[test]
fn tile_css_places_span() {
    let css = DESKTOP_TILES[2].css();
    assert_eq!(css, "grid-column:9 / span 3;grid-row:2 / span 2");
}

#[test]
fn only_linked_contacts_have_hrefs() {
    let links: Vec<_> = CONTACTS.iter().filter(|c| c.is_link()).collect();
    assert_eq!(links.len(), 3);
    assert_eq!(CONTACTS[0].icon, ContactIcon::Clock);
    assert!(!CONTACTS[0].is_link());
    assert!(CONTACTS[2].href.unwrap().starts_with("tel:"));
    assert!(CONTACTS[3].href.unwrap().starts_with("mailto:"));
    assert_eq!(CONTACTS[0].label(true), "08:00-00:00");
}

#[test]
fn reveal_delays_increase_with_index() {
    for i in 1..DESKTOP_TILES.len() {
        assert!(desktop_reveal_delay_sec(i) > desktop_reveal_delay_sec(i - 1));
    }
    for i in 1..MOBILE_TILE_COUNT {
        assert!(mobile_reveal_delay_sec(i) > mobile_reveal_delay_sec(i - 1));
    }
    assert_eq!(mobile_reveal_delay_sec(0), 0.0);
    assert!(contact_reveal_delay_sec(0) > SOCIAL_REVEAL_DELAY_SEC);
}

#[test]
fn mobile_tiles_alternate_sides() {
    for i in 0..MOBILE_TILE_COUNT {
        let from = mobile_slide_from_px(i);
        assert_eq!(from.abs(), MOBILE_SLIDE_PX);
        if i > 0 {
            assert_eq!(from, -mobile_slide_from_px(i - 1));
        }
    }
    assert_eq!(mobile_rotation_deg(0), 1);
    assert_eq!(mobile_rotation_deg(4), -2);
}

#[test]
fn photos_are_numbered_from_one() {
    assert_eq!(photo_src(0), "photos/photo-1.jpg");
    assert_eq!(photo_caption(11), "Foto 12");
    assert_eq!(tile_emoji(12), tile_emoji(0));
}
