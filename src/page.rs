//! Builds the data-driven parts of the page (contact strip, gallery, social
//! button) and drives their entrance animations.
//!
//! Elements are created with a `data-reveal` or `data-reveal-view` attribute
//! and an inline `transition-delay`; adding the `revealed` class lets the CSS
//! transition in style.css play.

use crate::constants::*;
use crate::content::{self, ContactItem, CONTACTS};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn build(document: &web::Document) -> Result<(), JsValue> {
    build_contacts(document, CONTACTS_DESKTOP_ID, false)?;
    build_contacts(document, CONTACTS_MOBILE_ID, true)?;
    build_desktop_gallery(document)?;
    build_mobile_gallery(document)?;
    build_social_button(document)?;
    Ok(())
}

fn build_contacts(document: &web::Document, container_id: &str, compact: bool) -> Result<(), JsValue> {
    let Some(container) = document.get_element_by_id(container_id) else {
        return Ok(());
    };
    for (i, item) in CONTACTS.iter().enumerate() {
        let el = contact_element(document, item)?;
        el.set_attribute(REVEAL_ON_LOAD_ATTR, "")?;
        el.set_attribute(
            "style",
            &format!("transition-delay:{:.2}s", content::contact_reveal_delay_sec(i)),
        )?;
        el.set_inner_html(&item.icon.svg());
        let label = document.create_element("span")?;
        label.set_class_name("contact__label");
        label.set_text_content(Some(item.label(compact)));
        el.append_child(&label)?;
        container.append_child(&el)?;
    }
    Ok(())
}

fn contact_element(document: &web::Document, item: &ContactItem) -> Result<web::Element, JsValue> {
    match item.href {
        Some(href) => {
            let a = document.create_element("a")?;
            a.set_attribute("href", href)?;
            a.set_attribute("target", "_blank")?;
            a.set_attribute("rel", "noopener noreferrer")?;
            a.set_class_name("contact contact--link");
            Ok(a)
        }
        None => {
            let span = document.create_element("span")?;
            span.set_class_name("contact contact--static");
            Ok(span)
        }
    }
}

fn placeholder(document: &web::Document, index: usize) -> Result<web::Element, JsValue> {
    let wrap = document.create_element("div")?;
    wrap.set_class_name("tile__placeholder");
    let badge = document.create_element("div")?;
    badge.set_class_name("tile__emoji");
    badge.set_text_content(Some(content::tile_emoji(index)));
    let caption = document.create_element("p")?;
    caption.set_text_content(Some(&content::photo_caption(index)));
    wrap.append_child(&badge)?;
    wrap.append_child(&caption)?;
    Ok(wrap)
}

fn build_desktop_gallery(document: &web::Document) -> Result<(), JsValue> {
    let Some(grid) = document.get_element_by_id(GALLERY_DESKTOP_ID) else {
        return Ok(());
    };
    for (i, slot) in content::DESKTOP_TILES.iter().enumerate() {
        let tile = document.create_element("div")?;
        tile.set_class_name("tile tile--grid");
        tile.set_attribute(REVEAL_ON_VIEW_ATTR, "")?;
        tile.set_attribute(
            "style",
            &format!(
                "{};--tilt:{}deg;transition-delay:{:.2}s",
                slot.css(),
                content::DESKTOP_ROTATIONS_DEG[i],
                content::desktop_reveal_delay_sec(i)
            ),
        )?;
        tile.append_child(&placeholder(document, i)?)?;

        // Photo sits over the placeholder and removes itself if missing.
        let img = document.create_element("img")?;
        img.set_attribute("src", &content::photo_src(i))?;
        img.set_attribute("alt", &format!("Gallery image {}", i + 1))?;
        img.set_attribute("loading", "lazy")?;
        img.set_attribute("onerror", "this.remove()")?;
        img.set_class_name("tile__photo");
        tile.append_child(&img)?;

        grid.append_child(&tile)?;
    }
    Ok(())
}

fn build_mobile_gallery(document: &web::Document) -> Result<(), JsValue> {
    let Some(column) = document.get_element_by_id(GALLERY_MOBILE_ID) else {
        return Ok(());
    };
    for i in 0..content::MOBILE_TILE_COUNT {
        let tile = document.create_element("div")?;
        let side = if i % 2 == 0 { "left" } else { "right" };
        tile.set_class_name(&format!("tile tile--stair tile--{}", side));
        tile.set_attribute(REVEAL_ON_VIEW_ATTR, "")?;
        tile.set_attribute(
            "style",
            &format!(
                "--tilt:{}deg;--from-x:{}px;transition-delay:{:.2}s",
                content::mobile_rotation_deg(i),
                content::mobile_slide_from_px(i),
                content::mobile_reveal_delay_sec(i)
            ),
        )?;
        tile.append_child(&placeholder(document, i)?)?;
        column.append_child(&tile)?;
    }
    Ok(())
}

fn build_social_button(document: &web::Document) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };
    let a = document.create_element("a")?;
    a.set_class_name("social-button");
    a.set_attribute("href", content::SOCIAL_URL)?;
    a.set_attribute("target", "_blank")?;
    a.set_attribute("rel", "noopener noreferrer")?;
    a.set_attribute("aria-label", content::SOCIAL_LABEL)?;
    a.set_attribute(REVEAL_ON_LOAD_ATTR, "")?;
    a.set_attribute(
        "style",
        &format!("transition-delay:{:.2}s", content::SOCIAL_REVEAL_DELAY_SEC),
    )?;
    a.set_inner_html(&format!(
        r#"<span class="social-button__pulse"></span><span class="social-button__icon"><svg viewBox="0 0 24 24" fill="currentColor" aria-hidden="true"><path d="{}"/></svg></span>"#,
        content::SOCIAL_ICON_PATH
    ));
    body.append_child(&a)?;
    Ok(())
}

/// Play the on-load entrance of the hero and contact strip.
pub fn reveal_on_load(document: &web::Document) {
    // Flush styles so freshly built elements transition from their hidden state.
    if let Some(body) = document.body() {
        _ = body.offset_height();
    }
    dom::add_class_to_all(document, &format!("[{}]", REVEAL_ON_LOAD_ATTR), REVEALED_CLASS);
}

/// Reveals `data-reveal-view` elements the first time they scroll into view.
/// Disconnects on drop.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn observe_reveal(document: &web::Document) -> Option<RevealObserver> {
    let selector = format!("[{}]", REVEAL_ON_VIEW_ATTR);
    let callback = Closure::wrap(Box::new(
        |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    _ = target.class_list().add_1(REVEALED_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::info!("[page] no IntersectionObserver ({:?}); revealing gallery now", e);
            dom::add_class_to_all(document, &selector, REVEALED_CLASS);
            return None;
        }
    };

    if let Ok(list) = document.query_selector_all(&selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                observer.observe(&el);
            }
        }
    }
    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}
