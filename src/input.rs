use glam::Vec2;
use web_sys as web;

/// Client-space box of an element, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[inline]
pub fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        left: r.left() as f32,
        top: r.top() as f32,
        width: r.width() as f32,
        height: r.height() as f32,
    }
}

#[inline]
pub fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Position relative to `rect`, `[0, 1]` inside it. Not clamped: callers map
/// through a clamping range. `None` for a collapsed box.
#[inline]
pub fn client_to_unit(client: Vec2, rect: Rect) -> Option<Vec2> {
    if rect.width > 0.0 && rect.height > 0.0 {
        Some(Vec2::new(
            (client.x - rect.left) / rect.width,
            (client.y - rect.top) / rect.height,
        ))
    } else {
        None
    }
}

/// Normalized device coordinates over `rect`: `[-1, 1]`, y up.
#[inline]
pub fn client_to_ndc(client: Vec2, rect: Rect) -> Vec2 {
    match client_to_unit(client, rect) {
        Some(uv) => Vec2::new(uv.x * 2.0 - 1.0, 1.0 - uv.y * 2.0),
        None => Vec2::ZERO,
    }
}

// ---------------- Platform detection ----------------
const MOBILE_UA_TOKENS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

#[inline]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_UA_TOKENS.iter().any(|t| ua.contains(t))
}
