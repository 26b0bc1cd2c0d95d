use super::{push, InputCell};
use crate::dom::EventListener;
use crate::core::InputEvent;
use web_sys as web;

#[inline]
fn scroll_offset(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Record the current offset, then follow `scroll` events.
pub fn wire_scroll(window: &web::Window, cell: InputCell) -> EventListener {
    push(&cell, InputEvent::Scrolled(scroll_offset(window)));
    let w = window.clone();
    EventListener::passive(window, "scroll", move |_ev: web::Event| {
        push(&cell, InputEvent::Scrolled(scroll_offset(&w)));
    })
}
