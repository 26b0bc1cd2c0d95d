use super::{push, InputCell};
use crate::dom::EventListener;
use crate::input;
use crate::core::InputEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the whole window: as NDC over the background canvas
/// (mesh lift) and relative to the hero stage (tilt). The stage is the
/// unrotated wrapper of the tilting panel, so its box does not follow the tilt.
pub fn wire_pointermove(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    stage: Option<web::Element>,
    cell: InputCell,
) -> EventListener {
    EventListener::passive(window, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let client = input::client_pos(ev);
        let ndc = input::client_to_ndc(client, input::element_rect(&canvas));
        let panel_uv = stage
            .as_ref()
            .and_then(|p| input::client_to_unit(client, input::element_rect(p)))
            .unwrap_or(cell.get().panel_pointer);
        push(
            &cell,
            InputEvent::PointerMoved {
                ndc,
                panel: panel_uv,
            },
        );
    })
}
