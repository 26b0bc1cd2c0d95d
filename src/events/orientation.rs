//! Device-orientation capability probe and gyroscope feed.

use super::{push, InputCell};
use crate::dom::EventListener;
use crate::core::{DeviceTilt, InputEvent, OrientationCapability, TiltSource};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Probe once at startup. Desktop pages report `Unsupported` without touching
/// the API. Platforms that gate orientation behind
/// `DeviceOrientationEvent.requestPermission()` are asked here; a refusal or a
/// rejected request yields `Denied` and is not retried.
pub async fn probe_orientation(
    window: &web::Window,
    is_mobile: bool,
    cell: InputCell,
) -> OrientationCapability<EventListener> {
    if !TiltSource::wants_orientation(is_mobile) {
        return OrientationCapability::Unsupported;
    }
    let ctor = match js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("DeviceOrientationEvent"))
    {
        Ok(v) if !v.is_undefined() && !v.is_null() => v,
        _ => return OrientationCapability::Unsupported,
    };
    let request = js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    if let Some(request) = request {
        if !permission_granted(&ctor, &request).await {
            return OrientationCapability::Denied;
        }
    }
    OrientationCapability::Enabled(wire_deviceorientation(window, cell))
}

async fn permission_granted(ctor: &JsValue, request: &js_sys::Function) -> bool {
    let promise = match request
        .call0(ctor)
        .and_then(|p| p.dyn_into::<js_sys::Promise>())
    {
        Ok(p) => p,
        Err(e) => {
            log::info!("[tilt] orientation permission unavailable: {:?}", e);
            return false;
        }
    };
    match JsFuture::from(promise).await {
        Ok(v) => v.as_string().as_deref() == Some("granted"),
        Err(e) => {
            log::info!("[tilt] orientation permission rejected: {:?}", e);
            false
        }
    }
}

fn wire_deviceorientation(window: &web::Window, cell: InputCell) -> EventListener {
    EventListener::passive(window, "deviceorientation", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::DeviceOrientationEvent>() else {
            return;
        };
        if let (Some(beta), Some(gamma)) = (ev.beta(), ev.gamma()) {
            push(
                &cell,
                InputEvent::Tilted(DeviceTilt::from_degrees(beta as f32, gamma as f32)),
            );
        }
    })
}
