#![cfg(target_arch = "wasm32")]
use crate::core::{InputState, OrientationCapability, Scene, SceneConfig, TiltSource};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod content;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod page;
mod render;

use constants::*;
use dom::EventListener;

/// Everything that has to stay alive while the page is animating.
struct App {
    frame_loop: frame::FrameLoop,
    _listeners: Vec<EventListener>,
    _orientation: OrientationCapability<EventListener>,
    _reveal: Option<page::RevealObserver>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn wire_canvas_resize(window: &web::Window, canvas: &web::HtmlCanvasElement) -> EventListener {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    EventListener::passive(window, "resize", move |_ev: web::Event| {
        dom::sync_canvas_backing_size(&canvas_resize);
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lemon-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the animation loop and detach every listener.
#[wasm_bindgen]
pub fn stop() {
    let app = APP.with(|cell| cell.borrow_mut().take());
    if let Some(app) = app {
        app.frame_loop.stop();
        log::info!("lemon-web stopped");
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Reveal the hero before anything that can fail or wait on the user.
    let built = page::build(&document);
    page::reveal_on_load(&document);
    built.map_err(|e| anyhow::anyhow!("page build: {:?}", e))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let tilt_el: Option<web::HtmlElement> = dom::element_by_id(&document, HERO_TILT_ID)
        .map_err(|e| log::warn!("[tilt] {}", e))
        .ok();
    // Measured for the tilt: the unrotated wrapper, never the rotating panel.
    let stage = document.get_element_by_id(HERO_STAGE_ID);
    let reveal = page::observe_reveal(&document);

    let input_cell: events::InputCell = Rc::new(Cell::new(InputState::default()));
    let listeners = vec![
        wire_canvas_resize(&window, &canvas),
        events::wire_scroll(&window, input_cell.clone()),
        events::wire_pointermove(&window, canvas.clone(), stage, input_cell.clone()),
    ];

    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let is_mobile = input::is_mobile_user_agent(&user_agent);
    let orientation = events::probe_orientation(&window, is_mobile, input_cell.clone()).await;
    let source = TiltSource::select(is_mobile, &orientation);
    log::info!(
        "[tilt] mobile={} orientation={} source={:?}",
        is_mobile,
        orientation.label(),
        source
    );

    let scene = Scene::new(SceneConfig::default(), source, &input_cell.get())?;
    let gpu = frame::init_gpu(&canvas, scene.mesh()).await;

    let frame_loop = frame::start_loop(frame::FrameContext {
        scene,
        input: input_cell,
        canvas,
        tilt_el,
        gpu,
        last_instant: Instant::now(),
        last_panel: None,
    });

    APP.with(|cell| {
        *cell.borrow_mut() = Some(App {
            frame_loop,
            _listeners: listeners,
            _orientation: orientation,
            _reveal: reveal,
        })
    });
    Ok(())
}
