use crate::core::{GridMesh, PanelRotation, Scene};
use crate::events::InputCell;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Scene,
    pub input: InputCell,

    pub canvas: web::HtmlCanvasElement,
    pub tilt_el: Option<web::HtmlElement>,

    pub gpu: Option<render::GpuState>,

    pub last_instant: Instant,
    pub last_panel: Option<PanelRotation>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let input = self.input.get();
        let width = self.canvas.width();
        let height = self.canvas.height();
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        let out = self.scene.frame(&input, dt_sec, aspect);

        if self.last_panel != Some(out.panel) {
            if let Some(el) = &self.tilt_el {
                _ = el
                    .style()
                    .set_property("transform", &out.panel.css_transform());
            }
            self.last_panel = Some(out.panel);
        }

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        gpu.resize_if_needed(width, height);
        if self.scene.mesh_mut().take_dirty() {
            gpu.upload_vertices(self.scene.mesh().positions());
        }
        match gpu.render(&out.camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

/// The page still works without WebGPU; only the background stays empty.
pub async fn init_gpu(canvas: &web::HtmlCanvasElement, mesh: &GridMesh) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, mesh).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::warn!("[gpu] background disabled: {:?}", e);
            None
        }
    }
}

/// A running requestAnimationFrame loop.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Cancel the pending frame and release the callback (and the context it owns).
    pub fn stop(self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Dropped outside the borrow; the closure owns the frame context.
        let closure = self.tick.borrow_mut().take();
        drop(closure);
    }
}

fn schedule(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        raf_id.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(frame_ctx: FrameContext) -> FrameLoop {
    let frame_ctx = Rc::new(RefCell::new(frame_ctx));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    // Weak handle so the closure does not keep itself alive after stop().
    let tick_weak = Rc::downgrade(&tick);
    let raf_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_tick.set(None);
        frame_ctx.borrow_mut().frame();
        if let Some(tick) = tick_weak.upgrade() {
            schedule(&tick, &raf_tick);
        }
    }) as Box<dyn FnMut()>));

    schedule(&tick, &raf_id);
    FrameLoop { tick, raf_id }
}
