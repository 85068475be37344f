use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::config::{CAMERA_CONFIG, MODEL_CONFIG};
use crate::input::DragState;
use crate::model::MeshData;
use crate::motion;
use crate::placement::{place_model, Placement};
use crate::render;

/// The model as installed in the scene: its resting transform plus the GPU
/// buffers drawn each tick.
pub struct SceneModel {
    pub placement: Placement,
    pub buffers: render::ModelBuffers,
}

pub struct FrameContext {
    pub gpu: Option<render::GpuState<'static>>,
    pub model: Rc<RefCell<Option<SceneModel>>>,
    pub drag_state: Rc<RefCell<DragState>>,
    pub canvas: web::HtmlCanvasElement,

    /// Loop epoch; idle oscillations are phased against this.
    pub started: Instant,
    /// Smoothed yaw, carried across ticks.
    pub yaw: f32,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let t = self.started.elapsed().as_secs_f32();

        let world = self.model.borrow().as_ref().map(|m| {
            self.yaw = motion::smooth_toward(self.yaw, self.drag_state.borrow().target);
            let rotation = Vec3::new(
                motion::idle_tilt(MODEL_CONFIG.rotation.x, t),
                self.yaw,
                m.placement.rotation.z,
            );
            let y = motion::idle_bob(MODEL_CONFIG.position.y, t);
            render::model_matrix(&m.placement, rotation, y)
        });

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            let model = self.model.borrow();
            let draw = match (&*model, world) {
                (Some(m), Some(mat)) => Some((&m.buffers, mat)),
                _ => None,
            };
            if let Err(e) = g.render(draw) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    /// Normalize the freshly decoded mesh, upload it, and make it visible to
    /// the frame loop and the drag handlers.
    pub fn install_model(&mut self, mesh: MeshData) {
        let Some(g) = &self.gpu else {
            log::warn!("model decoded but no GPU available; dropping");
            return;
        };
        let placement = place_model(&MODEL_CONFIG, &mesh.bounds);
        log::info!(
            "model loaded: position=({:.3},{:.3},{:.3}) rotation=({:.3},{:.3},{:.3}) scale={:.3}",
            placement.translation.x,
            placement.translation.y,
            placement.translation.z,
            placement.rotation.x,
            placement.rotation.y,
            placement.rotation.z,
            placement.scale
        );
        let buffers = g.upload_mesh(&mesh);
        *self.model.borrow_mut() = Some(SceneModel { placement, buffers });
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, CAMERA_CONFIG).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Self-rescheduling requestAnimationFrame loop; runs until page teardown.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
