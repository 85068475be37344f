#![cfg(target_arch = "wasm32")]
//! Single-model showcase: fetch one GLB, drop it on a canvas, let the visitor
//! nudge its yaw by dragging while a small idle animation keeps it alive.

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod config;
mod dom;
mod events;
mod frame;
mod input;
mod model;
mod motion;
mod placement;
mod render;

use config::{MODEL_CONFIG, MODEL_URL};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("stage-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("stage-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #stage-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&canvas);

    // Renderer first, so the loop can show the empty scene while the asset
    // is still in flight. A missing adapter is logged and tolerated.
    let gpu = frame::init_gpu(&canvas).await;

    let drag_state = Rc::new(RefCell::new(input::DragState::new(MODEL_CONFIG.rotation.y)));
    let model = Rc::new(RefCell::new(None::<frame::SceneModel>));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        drag_state: drag_state.clone(),
        model: model.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        gpu,
        model: model.clone(),
        drag_state: drag_state.clone(),
        canvas: canvas.clone(),
        started: Instant::now(),
        yaw: MODEL_CONFIG.rotation.y,
    }));
    // Start RAF loop before the asset arrives; it degrades to an empty scene.
    frame::start_loop(frame_ctx.clone());

    // Fetch + decode off the critical path; failure leaves the scene empty.
    spawn_local(async move {
        match model::load_model(MODEL_URL).await {
            Ok(mesh) => frame_ctx.borrow_mut().install_model(mesh),
            Err(e) => log::error!("model load failed: {:?}", e),
        }
    });

    Ok(())
}
