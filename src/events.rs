use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::config::MODEL_CONFIG;
use crate::frame::SceneModel;
use crate::input::DragState;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub drag_state: Rc<RefCell<DragState>>,
    pub model: Rc<RefCell<Option<SceneModel>>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_pointermove(&w);
}

/// Drags start on the canvas; capture the pointer so fast drags keep tracking.
fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.drag_state.borrow_mut().begin(ev.client_x() as f32);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Releases are window-level so a drag ending off-canvas still resolves.
fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.drag_state.borrow_mut().end();
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let model_loaded = w.model.borrow().is_some();
        w.drag_state
            .borrow_mut()
            .update(MODEL_CONFIG.rotation.y, ev.client_x() as f32, model_loaded);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Resync the canvas backing store whenever the window resizes; the renderer
/// picks the new size up on the next frame.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    crate::dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        crate::dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
