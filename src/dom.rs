use web_sys as web;

use crate::config::MAX_PIXEL_RATIO;

/// Keep the canvas backing store at CSS size times the device pixel ratio,
/// capped so high-density displays do not quadruple the fill cost.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
