use web_sys as web;

use crate::core::{SceneError, Viewport};

/// Current window size in CSS pixels and its capped pixel ratio.
pub fn window_viewport(max_pixel_ratio: f64) -> Result<Viewport, SceneError> {
    let w = web::window().ok_or(SceneError::NoWindow)?;
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    Ok(Viewport::new(width, height, w.device_pixel_ratio(), max_pixel_ratio))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.physical_size();
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
}
