use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use web_sys as web;

use crate::dom;
use crate::frame::FrameContext;

pub(crate) fn pointermove_closure(
    ctx: Rc<RefCell<FrameContext>>,
) -> Closure<dyn FnMut(web::PointerEvent)> {
    Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // Consumed at the start of the next frame.
        if let Ok(mut c) = ctx.try_borrow_mut() {
            c.scene
                .set_pointer_client(ev.client_x() as f32, ev.client_y() as f32);
        }
    }) as Box<dyn FnMut(web::PointerEvent)>)
}

pub(crate) fn resize_closure(ctx: Rc<RefCell<FrameContext>>) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        let Ok(mut c) = ctx.try_borrow_mut() else {
            return;
        };
        match dom::window_viewport(c.scene.config().max_pixel_ratio) {
            Ok(viewport) => {
                dom::sync_canvas_backing_size(&c.canvas, &viewport);
                c.scene.resize(viewport);
            }
            Err(e) => log::warn!("[scene] resize ignored: {}", e),
        }
    }) as Box<dyn FnMut()>)
}
