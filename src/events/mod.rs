use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::SceneError;
use crate::frame::FrameContext;

pub mod pointer;

/// Window listeners owned by one scene; removed again on dispose.
pub struct Listeners {
    window: web::Window,
    pointermove: Closure<dyn FnMut(web::PointerEvent)>,
    resize: Closure<dyn FnMut()>,
}

impl Listeners {
    pub fn attach(ctx: &Rc<RefCell<FrameContext>>) -> Result<Self, SceneError> {
        let window = web::window().ok_or(SceneError::NoWindow)?;
        let pointermove = pointer::pointermove_closure(ctx.clone());
        let resize = pointer::resize_closure(ctx.clone());
        _ = window.add_event_listener_with_callback(
            "pointermove",
            pointermove.as_ref().unchecked_ref(),
        );
        _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
        Ok(Self {
            window,
            pointermove,
            resize,
        })
    }

    pub fn detach(self) {
        _ = self.window.remove_event_listener_with_callback(
            "pointermove",
            self.pointermove.as_ref().unchecked_ref(),
        );
        _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
    }
}
