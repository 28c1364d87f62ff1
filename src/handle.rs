use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::core::{Scene, SceneConfig};
use crate::dom;
use crate::events::Listeners;
use crate::frame::{self, FrameContext, LoopHandle};

struct Mounted {
    ctx: Rc<RefCell<FrameContext>>,
    frame_loop: LoopHandle,
    listeners: Listeners,
}

fn mount(canvas: web::HtmlCanvasElement) -> anyhow::Result<Mounted> {
    let config = SceneConfig::default();
    let viewport = dom::window_viewport(config.max_pixel_ratio)?;
    dom::sync_canvas_backing_size(&canvas, &viewport);

    let scene = Scene::new(config, viewport)?;
    let ctx = Rc::new(RefCell::new(FrameContext::new(scene, canvas)));
    let listeners = Listeners::attach(&ctx)?;
    let frame_loop = frame::start_loop(ctx.clone());
    spawn_local(frame::init_gpu(Rc::downgrade(&ctx)));

    log::info!(
        "[scene] mounted at {}x{} css px, dpr {:.2}",
        viewport.css_width,
        viewport.css_height,
        viewport.pixel_ratio
    );
    Ok(Mounted {
        ctx,
        frame_loop,
        listeners,
    })
}

/// JavaScript handle for one scene bound to one canvas.
///
/// Construction never throws: if the scene cannot be built the handle is
/// inert, every call is a no-op and `isDisposed` reports `false` until
/// `dispose` is called.
#[wasm_bindgen]
pub struct CinematicScene {
    mounted: Option<Mounted>,
    scroll_progress: f32,
    disposed: bool,
}

#[wasm_bindgen]
impl CinematicScene {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: web::HtmlCanvasElement) -> CinematicScene {
        let mounted = match mount(canvas) {
            Ok(m) => Some(m),
            Err(e) => {
                log::error!("[scene] init failed, scene stays inert: {:#}", e);
                None
            }
        };
        CinematicScene {
            mounted,
            scroll_progress: 0.0,
            disposed: false,
        }
    }

    /// Scroll progress in [0, 1]; out-of-range values are clamped.
    #[wasm_bindgen(js_name = setScroll)]
    pub fn set_scroll(&mut self, progress: f32) {
        if self.disposed {
            return;
        }
        match &self.mounted {
            Some(m) => {
                if let Ok(mut ctx) = m.ctx.try_borrow_mut() {
                    ctx.scene.set_scroll(progress);
                    self.scroll_progress = ctx.scene.state().scroll_progress();
                }
            }
            None => {
                self.scroll_progress = if progress.is_finite() {
                    progress.clamp(0.0, 1.0)
                } else {
                    0.0
                };
            }
        }
    }

    #[wasm_bindgen(js_name = scrollProgress)]
    pub fn scroll_progress(&self) -> f32 {
        self.scroll_progress
    }

    /// Stops the frame loop, removes listeners and releases GPU resources.
    /// Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if let Some(Mounted {
            ctx,
            frame_loop,
            listeners,
        }) = self.mounted.take()
        {
            frame_loop.cancel();
            listeners.detach();
            match ctx.try_borrow_mut() {
                Ok(mut c) => c.dispose(),
                Err(_) => log::warn!("[scene] dispose while context busy"),
            }
        }
        log::info!("[scene] disposed");
    }

    #[wasm_bindgen(js_name = isDisposed)]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
