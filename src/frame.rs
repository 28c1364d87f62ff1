use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{FrameDriver, FrameSupervisor, Scene, SceneError, Tick};
use crate::render;

/// Per-canvas state shared by the frame loop, listeners and the JS handle.
pub struct FrameContext {
    pub scene: Scene,
    pub gpu: Option<render::GpuState>,
    pub canvas: web::HtmlCanvasElement,
    inert: bool,
}

impl FrameContext {
    pub fn new(scene: Scene, canvas: web::HtmlCanvasElement) -> Self {
        Self {
            scene,
            gpu: None,
            canvas,
            inert: false,
        }
    }

    /// Terminal: the scene stops accepting input and GPU resources are released.
    pub fn dispose(&mut self) {
        self.scene.dispose();
        self.gpu = None;
    }

    /// GPU init failed for good; the frame loop stops at its next tick.
    pub fn mark_inert(&mut self) {
        self.inert = true;
    }
}

impl FrameDriver for FrameContext {
    fn is_disposed(&self) -> bool {
        self.scene.is_disposed()
    }

    fn is_inert(&self) -> bool {
        self.inert
    }

    fn update(&mut self, dt: f32) -> Result<(), SceneError> {
        self.scene.update(dt);
        Ok(())
    }

    fn draw(&mut self) -> Result<(), SceneError> {
        // Nothing to draw until the device comes up, or ever if it doesn't.
        let Some(g) = &mut self.gpu else {
            return Ok(());
        };
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        g.render(&self.scene)
    }
}

/// Requests a device for the context's canvas and installs the GPU state,
/// unless the scene was disposed while the request was in flight.
pub async fn init_gpu(ctx: Weak<RefCell<FrameContext>>) {
    let Some((canvas, (width, height))) = ctx.upgrade().and_then(|c| {
        let c = c.try_borrow().ok()?;
        Some((c.canvas.clone(), c.scene.viewport().physical_size()))
    }) else {
        return;
    };

    let device = match render::GpuDevice::request(canvas, width, height).await {
        Ok(d) => d,
        Err(e) => {
            log::error!("[scene] WebGPU init failed, scene stays inert: {}", e);
            mark_inert(&ctx);
            return;
        }
    };

    let Some(strong) = ctx.upgrade() else {
        return;
    };
    let built = {
        let Ok(c) = strong.try_borrow() else {
            return;
        };
        if c.scene.is_disposed() {
            return;
        }
        render::GpuState::build(device, &c.scene)
    };
    let (gpu, validation) = match built {
        Ok(b) => b,
        Err(e) => {
            log::error!("[scene] GPU resources failed, scene stays inert: {}", e);
            mark_inert(&ctx);
            return;
        }
    };
    if let Some(err) = validation.await {
        log::error!("[scene] GPU validation failed, scene stays inert: {}", err);
        mark_inert(&ctx);
        return;
    }

    let Ok(mut c) = strong.try_borrow_mut() else {
        log::warn!("[scene] context busy; GPU state dropped");
        return;
    };
    if !c.scene.is_disposed() {
        c.gpu = Some(gpu);
    }
}

fn mark_inert(ctx: &Weak<RefCell<FrameContext>>) {
    if let Some(c) = ctx.upgrade() {
        if let Ok(mut c) = c.try_borrow_mut() {
            c.mark_inert();
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owns the self-rescheduling animation-frame callback.
pub struct LoopHandle {
    tick: TickClosure,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    /// Cancels the pending frame and drops the callback.
    pub fn cancel(self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

fn schedule(tick: &TickClosure, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    let mut supervisor = FrameSupervisor::new();
    let mut last_instant = Instant::now();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_clone.set(None);
        let now = Instant::now();
        let dt = (now - last_instant).as_secs_f32();
        last_instant = now;

        let next = match frame_ctx.try_borrow_mut() {
            Ok(mut ctx) => supervisor.tick(&mut *ctx, dt),
            Err(_) => Tick::Continue,
        };
        match next {
            Tick::Continue => schedule(&tick_clone, &raf_clone),
            Tick::Stop => log::info!("[frame] loop stopped after {} frames", supervisor.frames()),
        }
    }) as Box<dyn FnMut()>));
    schedule(&tick, &raf_id);

    LoopHandle { tick, raf_id }
}
