//! Procedural cinematic hero scene: a sky dome, noise-displaced dunes, a
//! draped silhouette and a drifting particle field, steered by scroll
//! progress and pointer position.
//!
//! Everything in [`core`] is plain Rust and runs on any target; the WebGPU
//! renderer and the browser glue are only built for `wasm32`.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod handle;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use handle::CinematicScene;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-scene loaded");
    Ok(())
}
