//! Matrix Rain - digital rain animation engine in WASM
//!
//! Architecture:
//! - core/        - RNG, errors, console logging
//! - domain/      - Glyphs, cells, markers, settings
//! - simulation/  - Columns and the host-independent grid core
//! - schedule/    - Timer abstraction (browser interval, manual clock)
//! - render/      - Surfaces (DOM, headless) and snapshots
//! - grid         - Play/stop/step on top of a scheduler
//! - api/         - Public JS API

pub mod core;
pub mod domain;
pub mod simulation;
pub mod schedule;
pub mod render;
pub mod grid;
pub mod api;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_console_logger(log::LevelFilter::Info);
    log::info!("Matrix Rain engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Attach to `selector` (default `main`), size to the window and start raining.
#[wasm_bindgen]
pub fn start(selector: Option<String>) -> Result<MatrixRain, JsValue> {
    let mut rain = MatrixRain::new(selector)?;
    rain.play()?;
    Ok(rain)
}

// Re-export main types
pub use api::wasm::MatrixRain;
pub use crate::core::{RainError, Result as RainResult};
pub use domain::{Cell, CellState, GlyphRange, GlyphSet, Marker, MarkerKind, RainConfig};
pub use grid::Grid;
pub use render::{Dimensions, HeadlessSurface, Surface, Viewport};
pub use schedule::{ManualScheduler, Scheduler, TimerHandle};
pub use simulation::{Column, GridCore, TickStats};
