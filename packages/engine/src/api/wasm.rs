use std::cell::RefCell;
use std::rc::Weak;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::core::{RainError, Result};
use crate::domain::RainConfig;
use crate::grid::{rebuild_shared, Grid};
use crate::render::dom::{DomSurface, DEFAULT_HOST_SELECTOR};
use crate::schedule::IntervalScheduler;
use crate::simulation::{GridCore, TickStats};

fn to_js(err: RainError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Keeps the window `resize` listener registered for as long as it lives.
struct ResizeListener {
    window: Window,
    closure: Closure<dyn FnMut()>,
}

impl ResizeListener {
    fn register(window: &Window, core: Weak<RefCell<GridCore>>) -> Result<Self> {
        let closure = Closure::wrap(Box::new(move || rebuild_shared(&core)) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(RainError::host)?;
        Ok(Self {
            window: window.clone(),
            closure,
        })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref());
    }
}

/// Digital rain bound to a page element.
#[wasm_bindgen]
pub struct MatrixRain {
    grid: Grid<IntervalScheduler>,
    _resize: ResizeListener,
}

impl MatrixRain {
    pub(crate) fn build(selector: Option<String>, config: RainConfig) -> Result<Self> {
        let selector = selector.as_deref().unwrap_or(DEFAULT_HOST_SELECTOR);
        let surface = DomSurface::attach(selector, config.afterglow_hue)?;
        let window = surface.window().clone();

        let core = GridCore::new(config, Box::new(surface))?;
        let mut grid = Grid::new(core, IntervalScheduler::new(window.clone()));
        grid.rebuild()?;
        let resize = ResizeListener::register(&window, grid.downgrade())?;

        log::info!(
            "matrix rain attached to '{}': {}x{}",
            selector,
            grid.core().column_count(),
            grid.core().rows()
        );
        Ok(Self { grid, _resize: resize })
    }
}

#[wasm_bindgen]
impl MatrixRain {
    /// Attach to `selector` (default `main`) with default settings. Does not start playing.
    #[wasm_bindgen(constructor)]
    pub fn new(selector: Option<String>) -> std::result::Result<MatrixRain, JsValue> {
        Self::build(selector, RainConfig::default()).map_err(to_js)
    }

    /// Attach with settings from a JSON document (missing fields use defaults).
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(selector: Option<String>, config_json: &str) -> std::result::Result<MatrixRain, JsValue> {
        let config = RainConfig::from_json(config_json).map_err(to_js)?;
        Self::build(selector, config).map_err(to_js)
    }

    pub fn play(&mut self) -> std::result::Result<(), JsValue> {
        self.grid.play().map_err(to_js)
    }

    pub fn stop(&mut self) {
        self.grid.stop();
    }

    /// Run exactly one tick while stopped. Returns false (and does nothing) while playing.
    #[wasm_bindgen(js_name = playNextTick)]
    pub fn play_next_tick(&mut self) -> std::result::Result<bool, JsValue> {
        self.grid.play_next_tick().map_err(to_js)
    }

    /// Re-measure the page and rebuild the grid from scratch.
    pub fn rebuild(&mut self) -> std::result::Result<(), JsValue> {
        self.grid.rebuild().map_err(to_js)
    }

    /// Stop and remove every column from the page.
    pub fn clear(&mut self) -> std::result::Result<(), JsValue> {
        self.grid.stop();
        self.grid.core_mut().clear().map_err(to_js)
    }

    #[wasm_bindgen(getter, js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.grid.is_playing()
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 {
        self.grid.core().rows()
    }

    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> u32 {
        self.grid.core().column_count()
    }

    #[wasm_bindgen(getter)]
    pub fn tick_count(&self) -> u64 {
        self.grid.core().tick_count()
    }

    #[wasm_bindgen(js_name = setTickInterval)]
    pub fn set_tick_interval(&mut self, interval_ms: u32) -> std::result::Result<(), JsValue> {
        self.grid.set_tick_interval_ms(interval_ms).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setChances)]
    pub fn set_chances(&mut self, drop: f32, clear: f32) -> std::result::Result<(), JsValue> {
        self.grid.core_mut().set_spawn_chances(drop, clear).map_err(to_js)
    }

    /// Start a drop at a specific cell
    pub fn add_drop(&mut self, col: u32, row: u32) -> bool {
        self.grid.core_mut().add_drop(col, row)
    }

    /// Start a drop-clear at a specific cell
    pub fn add_clear(&mut self, col: u32, row: u32) -> bool {
        self.grid.core_mut().add_clear(col, row)
    }

    /// Counters from the last tick
    pub fn stats(&self) -> TickStats {
        self.grid.core().stats()
    }

    pub fn snapshot_json(&self) -> String {
        self.grid.core().snapshot().to_json()
    }

    /// Row-major cell states: 0 empty, 1 drop head, 2 afterglow, 3 drop-clear head
    pub fn state_codes(&self) -> Vec<u8> {
        self.grid.core().state_codes()
    }

    pub fn glyph_text(&self) -> String {
        self.grid.core().glyph_text()
    }

    pub fn config_json(&self) -> String {
        self.grid.core().config().to_json()
    }
}
