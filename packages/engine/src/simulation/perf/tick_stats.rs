use wasm_bindgen::prelude::*;

/// Counters for the most recent tick, plus the running tick total.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickStats {
    pub(crate) ticks: u64,
    pub(crate) tick_ms: f64,
    pub(crate) illuminating: u32,
    pub(crate) clearing: u32,
    pub(crate) spawned_illuminating: u32,
    pub(crate) spawned_clearing: u32,
    pub(crate) fallback_clears: u32,
    pub(crate) exited: u32,
}

impl TickStats {
    /// Fresh per-tick counters that carry the running total forward.
    pub(crate) fn next(&self) -> Self {
        Self { ticks: self.ticks + 1, ..Self::default() }
    }
}

#[wasm_bindgen]
impl TickStats {
    #[wasm_bindgen(getter)]
    pub fn ticks(&self) -> u64 { self.ticks }
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    /// Drops alive after the tick
    #[wasm_bindgen(getter)]
    pub fn illuminating(&self) -> u32 { self.illuminating }
    /// Drop-clears alive after the tick
    #[wasm_bindgen(getter)]
    pub fn clearing(&self) -> u32 { self.clearing }
    #[wasm_bindgen(getter)]
    pub fn spawned_illuminating(&self) -> u32 { self.spawned_illuminating }
    #[wasm_bindgen(getter)]
    pub fn spawned_clearing(&self) -> u32 { self.spawned_clearing }
    /// Clears forced onto row 0 because a column had no empty row
    #[wasm_bindgen(getter)]
    pub fn fallback_clears(&self) -> u32 { self.fallback_clears }
    /// Markers that ran off the bottom
    #[wasm_bindgen(getter)]
    pub fn exited(&self) -> u32 { self.exited }
}
