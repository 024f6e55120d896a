//! GridCore - host-independent rain state
//!
//! Owns the columns, the RNG and the rendering surface. It knows nothing about
//! timers: something else decides when to call [`GridCore::tick`] (see
//! [`crate::grid::Grid`]).
//!
//! - column.rs: per-column markers and spawning
//! - init/: construction and rebuild on resize
//! - step/: one animation tick and dirty-cell flushing
//! - commands/: manual marker injection

mod column;
#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/tick_stats.rs"]
mod tick_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;

pub use column::{Column, SpawnChances};
pub use tick_stats::TickStats;

use perf_timer::PerfTimer;

use crate::core::Result;
use crate::domain::{GlyphSet, RainConfig};
use crate::render::snapshot::{self, Snapshot};
use crate::render::{Dimensions, Surface};

pub struct GridCore {
    config: RainConfig,
    glyphs: GlyphSet,
    rng_state: u32,
    columns: Vec<Column>,
    dims: Dimensions,
    surface: Box<dyn Surface>,
    stats: TickStats,
}

impl GridCore {
    /// Validate `config` and bind to `surface`. The grid starts empty; call
    /// [`GridCore::rebuild`] to size it from the viewport.
    pub fn new(config: RainConfig, surface: Box<dyn Surface>) -> Result<Self> {
        init::create_grid_core(config, surface)
    }

    pub fn config(&self) -> &RainConfig { &self.config }

    pub fn dims(&self) -> Dimensions { self.dims }

    pub fn rows(&self) -> u32 { self.dims.rows }

    pub fn column_count(&self) -> u32 { self.dims.columns }

    pub fn columns(&self) -> &[Column] { &self.columns }

    pub fn column(&self, index: u32) -> Option<&Column> { self.columns.get(index as usize) }

    pub fn tick_count(&self) -> u64 { self.stats.ticks }

    /// Counters from the last tick
    pub fn stats(&self) -> TickStats { self.stats.clone() }

    pub fn spawn_chances(&self) -> SpawnChances {
        SpawnChances {
            drop: self.config.drop_chance,
            clear: self.config.clear_chance,
        }
    }

    pub fn set_spawn_chances(&mut self, drop: f32, clear: f32) -> Result<()> {
        settings::set_spawn_chances(self, drop, clear)
    }

    pub fn set_tick_interval_ms(&mut self, interval_ms: u32) -> Result<()> {
        settings::set_tick_interval_ms(self, interval_ms)
    }

    /// Throw away every column and rebuild from the current viewport.
    pub fn rebuild(&mut self) -> Result<()> {
        init::rebuild(self)
    }

    /// Remove everything; the grid is 0x0 until the next rebuild.
    pub fn clear(&mut self) -> Result<()> {
        commands::clear(self)
    }

    /// Advance every column one step and repaint what changed.
    pub fn tick(&mut self) -> Result<()> {
        step::tick(self)
    }

    /// Start a drop at (`col`, `row`). False when out of bounds or already taken.
    pub fn add_drop(&mut self, col: u32, row: u32) -> bool {
        commands::add_drop(self, col, row)
    }

    /// Start a drop-clear at (`col`, `row`).
    pub fn add_clear(&mut self, col: u32, row: u32) -> bool {
        commands::add_clear(self, col, row)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    pub fn state_codes(&self) -> Vec<u8> {
        snapshot::state_codes(self)
    }

    pub fn glyph_text(&self) -> String {
        snapshot::glyph_text(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
