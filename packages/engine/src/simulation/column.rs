//! Column - one vertical strip of cells and the markers falling through it
//!
//! Markers of each kind are kept sorted by ascending row. Every tick advances
//! them bottom-up, so a marker never lands on a cell its lower neighbour has not
//! left yet, then rolls the dice for new ones.

use crate::core::random::{chance, rand_below};
use crate::domain::{Cell, Marker, MarkerContext, MarkerKind};

use super::TickStats;

/// Per-tick spawn probabilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnChances {
    pub drop: f32,
    pub clear: f32,
}

pub struct Column {
    index: u32,
    cells: Vec<Cell>,
    illuminating: Vec<Marker>,
    clearing: Vec<Marker>,
}

impl Column {
    pub fn new(index: u32, cells: Vec<Cell>) -> Self {
        Self {
            index,
            cells,
            illuminating: Vec::new(),
            clearing: Vec::new(),
        }
    }

    pub fn index(&self) -> u32 { self.index }

    pub fn rows(&self) -> u32 { self.cells.len() as u32 }

    pub fn cells(&self) -> &[Cell] { &self.cells }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] { &mut self.cells }

    /// Active drops, sorted by row
    pub fn illuminating(&self) -> &[Marker] { &self.illuminating }

    /// Active drop-clears, sorted by row
    pub fn clearing(&self) -> &[Marker] { &self.clearing }

    pub fn tick(&mut self, ctx: &mut MarkerContext, chances: SpawnChances, stats: &mut TickStats) {
        stats.exited += advance_all(&mut self.illuminating, &mut self.cells, ctx);
        stats.exited += advance_all(&mut self.clearing, &mut self.cells, ctx);
        self.spawn_random(ctx, chances, stats);
    }

    /// Rows with no marker and no afterglow.
    pub fn empty_rows(&self) -> Vec<u32> {
        self.cells
            .iter()
            .filter(|c| c.state.is_empty())
            .map(|c| c.row)
            .collect()
    }

    /// True when no marker of either kind sits on `row`.
    pub fn row_is_free(&self, row: u32) -> bool {
        !has_row(&self.illuminating, row) && !has_row(&self.clearing, row)
    }

    /// Attach a new marker, keeping the collection sorted.
    ///
    /// Refuses rows outside the column and rows already holding a marker of the
    /// same kind.
    pub fn add_marker(&mut self, kind: MarkerKind, row: u32, ctx: &mut MarkerContext) -> bool {
        if row >= self.rows() {
            return false;
        }
        let markers = match kind {
            MarkerKind::Illuminate => &mut self.illuminating,
            MarkerKind::Clear => &mut self.clearing,
        };
        let at = markers.partition_point(|m| m.row() < row);
        if markers.get(at).is_some_and(|m| m.row() == row) {
            return false;
        }
        let marker = Marker::spawn(kind, &mut self.cells, row, ctx);
        markers.insert(at, marker);
        true
    }

    fn spawn_random(&mut self, ctx: &mut MarkerContext, chances: SpawnChances, stats: &mut TickStats) {
        let add_drop = chance(ctx.rng, chances.drop);
        let add_clear = chance(ctx.rng, chances.clear);
        if !add_drop && !add_clear {
            return;
        }

        let mut candidates = self.empty_rows();
        if candidates.is_empty() {
            // Column is saturated: push a clear in at the top so it drains. Markers
            // have already moved down this tick, so row 0 carries none.
            if self.add_marker(MarkerKind::Clear, 0, ctx) {
                stats.fallback_clears += 1;
            }
            return;
        }

        if add_drop {
            let pick = rand_below(ctx.rng, candidates.len() as u32) as usize;
            let row = candidates.remove(pick);
            if self.add_marker(MarkerKind::Illuminate, row, ctx) {
                stats.spawned_illuminating += 1;
            }
        }

        if add_clear && !candidates.is_empty() {
            let pick = rand_below(ctx.rng, candidates.len() as u32) as usize;
            if self.add_marker(MarkerKind::Clear, candidates[pick], ctx) {
                stats.spawned_clearing += 1;
            }
        }
    }
}

fn has_row(markers: &[Marker], row: u32) -> bool {
    markers.binary_search_by_key(&row, Marker::row).is_ok()
}

/// Advance from the bottom up, dropping markers that fall off. Returns how many left.
fn advance_all(markers: &mut Vec<Marker>, cells: &mut [Cell], ctx: &mut MarkerContext) -> u32 {
    let mut exited = 0;
    for i in (0..markers.len()).rev() {
        if !markers[i].advance(cells, ctx) {
            markers.remove(i);
            exited += 1;
        }
    }
    exited
}
