//! Falling markers - drops and drop-clears riding down a column
//!
//! A marker only remembers its row. The cells it passes over live in the owning
//! column and are handed in on every call.

use super::cell::{Cell, CellState};
use super::config::LightnessRange;
use super::glyphs::GlyphSet;
use crate::core::random::rand_inclusive;

/// Shared inputs for attaching and advancing markers during one tick.
pub struct MarkerContext<'a> {
    pub rng: &'a mut u32,
    pub glyphs: &'a GlyphSet,
    pub lightness: LightnessRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Lights the cell with a fresh glyph and leaves an afterglow behind
    Illuminate,
    /// Resets cells without touching the glyph
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    row: u32,
    kind: MarkerKind,
}

impl Marker {
    /// Create a marker and attach it to `row`.
    pub fn spawn(kind: MarkerKind, cells: &mut [Cell], row: u32, ctx: &mut MarkerContext) -> Self {
        let mut marker = Self { row, kind };
        marker.attach(cells, row, ctx);
        marker
    }

    #[inline]
    pub fn row(&self) -> u32 {
        self.row
    }

    #[inline]
    pub fn kind(&self) -> MarkerKind {
        self.kind
    }

    /// Bind to `row`, overwriting whatever state the cell had.
    pub fn attach(&mut self, cells: &mut [Cell], row: u32, ctx: &mut MarkerContext) {
        self.row = row;
        let cell = &mut cells[row as usize];
        match self.kind {
            MarkerKind::Illuminate => {
                cell.set_glyph(ctx.glyphs.next_char(ctx.rng));
                cell.set_state(CellState::LeadingIllumination);
            }
            MarkerKind::Clear => cell.set_state(CellState::LeadingClear),
        }
    }

    /// Leave the current cell and move one row down.
    ///
    /// Returns `false` once the marker has run off the bottom of the column; the
    /// owner must then drop it.
    pub fn advance(&mut self, cells: &mut [Cell], ctx: &mut MarkerContext) -> bool {
        let cell = &mut cells[self.row as usize];
        match self.kind {
            MarkerKind::Illuminate => {
                let lightness = rand_inclusive(
                    ctx.rng,
                    ctx.lightness.min as u32,
                    ctx.lightness.max as u32,
                ) as u8;
                cell.set_state(CellState::Afterglow { lightness });
            }
            MarkerKind::Clear => {
                // A drop may have landed here since; only undo our own mark.
                if cell.state == CellState::LeadingClear {
                    cell.set_state(CellState::Empty);
                }
            }
        }

        let next = self.row + 1;
        if (next as usize) < cells.len() {
            self.attach(cells, next, ctx);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::seed_state;

    fn column(rows: u32) -> Vec<Cell> {
        (0..rows).map(|r| Cell::new(r, 0, '0')).collect()
    }

    #[test]
    fn drop_leaves_afterglow_in_range() {
        let glyphs = GlyphSet::default();
        let mut rng = seed_state(11);
        let mut ctx = MarkerContext { rng: &mut rng, glyphs: &glyphs, lightness: LightnessRange::default() };
        let mut cells = column(3);

        let mut drop = Marker::spawn(MarkerKind::Illuminate, &mut cells, 0, &mut ctx);
        assert_eq!(cells[0].state, CellState::LeadingIllumination);
        assert!(glyphs.contains(cells[0].glyph as u32));

        assert!(drop.advance(&mut cells, &mut ctx));
        assert_eq!(drop.row(), 1);
        match cells[0].state {
            CellState::Afterglow { lightness } => assert!((10..=50).contains(&lightness)),
            other => panic!("expected afterglow, got {:?}", other),
        }
        assert_eq!(cells[1].state, CellState::LeadingIllumination);
    }

    #[test]
    fn marker_exits_after_last_row() {
        let glyphs = GlyphSet::default();
        let mut rng = seed_state(2);
        let mut ctx = MarkerContext { rng: &mut rng, glyphs: &glyphs, lightness: LightnessRange::default() };
        let mut cells = column(2);

        let mut clear = Marker::spawn(MarkerKind::Clear, &mut cells, 1, &mut ctx);
        assert!(!clear.advance(&mut cells, &mut ctx));
        assert_eq!(cells[1].state, CellState::Empty);

        let mut drop = Marker::spawn(MarkerKind::Illuminate, &mut cells, 1, &mut ctx);
        assert!(!drop.advance(&mut cells, &mut ctx));
        assert!(matches!(cells[1].state, CellState::Afterglow { .. }));
    }

    #[test]
    fn clear_erases_trail_but_keeps_glyph() {
        let glyphs = GlyphSet::default();
        let mut rng = seed_state(8);
        let mut ctx = MarkerContext { rng: &mut rng, glyphs: &glyphs, lightness: LightnessRange::default() };
        let mut cells = column(3);
        cells[1].state = CellState::Afterglow { lightness: 20 };
        cells[1].glyph = 'X';

        let mut clear = Marker::spawn(MarkerKind::Clear, &mut cells, 0, &mut ctx);
        assert!(clear.advance(&mut cells, &mut ctx));
        assert_eq!(cells[0].state, CellState::Empty);
        assert_eq!(cells[1].state, CellState::LeadingClear);
        assert_eq!(cells[1].glyph, 'X');

        assert!(clear.advance(&mut cells, &mut ctx));
        assert_eq!(cells[1].state, CellState::Empty);
    }

    #[test]
    fn clear_does_not_erase_a_drop_head() {
        let glyphs = GlyphSet::default();
        let mut rng = seed_state(8);
        let mut ctx = MarkerContext { rng: &mut rng, glyphs: &glyphs, lightness: LightnessRange::default() };
        let mut cells = column(3);

        let mut clear = Marker::spawn(MarkerKind::Clear, &mut cells, 0, &mut ctx);
        cells[0].state = CellState::LeadingIllumination;
        assert!(clear.advance(&mut cells, &mut ctx));
        assert_eq!(cells[0].state, CellState::LeadingIllumination);
    }

    #[test]
    fn fixed_lightness_range() {
        let glyphs = GlyphSet::default();
        let mut rng = seed_state(4);
        let mut ctx = MarkerContext { rng: &mut rng, glyphs: &glyphs, lightness: LightnessRange { min: 33, max: 33 } };
        let mut cells = column(2);
        let mut drop = Marker::spawn(MarkerKind::Illuminate, &mut cells, 0, &mut ctx);
        drop.advance(&mut cells, &mut ctx);
        assert_eq!(cells[0].state, CellState::Afterglow { lightness: 33 });
    }
}
