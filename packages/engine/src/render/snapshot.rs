use serde::Serialize;

use super::Dimensions;
use crate::domain::Cell;
use crate::simulation::GridCore;

/// Point-in-time copy of the grid for external renderers.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub dims: Dimensions,
    pub tick: u64,
    /// Column-major, `columns[c][r]`
    pub columns: Vec<Vec<Cell>>,
}

impl Snapshot {
    pub fn capture(core: &GridCore) -> Self {
        Self {
            dims: core.dims(),
            tick: core.tick_count(),
            columns: core.columns().iter().map(|c| c.cells().to_vec()).collect(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Row-major state codes (see [`crate::domain::CellState::code`]).
pub fn state_codes(core: &GridCore) -> Vec<u8> {
    let dims = core.dims();
    let mut codes = vec![0u8; dims.cell_count()];
    for column in core.columns() {
        for cell in column.cells() {
            let idx = cell.row as usize * dims.columns as usize + cell.col as usize;
            codes[idx] = cell.state.code();
        }
    }
    codes
}

/// Row-major glyphs, one `char` per cell, rows separated by `\n`.
pub fn glyph_text(core: &GridCore) -> String {
    let dims = core.dims();
    let mut out = String::with_capacity(dims.cell_count() * 2 + dims.rows as usize);
    for row in 0..dims.rows as usize {
        if row > 0 {
            out.push('\n');
        }
        for column in core.columns() {
            out.push(column.cells()[row].glyph);
        }
    }
    out
}
