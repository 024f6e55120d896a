use crate::core::random::{clock_seed, seed_state};
use crate::core::Result;
use crate::domain::{Cell, RainConfig};
use crate::render::{Dimensions, Surface};

use super::{Column, GridCore, TickStats};

pub(super) fn create_grid_core(config: RainConfig, surface: Box<dyn Surface>) -> Result<GridCore> {
    config.validate()?;
    let glyphs = config.glyph_set()?;
    let rng_state = config.seed.map(seed_state).unwrap_or_else(clock_seed);

    Ok(GridCore {
        config,
        glyphs,
        rng_state,
        columns: Vec::new(),
        dims: Dimensions::default(),
        surface,
        stats: TickStats::default(),
    })
}

pub(super) fn rebuild(core: &mut GridCore) -> Result<()> {
    let viewport = core.surface.viewport()?;
    let mut dims = viewport.dimensions(core.config.line_height);
    if dims.is_empty() {
        dims = Dimensions::default();
    }

    let mut columns = Vec::with_capacity(dims.columns as usize);
    for col in 0..dims.columns {
        let cells = (0..dims.rows)
            .map(|row| Cell::new(row, col, core.glyphs.next_char(&mut core.rng_state)))
            .collect();
        columns.push(Column::new(col, cells));
    }

    core.columns = columns;
    core.dims = dims;
    core.surface.rebuild(dims, &core.columns)?;

    log::debug!(
        "rebuilt grid: {} columns x {} rows (viewport {}x{} @ {}px)",
        dims.columns,
        dims.rows,
        viewport.width_px,
        viewport.height_px,
        viewport.font_px
    );
    Ok(())
}
