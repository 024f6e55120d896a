use crate::core::Result;
use crate::domain::MarkerContext;

use super::{GridCore, PerfTimer};

pub(super) fn tick(core: &mut GridCore) -> Result<()> {
    let timer = PerfTimer::start();
    let mut stats = core.stats.next();
    let chances = core.spawn_chances();

    let mut ctx = MarkerContext {
        rng: &mut core.rng_state,
        glyphs: &core.glyphs,
        lightness: core.config.afterglow_lightness,
    };
    for column in core.columns.iter_mut() {
        column.tick(&mut ctx, chances, &mut stats);
        stats.illuminating += column.illuminating().len() as u32;
        stats.clearing += column.clearing().len() as u32;
    }

    let painted = flush_dirty(core);
    stats.tick_ms = timer.elapsed_ms();
    core.stats = stats;

    if core.stats.fallback_clears > 0 {
        log::trace!(
            "tick {}: {} saturated column(s) took a fallback clear",
            core.stats.ticks,
            core.stats.fallback_clears
        );
    }
    painted
}

/// Hand every changed cell to the surface. Cells that fail to paint stay dirty
/// and are retried on the next flush.
pub(super) fn flush_dirty(core: &mut GridCore) -> Result<()> {
    for column in core.columns.iter_mut() {
        for cell in column.cells_mut() {
            if cell.dirty {
                core.surface.paint(cell)?;
                cell.dirty = false;
            }
        }
    }
    Ok(())
}
