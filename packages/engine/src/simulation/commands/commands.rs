use crate::domain::{MarkerContext, MarkerKind};
use crate::render::Dimensions;

use super::step::flush_dirty;
use super::GridCore;

pub(super) fn add_drop(core: &mut GridCore, col: u32, row: u32) -> bool {
    add_marker(core, MarkerKind::Illuminate, col, row)
}

pub(super) fn add_clear(core: &mut GridCore, col: u32, row: u32) -> bool {
    add_marker(core, MarkerKind::Clear, col, row)
}

fn add_marker(core: &mut GridCore, kind: MarkerKind, col: u32, row: u32) -> bool {
    let Some(column) = core.columns.get_mut(col as usize) else {
        return false;
    };
    if !column.row_is_free(row) {
        return false;
    }
    let mut ctx = MarkerContext {
        rng: &mut core.rng_state,
        glyphs: &core.glyphs,
        lightness: core.config.afterglow_lightness,
    };
    if !column.add_marker(kind, row, &mut ctx) {
        return false;
    }
    if let Err(err) = flush_dirty(core) {
        log::warn!("paint after manual {:?} failed: {}", kind, err);
    }
    true
}

pub(super) fn clear(core: &mut GridCore) -> crate::core::Result<()> {
    core.columns.clear();
    core.dims = Dimensions::default();
    core.surface.clear()
}
