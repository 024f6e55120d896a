//! Rendering surfaces
//!
//! The simulation never touches the page directly. A [`Surface`] reports the
//! viewport, receives the freshly built matrix on rebuild and is asked to repaint
//! every cell whose state changed during a tick.

pub mod dom;
pub mod headless;
pub mod snapshot;

pub use dom::DomSurface;
pub use headless::{HeadlessProbe, HeadlessSurface};
pub use snapshot::Snapshot;

use serde::Serialize;

use crate::core::Result;
use crate::domain::Cell;
use crate::simulation::Column;

/// Upper bound per axis, guards against absurd viewport reports.
pub const MAX_AXIS_CELLS: u32 = 4096;

/// Host viewport in CSS pixels plus the rendered glyph size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width_px: f64,
    pub height_px: f64,
    pub font_px: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Dimensions {
    pub rows: u32,
    pub columns: u32,
}

impl Dimensions {
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }
}

impl Viewport {
    /// Grid size that fits: one column per glyph width, one row per line.
    pub fn dimensions(&self, line_height: f32) -> Dimensions {
        let glyph_w = self.font_px;
        let glyph_h = self.font_px * line_height as f64;
        Dimensions {
            rows: fit(self.height_px, glyph_h),
            columns: fit(self.width_px, glyph_w),
        }
    }
}

fn fit(extent: f64, step: f64) -> u32 {
    if !(extent.is_finite() && step.is_finite()) || extent <= 0.0 || step <= 0.0 {
        return 0;
    }
    ((extent / step).floor() as u32).min(MAX_AXIS_CELLS)
}

pub trait Surface {
    fn viewport(&self) -> Result<Viewport>;

    /// Replace everything on screen with `columns`.
    fn rebuild(&mut self, dims: Dimensions, columns: &[Column]) -> Result<()>;

    /// Repaint a single cell.
    fn paint(&mut self, cell: &Cell) -> Result<()>;

    /// Remove everything from screen.
    fn clear(&mut self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_use_line_height() {
        let vp = Viewport { width_px: 800.0, height_px: 600.0, font_px: 16.0 };
        assert_eq!(vp.dimensions(1.5), Dimensions { rows: 25, columns: 50 });
        assert_eq!(vp.dimensions(1.0), Dimensions { rows: 37, columns: 50 });
    }

    #[test]
    fn tiny_or_broken_viewports_are_empty() {
        let tiny = Viewport { width_px: 10.0, height_px: 10.0, font_px: 16.0 };
        assert!(tiny.dimensions(1.5).is_empty());

        let no_font = Viewport { width_px: 800.0, height_px: 600.0, font_px: 0.0 };
        assert_eq!(no_font.dimensions(1.5), Dimensions::default());

        let nan = Viewport { width_px: f64::NAN, height_px: 600.0, font_px: 16.0 };
        assert_eq!(nan.dimensions(1.5).columns, 0);
    }

    #[test]
    fn huge_viewports_are_capped() {
        let vp = Viewport { width_px: 1e12, height_px: 1e12, font_px: 1.0 };
        let dims = vp.dimensions(1.0);
        assert_eq!(dims.columns, MAX_AXIS_CELLS);
        assert_eq!(dims.rows, MAX_AXIS_CELLS);
    }
}
