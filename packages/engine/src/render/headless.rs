//! Off-screen surface for tests and native embedders.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Dimensions, Surface, Viewport};
use crate::core::Result;
use crate::domain::Cell;
use crate::simulation::Column;

#[derive(Debug, Default)]
struct HeadlessState {
    viewport: Option<Viewport>,
    dims: Dimensions,
    rebuilds: u32,
    paints: u64,
    last_painted: Option<Cell>,
}

/// Surface with a settable viewport that only counts what it is asked to draw.
pub struct HeadlessSurface {
    state: Rc<RefCell<HeadlessState>>,
}

/// Handle kept by the caller after the surface has been boxed into a grid.
#[derive(Clone)]
pub struct HeadlessProbe {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessSurface {
    pub fn new(viewport: Viewport) -> Self {
        let state = HeadlessState { viewport: Some(viewport), ..HeadlessState::default() };
        Self { state: Rc::new(RefCell::new(state)) }
    }

    /// Viewport sized to hold exactly `rows` x `columns` glyphs of `font_px`.
    pub fn with_cells(rows: u32, columns: u32, font_px: f64, line_height: f32) -> Self {
        Self::new(Viewport {
            width_px: columns as f64 * font_px,
            height_px: rows as f64 * font_px * line_height as f64,
            font_px,
        })
    }

    pub fn probe(&self) -> HeadlessProbe {
        HeadlessProbe { state: Rc::clone(&self.state) }
    }
}

impl HeadlessProbe {
    /// Simulate a window resize; takes effect on the next rebuild.
    pub fn set_viewport(&self, viewport: Viewport) {
        self.state.borrow_mut().viewport = Some(viewport);
    }

    pub fn dims(&self) -> Dimensions { self.state.borrow().dims }

    pub fn rebuilds(&self) -> u32 { self.state.borrow().rebuilds }

    pub fn paints(&self) -> u64 { self.state.borrow().paints }

    pub fn last_painted(&self) -> Option<Cell> { self.state.borrow().last_painted }
}

impl Surface for HeadlessSurface {
    fn viewport(&self) -> Result<Viewport> {
        Ok(self.state.borrow().viewport.unwrap_or(Viewport {
            width_px: 0.0,
            height_px: 0.0,
            font_px: 0.0,
        }))
    }

    fn rebuild(&mut self, dims: Dimensions, _columns: &[Column]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.dims = dims;
        state.rebuilds += 1;
        Ok(())
    }

    fn paint(&mut self, cell: &Cell) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.paints += 1;
        state.last_painted = Some(*cell);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.state.borrow_mut().dims = Dimensions::default();
        Ok(())
    }
}
