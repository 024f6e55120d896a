//! Domain types: glyphs, cells, markers and settings

pub mod cell;
pub mod config;
pub mod glyphs;
pub mod marker;

pub use cell::{Cell, CellState};
pub use config::{LightnessRange, RainConfig};
pub use glyphs::{GlyphRange, GlyphSet};
pub use marker::{Marker, MarkerContext, MarkerKind};
