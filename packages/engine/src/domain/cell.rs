use serde::Serialize;

pub const TAG_LEADING_ILLUMINATE: &str = "leading-illuminate";
pub const TAG_AFTERGLOW: &str = "afterglow";
pub const TAG_LEADING_CLEAR: &str = "leading-clear";

/// All state tags, for surfaces that need to strip every one before applying the next.
pub const STATE_TAGS: [&str; 3] = [TAG_LEADING_ILLUMINATE, TAG_AFTERGLOW, TAG_LEADING_CLEAR];

/// Visual state of one grid position. Variants are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CellState {
    #[default]
    Empty,
    /// Head of a falling drop
    LeadingIllumination,
    /// Trail left behind a drop; lightness is an HSL percentage
    Afterglow { lightness: u8 },
    /// Head of a drop-clear
    LeadingClear,
}

impl CellState {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, CellState::Empty)
    }

    pub fn tag(&self) -> Option<&'static str> {
        match self {
            CellState::Empty => None,
            CellState::LeadingIllumination => Some(TAG_LEADING_ILLUMINATE),
            CellState::Afterglow { .. } => Some(TAG_AFTERGLOW),
            CellState::LeadingClear => Some(TAG_LEADING_CLEAR),
        }
    }

    /// CSS color for the state, only afterglow carries one.
    pub fn color(&self, hue: u16) -> Option<String> {
        match self {
            CellState::Afterglow { lightness } => Some(format!("hsl({}, 100%, {}%)", hue, lightness)),
            _ => None,
        }
    }

    /// Compact code for byte-oriented renderers.
    pub fn code(&self) -> u8 {
        match self {
            CellState::Empty => 0,
            CellState::LeadingIllumination => 1,
            CellState::Afterglow { .. } => 2,
            CellState::LeadingClear => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    #[serde(flatten)]
    pub state: CellState,
    pub glyph: char,
    /// Changed since the last repaint
    #[serde(skip)]
    pub(crate) dirty: bool,
}

impl Cell {
    pub fn new(row: u32, col: u32, glyph: char) -> Self {
        Self { row, col, state: CellState::Empty, glyph, dirty: false }
    }

    #[inline]
    pub fn set_state(&mut self, state: CellState) {
        if self.state != state {
            self.state = state;
            self.dirty = true;
        }
    }

    #[inline]
    pub fn set_glyph(&mut self, glyph: char) {
        if self.glyph != glyph {
            self.glyph = glyph;
            self.dirty = true;
        }
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_exclusive() {
        let states = [
            CellState::Empty,
            CellState::LeadingIllumination,
            CellState::Afterglow { lightness: 30 },
            CellState::LeadingClear,
        ];
        let tags: Vec<_> = states.iter().map(CellState::tag).collect();
        assert_eq!(
            tags,
            vec![None, Some("leading-illuminate"), Some("afterglow"), Some("leading-clear")]
        );
    }

    #[test]
    fn only_afterglow_has_color() {
        assert_eq!(
            CellState::Afterglow { lightness: 42 }.color(120).as_deref(),
            Some("hsl(120, 100%, 42%)")
        );
        assert_eq!(CellState::LeadingIllumination.color(120), None);
        assert_eq!(CellState::Empty.color(120), None);
    }

    #[test]
    fn serializes_flat() {
        let mut cell = Cell::new(2, 3, 'ア');
        cell.state = CellState::Afterglow { lightness: 17 };
        let json = serde_json::to_value(cell).unwrap();
        assert_eq!(json["state"], "afterglow");
        assert_eq!(json["lightness"], 17);
        assert_eq!(json["glyph"], "ア");
        assert_eq!(json["row"], 2);
        assert!(json.get("dirty").is_none());
    }

    #[test]
    fn only_real_changes_mark_dirty() {
        let mut cell = Cell::new(0, 0, '0');
        cell.set_state(CellState::Empty);
        cell.set_glyph('0');
        assert!(!cell.is_dirty());
        cell.set_state(CellState::LeadingClear);
        assert!(cell.is_dirty());
    }
}
